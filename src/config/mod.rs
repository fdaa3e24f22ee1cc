//! Declarative transition tables.
//!
//! A table can be described as a JSON document in the same shape a UI
//! component would write it inline: each state maps to an object of events,
//! and each event maps either to a bare target or to an object with a
//! `target` and an optional named `guard`.
//!
//! ```json
//! {
//!   "Idle":    { "Fetch": "Loading" },
//!   "Loading": { "Resolve": "Success", "Reject": { "target": "Error" } },
//!   "Error":   { "Retry": { "target": "Loading", "guard": "can_retry" } },
//!   "Success": {}
//! }
//! ```
//!
//! Guards are code, so documents only name them; the names are resolved
//! against a [`GuardRegistry`] when the table is built.
//!
//! # Example
//!
//! ```rust
//! use fsmcell::config::GuardRegistry;
//! use fsmcell::core::TransitionTable;
//! use fsmcell::Machine;
//!
//! let guards = GuardRegistry::new().with("online", || true);
//! let table: TransitionTable<String, String> = TransitionTable::from_json(
//!     r#"{ "idle": { "FETCH": { "target": "loading", "guard": "online" } } }"#,
//!     &guards,
//! )
//! .unwrap();
//!
//! let mut machine = Machine::new("idle".to_string(), table);
//! assert!(machine.send("FETCH".to_string()));
//! assert!(machine.is(&"loading".to_string()));
//! ```

mod ordered;

pub mod error;

pub use error::ConfigError;
pub use ordered::OrderedMap;

use crate::builder::TableBuilder;
use crate::core::{Event, Guard, State, TransitionRule, TransitionTable};
use serde::Deserialize;
use std::collections::HashMap;

/// Named guards that declarative tables may refer to.
#[derive(Clone, Debug, Default)]
pub struct GuardRegistry {
    guards: HashMap<String, Guard>,
}

impl GuardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a guard under `name`, replacing any previous one.
    pub fn insert<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guards.insert(name.into(), Guard::new(predicate));
    }

    /// Register a guard and return the registry.
    pub fn with<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.insert(name, predicate);
        self
    }

    /// Look up a guard by name.
    pub fn get(&self, name: &str) -> Option<&Guard> {
        self.guards.get(name)
    }
}

/// One rule as written in a document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged, bound = "")]
pub enum RuleConfig<S: State> {
    /// `"Loading"`
    Target(S),

    /// `{ "target": "Loading", "guard": "name" }`
    Object(GuardedRuleConfig<S>),
}

/// Object form of a rule. Unknown keys are rejected so a misspelled `guard`
/// cannot load as an unguarded rule.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, bound = "")]
pub struct GuardedRuleConfig<S: State> {
    pub target: S,
    #[serde(default)]
    pub guard: Option<String>,
}

/// A table as written in a document, before guards are resolved.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent, bound = "")]
pub struct TableConfig<S: State, E: Event> {
    rows: OrderedMap<S, OrderedMap<E, RuleConfig<S>>>,
}

impl<S: State, E: Event> TableConfig<S, E> {
    /// Parse a JSON table description.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve guard names and build the table.
    ///
    /// Document order is kept. A state listed twice is reported as a
    /// duplicate state; an event listed twice under one state is reported as
    /// a duplicate rule.
    pub fn into_table(self, guards: &GuardRegistry) -> Result<TransitionTable<S, E>, ConfigError> {
        let mut builder = TableBuilder::new();
        let mut seen: Vec<S> = Vec::new();

        for (state, rules) in self.rows.into_entries() {
            if seen.contains(&state) {
                return Err(ConfigError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
            seen.push(state.clone());
            builder = builder.state(state.clone());
            for (event, rule) in rules.into_entries() {
                let rule = resolve_rule(&state, &event, rule, guards)?;
                builder = builder.rule(state.clone(), event, rule);
            }
        }

        let table = builder.build()?;
        tracing::debug!(
            states = table.states().count(),
            rules = table.len(),
            "loaded transition table"
        );
        Ok(table)
    }
}

fn resolve_rule<S: State, E: Event>(
    state: &S,
    event: &E,
    rule: RuleConfig<S>,
    guards: &GuardRegistry,
) -> Result<TransitionRule<S>, ConfigError> {
    match rule {
        RuleConfig::Target(target) => Ok(TransitionRule::Direct(target)),
        RuleConfig::Object(GuardedRuleConfig { target, guard: None }) => {
            Ok(TransitionRule::Guarded {
                target,
                guard: None,
            })
        }
        RuleConfig::Object(GuardedRuleConfig {
            target,
            guard: Some(name),
        }) => match guards.get(&name) {
            Some(guard) => Ok(TransitionRule::Guarded {
                target,
                guard: Some(guard.clone()),
            }),
            None => Err(ConfigError::UnknownGuard {
                name,
                state: state.name().to_string(),
                event: event.name().to_string(),
            }),
        },
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Parse a JSON table description and resolve its guards.
    pub fn from_json(json: &str, guards: &GuardRegistry) -> Result<Self, ConfigError> {
        TableConfig::from_json(json)?.into_table(guards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;
    use crate::Machine;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    crate::label_enum! {
        enum FetchState {
            Idle,
            Loading,
            Success,
            Error,
        }
    }

    crate::label_enum! {
        enum FetchEvent {
            Fetch,
            Resolve,
            Reject,
            Retry,
        }
    }

    const FETCH_TABLE: &str = r#"{
        "Idle": { "Fetch": "Loading" },
        "Loading": { "Resolve": "Success", "Reject": { "target": "Error" } },
        "Error": { "Retry": { "target": "Loading", "guard": "can_retry" } },
        "Success": {}
    }"#;

    #[test]
    fn parses_both_rule_shapes() {
        let config: TableConfig<FetchState, FetchEvent> = TableConfig::from_json(FETCH_TABLE).unwrap();
        let rows = config.rows.into_entries();

        assert_eq!(rows.len(), 4);
        let (state, rules) = &rows[1];
        assert_eq!(state, &FetchState::Loading);
        assert_eq!(
            rules.0,
            vec![
                (FetchEvent::Resolve, RuleConfig::Target(FetchState::Success)),
                (
                    FetchEvent::Reject,
                    RuleConfig::Object(GuardedRuleConfig {
                        target: FetchState::Error,
                        guard: None,
                    })
                ),
            ]
        );
    }

    #[test]
    fn builds_table_with_named_guards() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guards = GuardRegistry::new().with("can_retry", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let table = TransitionTable::from_json(FETCH_TABLE, &guards).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.contains_state(&FetchState::Success));

        let mut machine = Machine::new(FetchState::Idle, table);
        assert!(machine.send(FetchEvent::Fetch));
        assert!(machine.send(FetchEvent::Reject));
        assert!(machine.send(FetchEvent::Retry));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(machine.is(&FetchState::Loading));
    }

    #[test]
    fn unknown_guard_is_reported() {
        let result: Result<TransitionTable<FetchState, FetchEvent>, _> =
            TransitionTable::from_json(FETCH_TABLE, &GuardRegistry::new());

        match result {
            Err(ConfigError::UnknownGuard { name, state, event }) => {
                assert_eq!(name, "can_retry");
                assert_eq!(state, "Error");
                assert_eq!(event, "Retry");
            }
            other => panic!("Expected unknown guard, got {:?}", other),
        }
    }

    #[test]
    fn unknown_label_fails_to_parse() {
        let result: Result<TableConfig<FetchState, FetchEvent>, _> =
            TableConfig::from_json(r#"{ "Idle": { "Launch": "Loading" } }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn duplicate_state_rows_are_rejected() {
        let result: Result<TransitionTable<String, String>, _> = TransitionTable::from_json(
            r#"{ "idle": { "FETCH": "loading" }, "idle": { "RESET": "idle" } }"#,
            &GuardRegistry::new(),
        );

        match result {
            Err(ConfigError::DuplicateState { state }) => assert_eq!(state, "idle"),
            other => panic!("Expected duplicate state, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_events_in_one_row_are_rejected() {
        let result: Result<TransitionTable<String, String>, _> = TransitionTable::from_json(
            r#"{ "idle": { "FETCH": "loading", "FETCH": "error" } }"#,
            &GuardRegistry::new(),
        );

        assert!(matches!(
            result,
            Err(ConfigError::Build(BuildError::DuplicateRule { .. }))
        ));
    }

    #[test]
    fn misspelled_guard_key_fails_to_parse() {
        let guards = GuardRegistry::new().with("online", || false);
        let result: Result<TransitionTable<String, String>, _> = TransitionTable::from_json(
            r#"{ "idle": { "FETCH": { "target": "loading", "gaurd": "online" } } }"#,
            &guards,
        );

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn object_rule_without_guard_still_loads() {
        let table: TransitionTable<String, String> = TransitionTable::from_json(
            r#"{ "idle": { "FETCH": { "target": "loading" } } }"#,
            &GuardRegistry::new(),
        )
        .unwrap();

        let mut machine = Machine::new("idle".to_string(), table);
        assert!(machine.send("FETCH".to_string()));
        assert!(machine.is(&"loading".to_string()));
    }

    #[test]
    fn registry_replaces_guards_by_name() {
        let mut guards = GuardRegistry::new();
        guards.insert("ready", || false);
        guards.insert("ready", || true);

        assert!(guards.get("ready").unwrap().check());
        assert!(guards.get("missing").is_none());
    }
}
