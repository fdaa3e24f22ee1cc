//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{guarded, Event, State, TransitionRule, TransitionTable};
use crate::validation::{into_result, DeclaredStates};

/// Builder for constructing transition tables with a fluent API.
pub struct TableBuilder<S: State, E: Event> {
    table: TransitionTable<S, E>,
    declared: Option<DeclaredStates<S>>,
    duplicate: Option<(String, String)>,
}

impl<S: State, E: Event> TableBuilder<S, E> {
    /// Create a new table builder.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            declared: None,
            duplicate: None,
        }
    }

    /// Add an unconditional transition.
    pub fn on(self, from: S, event: E, target: S) -> Self {
        self.rule(from, event, TransitionRule::Direct(target))
    }

    /// Add a transition gated by a guard closure.
    pub fn on_guarded<F>(self, from: S, event: E, target: S, guard: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.rule(from, event, guarded(target, guard))
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, from: S, event: E, rule: impl Into<TransitionRule<S>>) -> Self {
        let names = (from.name().to_string(), event.name().to_string());
        if self.table.insert(from, event, rule).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(names);
        }
        self
    }

    /// Add a state with no outgoing rules.
    pub fn state(mut self, state: S) -> Self {
        self.table.add_state(state);
        self
    }

    /// Declare the closed set of states (optional).
    /// When declared, `build` rejects tables that mention any other state.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.declared = Some(DeclaredStates::new(states));
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<TransitionTable<S, E>, BuildError> {
        if let Some((state, event)) = self.duplicate {
            return Err(BuildError::DuplicateRule { state, event });
        }

        if let Some(declared) = &self.declared {
            into_result(declared.validate(None, &self.table)).map_err(BuildError::Invalid)?;
        }

        Ok(self.table)
    }
}

impl<S: State, E: Event> Default for TableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::TableViolation;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Loading,
        Success,
        Error,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Loading => "Loading",
                Self::Success => "Success",
                Self::Error => "Error",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Fetch,
        Resolve,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Fetch => "Fetch",
                Self::Resolve => "Resolve",
            }
        }
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::new()
            .on(TestState::Idle, TestEvent::Fetch, TestState::Loading)
            .on_guarded(TestState::Loading, TestEvent::Resolve, TestState::Success, || true)
            .state(TestState::Success)
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains_state(&TestState::Success));
        assert!(table
            .rule(&TestState::Loading, &TestEvent::Resolve)
            .unwrap()
            .guard()
            .is_some());
    }

    #[test]
    fn builder_rejects_duplicate_rules() {
        let result = TableBuilder::new()
            .on(TestState::Idle, TestEvent::Fetch, TestState::Loading)
            .on(TestState::Idle, TestEvent::Fetch, TestState::Error)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateRule {
                state: "Idle".to_string(),
                event: "Fetch".to_string(),
            }
        );
    }

    #[test]
    fn declared_states_validate_targets() {
        let result = TableBuilder::new()
            .states([TestState::Idle, TestState::Loading])
            .on(TestState::Idle, TestEvent::Fetch, TestState::Loading)
            .on(TestState::Loading, TestEvent::Resolve, TestState::Success)
            .build();

        match result {
            Err(BuildError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![TableViolation::UndeclaredTarget {
                        from: "Loading".to_string(),
                        event: "Resolve".to_string(),
                        target: "Success".to_string(),
                    }]
                );
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn undeclared_states_skip_validation() {
        let table = TableBuilder::<String, String>::new()
            .on("idle".into(), "FETCH".into(), "anywhere".into())
            .build();

        assert!(table.is_ok());
    }
}
