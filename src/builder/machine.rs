//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State, TransitionTable};
use crate::engine::Machine;
use crate::validation::{into_result, DeclaredStates};
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`Machine::new`], which accepts any initial state and table, the
/// builder can check both against a declared closed set of states.
pub struct MachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    table: Option<Arc<TransitionTable<S, E>>>,
    declared: Option<DeclaredStates<S>>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: None,
            declared: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition table (required).
    pub fn table(mut self, table: impl Into<Arc<TransitionTable<S, E>>>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Declare the closed set of states (optional).
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.declared = Some(DeclaredStates::new(states));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or validation fails.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let table = self.table.ok_or(BuildError::MissingTable)?;

        if let Some(declared) = &self.declared {
            into_result(declared.validate(Some(&initial), &table)).map_err(BuildError::Invalid)?;
        }

        Ok(Machine::new(initial, table))
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::validation::TableViolation;

    fn fetch_table() -> TransitionTable<String, String> {
        TableBuilder::new()
            .on("idle".into(), "FETCH".into(), "loading".into())
            .on("loading".into(), "SUCCESS".into(), "success".into())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<String, String>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));

        let result = MachineBuilder::<String, String>::new()
            .initial("idle".into())
            .build();
        assert!(matches!(result, Err(BuildError::MissingTable)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = Machine::builder()
            .initial("idle".to_string())
            .table(fetch_table())
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn declared_states_check_initial_state() {
        let result = Machine::builder()
            .initial("booting".to_string())
            .table(fetch_table())
            .states(["idle", "loading", "success"].map(String::from))
            .build();

        match result {
            Err(BuildError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![TableViolation::UndeclaredInitial {
                        state: "booting".to_string(),
                    }]
                );
            }
            Err(other) => panic!("Expected validation failure, got {other}"),
            Ok(_) => panic!("Expected validation failure, got a machine"),
        }
    }

    #[test]
    fn terminal_initial_state_is_accepted() {
        let mut machine = Machine::builder()
            .initial("success".to_string())
            .table(fetch_table())
            .states(["idle", "loading", "success"].map(String::from))
            .build()
            .unwrap();

        assert!(!machine.send("FETCH".into()));
    }
}
