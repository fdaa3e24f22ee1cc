//! Closed-set validation of transition tables using Validation.

use crate::core::{Event, State, TransitionTable};
use crate::validation::violations::TableViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a table: success, or every violation found.
pub type TableValidation = Validation<(), NonEmptyVec<TableViolation>>;

/// The closed set of states a table is allowed to mention.
#[derive(Clone, Debug)]
pub struct DeclaredStates<S: State> {
    states: Vec<S>,
}

impl<S: State> DeclaredStates<S> {
    /// Declare `states`, ignoring repeats.
    pub fn new(states: impl IntoIterator<Item = S>) -> Self {
        let mut declared: Vec<S> = Vec::new();
        for state in states {
            if !declared.contains(&state) {
                declared.push(state);
            }
        }
        Self { states: declared }
    }

    /// Whether `state` was declared.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Declared states in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter()
    }

    /// Check the initial state and every row and rule of `table`,
    /// accumulating ALL violations instead of stopping at the first.
    pub fn validate<E: Event>(
        &self,
        initial: Option<&S>,
        table: &TransitionTable<S, E>,
    ) -> TableValidation {
        let mut checks: Vec<TableValidation> = Vec::new();

        if let Some(initial) = initial {
            checks.push(self.check(initial, || TableViolation::UndeclaredInitial {
                state: initial.name().to_string(),
            }));
        }

        for state in table.states() {
            checks.push(self.check(state, || TableViolation::UndeclaredSource {
                state: state.name().to_string(),
            }));
        }

        for (from, event, rule) in table.iter() {
            let target = rule.target();
            checks.push(self.check(target, || TableViolation::UndeclaredTarget {
                from: from.name().to_string(),
                event: event.name().to_string(),
                target: target.name().to_string(),
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check(&self, state: &S, violation: impl FnOnce() -> TableViolation) -> TableValidation {
        if self.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(violation())
        }
    }
}

/// Flatten a validation into a `Result` carrying every violation.
pub fn into_result(validation: TableValidation) -> Result<(), Vec<TableViolation>> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
