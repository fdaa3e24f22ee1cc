//! Violations found when checking a table against a declared state set.

use thiserror::Error;

/// A table entry that references a state outside the declared closed set
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("Initial state '{state}' is not a declared state")]
    UndeclaredInitial { state: String },

    #[error("Transitions are defined from undeclared state '{state}'")]
    UndeclaredSource { state: String },

    #[error("Rule '{from}' --{event}--> '{target}' targets an undeclared state")]
    UndeclaredTarget {
        from: String,
        event: String,
        target: String,
    },
}
