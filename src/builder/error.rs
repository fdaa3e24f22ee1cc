//! Build errors for tables and machines.

use crate::validation::TableViolation;
use thiserror::Error;

/// Errors that can occur when building tables and machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition table not specified. Call .table(table) before .build()")]
    MissingTable,

    #[error("Duplicate rule for event '{event}' in state '{state}'")]
    DuplicateRule { state: String, event: String },

    #[error("Transition table failed validation: {}", summarize(.0))]
    Invalid(Vec<TableViolation>),
}

fn summarize(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
