//! Configuration error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a declarative table
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a valid table description
    #[error("Failed to parse transition table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A state appears as more than one row
    #[error("State '{state}' is listed more than once")]
    DuplicateState { state: String },

    /// A rule names a guard that was never registered
    #[error("Unknown guard '{name}' on event '{event}' in state '{state}'")]
    UnknownGuard {
        name: String,
        state: String,
        event: String,
    },

    /// The described table could not be built
    #[error(transparent)]
    Build(#[from] BuildError),
}
