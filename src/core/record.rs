//! Records describing completed transitions.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single successful transition.
///
/// Records are immutable values handed to observers after the machine has
/// moved. Rejected dispatches never produce one.
///
/// # Example
///
/// ```rust
/// use fsmcell::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "idle".to_string(),
///     event: "FETCH".to_string(),
///     to: "loading".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// assert!(!record.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being left
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state being entered
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State, E: Event> TransitionRecord<S, E> {
    /// Record a transition applied now.
    pub fn now(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            timestamp: Utc::now(),
        }
    }

    /// Whether the transition re-entered the state it left.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
