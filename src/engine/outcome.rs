//! Detailed result of a single dispatch.

use crate::core::State;

/// Result of dispatching one event.
///
/// Neither rejection is an error: an event without a rule and a guard that
/// says no are both ordinary answers from the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome<S: State> {
    /// The machine moved from `from` to `to`
    Transitioned { from: S, to: S },

    /// The current state has no rule for the event
    NoTransition,

    /// A rule matched but its guard returned `false`
    GuardRejected,
}

impl<S: State> SendOutcome<S> {
    /// Whether the machine changed state.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Entered state, when the dispatch succeeded.
    pub fn target(&self) -> Option<&S> {
        match self {
            Self::Transitioned { to, .. } => Some(to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transitioned_counts_as_success() {
        let moved = SendOutcome::Transitioned {
            from: "idle".to_string(),
            to: "loading".to_string(),
        };

        assert!(moved.is_transitioned());
        assert_eq!(moved.target().map(String::as_str), Some("loading"));
        assert!(!SendOutcome::<String>::NoTransition.is_transitioned());
        assert!(!SendOutcome::<String>::GuardRejected.is_transitioned());
        assert!(SendOutcome::<String>::GuardRejected.target().is_none());
    }
}
