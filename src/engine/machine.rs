//! Machine that owns the current state and dispatches events against a table.

use crate::builder::MachineBuilder;
use crate::core::{Event, State, TransitionRule, TransitionTable};
use crate::engine::outcome::SendOutcome;
use std::sync::Arc;

/// Table-driven finite state machine.
///
/// The machine holds exactly one current state and a shared, read-only
/// transition table. Dispatch takes `&mut self`, so at most one transition is
/// ever in flight on a given machine; callers that share a machine across
/// threads serialize access themselves.
///
/// # Example
///
/// ```rust
/// use fsmcell::{label_enum, transitions, Machine};
///
/// label_enum! {
///     enum Fetch { Idle, Loading, Success, Failure }
/// }
///
/// label_enum! {
///     enum Signal { Start, Resolve, Reject }
/// }
///
/// let table = transitions! {
///     Fetch::Idle => { Signal::Start => Fetch::Loading },
///     Fetch::Loading => {
///         Signal::Resolve => Fetch::Success,
///         Signal::Reject => Fetch::Failure,
///     },
/// };
///
/// let mut machine = Machine::new(Fetch::Idle, table);
///
/// assert!(machine.send(Signal::Start));
/// assert!(machine.is(&Fetch::Loading));
/// assert!(!machine.send(Signal::Start));
/// assert!(machine.send(Signal::Resolve));
/// assert_eq!(machine.current_state(), &Fetch::Success);
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State, E: Event> {
    current: S,
    table: Arc<TransitionTable<S, E>>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in `initial`.
    ///
    /// `initial` does not need a row in the table; a state without one
    /// simply accepts no events.
    pub fn new(initial: S, table: impl Into<Arc<TransitionTable<S, E>>>) -> Self {
        Self {
            current: initial,
            table: table.into(),
        }
    }

    /// Start a validated construction.
    pub fn builder() -> MachineBuilder<S, E> {
        MachineBuilder::new()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether `candidate` is the current state (pure)
    pub fn is(&self, candidate: &S) -> bool {
        self.current == *candidate
    }

    /// Get the transition table (pure)
    pub fn table(&self) -> &Arc<TransitionTable<S, E>> {
        &self.table
    }

    /// Whether the current state has a rule for `event`.
    ///
    /// Only the table is consulted; guards are not evaluated, so `true` does
    /// not promise that a dispatch will succeed.
    pub fn has_transition(&self, event: &E) -> bool {
        self.table.rule(&self.current, event).is_some()
    }

    /// Events with a rule from the current state, in table order.
    pub fn available_events(&self) -> Vec<&E> {
        self.table.events_from(&self.current).collect()
    }

    /// Dispatch an event and report what happened.
    ///
    /// Resolution order:
    /// 1. no rule for the current state and event: `NoTransition`
    /// 2. `Direct` rule: transition, no guard involved
    /// 3. `Guarded` rule with a guard: the guard runs exactly once; `false`
    ///    yields `GuardRejected` and leaves the state alone
    /// 4. `Guarded` rule without a guard: transition as in 2
    pub fn dispatch(&mut self, event: E) -> SendOutcome<S> {
        let Some(rule) = self.table.rule(&self.current, &event) else {
            tracing::trace!(
                state = self.current.name(),
                event = event.name(),
                "no transition defined"
            );
            return SendOutcome::NoTransition;
        };

        let target = match rule {
            TransitionRule::Direct(target) => target,
            TransitionRule::Guarded { target, guard } => {
                if let Some(guard) = guard {
                    if !guard.check() {
                        tracing::trace!(
                            state = self.current.name(),
                            event = event.name(),
                            target = target.name(),
                            "guard rejected transition"
                        );
                        return SendOutcome::GuardRejected;
                    }
                }
                target
            }
        };

        let to = target.clone();
        let from = std::mem::replace(&mut self.current, to.clone());
        tracing::debug!(
            from = from.name(),
            event = event.name(),
            to = to.name(),
            "transition applied"
        );

        SendOutcome::Transitioned { from, to }
    }

    /// Dispatch an event; `true` when the machine changed state.
    pub fn send(&mut self, event: E) -> bool {
        self.dispatch(event).is_transitioned()
    }

    /// Swap in a new table, keeping the current state.
    ///
    /// Returns the table that was in use. If the new table has no row for the
    /// current state, the machine accepts no further events.
    pub fn replace_table(
        &mut self,
        table: impl Into<Arc<TransitionTable<S, E>>>,
    ) -> Arc<TransitionTable<S, E>> {
        let table = table.into();
        if !table.contains_state(&self.current) {
            tracing::debug!(
                state = self.current.name(),
                "replacement table has no row for current state"
            );
        }
        std::mem::replace(&mut self.table, table)
    }
}
