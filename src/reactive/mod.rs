//! Notification layer around the pure machine.
//!
//! A UI component re-renders when its state changes. [`ObservedMachine`] wraps a
//! [`Machine`] and calls every subscriber after each successful transition,
//! which is where a component schedules its re-render. Rejected dispatches
//! change nothing observable and notify nobody.
//!
//! # Example
//!
//! ```rust
//! use fsmcell::reactive::ObservedMachine;
//! use fsmcell::{label_enum, transitions, Machine};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! label_enum! {
//!     enum Fetch { Idle, Loading }
//! }
//!
//! label_enum! {
//!     enum Signal { Start, Resolve }
//! }
//!
//! let table = transitions! { Fetch::Idle => { Signal::Start => Fetch::Loading } };
//! let mut observed = ObservedMachine::new(Machine::new(Fetch::Idle, table));
//!
//! let renders = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&renders);
//! observed.subscribe(move |_record| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert!(!observed.send(Signal::Resolve));
//! assert!(observed.send(Signal::Start));
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! ```

use crate::core::{Event, State, TransitionRecord};
use crate::engine::{Machine, SendOutcome};
use std::fmt;

/// Callback invoked with each successful transition.
pub type Listener<S, E> = Box<dyn FnMut(&TransitionRecord<S, E>) + Send>;

/// Handle returned by [`ObservedMachine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A machine that notifies subscribers after successful transitions.
pub struct ObservedMachine<S: State, E: Event> {
    machine: Machine<S, E>,
    listeners: Vec<(SubscriptionId, Listener<S, E>)>,
    next_id: u64,
}

impl<S: State, E: Event> ObservedMachine<S, E> {
    /// Wrap `machine` with no listeners.
    pub fn new(machine: Machine<S, E>) -> Self {
        Self {
            machine,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener; listeners run in subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TransitionRecord<S, E>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch an event; subscribers hear about it only if the machine moved.
    pub fn dispatch(&mut self, event: E) -> SendOutcome<S> {
        let outcome = self.machine.dispatch(event.clone());

        if let SendOutcome::Transitioned { from, to } = &outcome {
            let record = TransitionRecord::now(from.clone(), event, to.clone());
            tracing::trace!(
                listeners = self.listeners.len(),
                to = to.name(),
                "notifying listeners"
            );
            for (_, listener) in self.listeners.iter_mut() {
                listener(&record);
            }
        }

        outcome
    }

    /// Dispatch an event; `true` when the machine changed state.
    pub fn send(&mut self, event: E) -> bool {
        self.dispatch(event).is_transitioned()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        self.machine.current_state()
    }

    /// Check whether `candidate` is the current state (pure)
    pub fn is(&self, candidate: &S) -> bool {
        self.machine.is(candidate)
    }

    /// Borrow the wrapped machine.
    pub fn machine(&self) -> &Machine<S, E> {
        &self.machine
    }

    /// Drop all listeners and hand back the machine.
    pub fn into_inner(self) -> Machine<S, E> {
        self.machine
    }
}

impl<S: State, E: Event> From<Machine<S, E>> for ObservedMachine<S, E> {
    fn from(machine: Machine<S, E>) -> Self {
        Self::new(machine)
    }
}

impl<S: State, E: Event> fmt::Debug for ObservedMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservedMachine")
            .field("machine", &self.machine)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
