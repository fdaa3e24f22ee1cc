//! fsmcell: a minimal table-driven finite state machine
//!
//! fsmcell models the small state machines that live inside UI components: a
//! fetch that goes `Idle -> Loading -> Success | Error`, a wizard, a toggle.
//! A machine holds one current state and a read-only transition table, and
//! answers events with a plain `bool`: the state either moved or it did not.
//!
//! # Core Concepts
//!
//! - **State / Event**: caller-defined closed label sets via the `State` and
//!   `Event` traits (or the [`label_enum!`] macro)
//! - **Transition table**: state -> event -> rule, shared behind an `Arc`
//! - **Rules**: a bare target, or a target gated by a zero-argument guard
//! - **Machine**: owns the current state; `send` applies at most one rule
//! - **Observed machine**: notifies subscribers after successful transitions
//!
//! # Example
//!
//! ```rust
//! use fsmcell::core::guarded;
//! use fsmcell::{label_enum, transitions, Machine};
//!
//! label_enum! {
//!     enum FetchState { Idle, Loading, Success, Error }
//! }
//!
//! label_enum! {
//!     enum FetchEvent { Fetch, Success, Error, Retry, Refresh }
//! }
//!
//! let online = true;
//! let table = transitions! {
//!     FetchState::Idle => { FetchEvent::Fetch => guarded(FetchState::Loading, move || online) },
//!     FetchState::Loading => {
//!         FetchEvent::Success => FetchState::Success,
//!         FetchEvent::Error => FetchState::Error,
//!     },
//!     FetchState::Error => { FetchEvent::Retry => FetchState::Loading },
//!     FetchState::Success => { FetchEvent::Refresh => FetchState::Loading },
//! };
//!
//! let mut machine = Machine::new(FetchState::Idle, table);
//!
//! assert!(!machine.send(FetchEvent::Success));
//! assert!(machine.send(FetchEvent::Fetch));
//! assert!(machine.send(FetchEvent::Success));
//! assert!(machine.is(&FetchState::Success));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod reactive;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, TableBuilder};
pub use crate::core::{Event, Guard, State, TransitionRecord, TransitionRule, TransitionTable};
pub use engine::{Machine, SendOutcome};
pub use reactive::ObservedMachine;
