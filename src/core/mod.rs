//! Core machine types.
//!
//! This module contains the data model of the machine:
//! - State and event labels via the `State` and `Event` traits
//! - Guard predicates for gated transitions
//! - Transition rules and the table that holds them
//! - Records describing completed transitions
//!
//! Nothing in this module mutates a current state; that is the job of
//! [`Machine`](crate::Machine).

mod guard;
mod record;
mod state;
mod table;

pub use guard::Guard;
pub use record::TransitionRecord;
pub use state::{Event, State};
pub use table::{guarded, TransitionRule, TransitionTable};
