//! The transition engine.
//!
//! [`Machine`] owns the current state and resolves events against a shared
//! [`TransitionTable`](crate::core::TransitionTable). It is deliberately free of
//! any notification concern; see [`reactive`](crate::reactive) for the layer
//! that tells observers about successful transitions.

mod machine;
mod outcome;

pub use machine::Machine;
pub use outcome::SendOutcome;
