//! Label traits for machine states and events.
//!
//! States and events are caller-defined closed sets. The machine only needs
//! to compare them for equality and to name them in diagnostics; everything
//! else about the label type belongs to the caller.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// A state is one label from a closed set. Exactly one state is current in a
/// [`Machine`](crate::Machine) at any time.
///
/// # Required Traits
///
/// - `Clone`: the machine copies targets out of the shared table
/// - `PartialEq`: lookups and [`is`](crate::Machine::is) use value equality
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: declarative tables and transition records
///
/// # Example
///
/// ```rust
/// use fsmcell::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FetchState {
///     Idle,
///     Loading,
///     Success,
///     Error,
/// }
///
/// impl State for FetchState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Loading => "Loading",
///             Self::Success => "Success",
///             Self::Error => "Error",
///         }
///     }
/// }
///
/// assert_eq!(FetchState::Loading.name(), "Loading");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for machine events.
///
/// Events are offered to [`Machine::send`](crate::Machine::send) and consumed
/// immediately during lookup; the machine never stores them.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}
