//! Guard predicates for gating transitions.
//!
//! A guard is a zero-argument predicate attached to a guarded rule. It usually
//! captures context from the surrounding component (a flag, a counter, a
//! mocked dependency in tests) and is consulted at dispatch time, not when the
//! table is built.

use std::fmt;
use std::sync::Arc;

/// Zero-argument predicate that decides whether a guarded transition fires.
///
/// The machine does not assume the predicate is pure: it calls it exactly once
/// per dispatch that resolves to the guarded rule, and never caches the
/// answer. Cloning a guard shares the same closure.
///
/// # Example
///
/// ```rust
/// use fsmcell::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let online = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&online);
/// let guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// online.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate.
    ///
    /// The predicate must be thread-safe (`Send + Sync`) so that a table
    /// holding it can be shared between machines.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate once.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
