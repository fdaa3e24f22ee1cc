//! Transition rules and the table that maps (state, event) pairs to them.

use super::guard::Guard;
use super::state::{Event, State};

/// What happens when an event matches in a given state.
///
/// `Direct` always fires. `Guarded` fires when its guard is absent or returns
/// `true`; a guarded rule without a guard behaves exactly like `Direct`.
#[derive(Clone, Debug)]
pub enum TransitionRule<S: State> {
    /// Move straight to the target.
    Direct(S),

    /// Move to the target if the guard allows it.
    Guarded { target: S, guard: Option<Guard> },
}

impl<S: State> TransitionRule<S> {
    /// Destination state of the rule.
    pub fn target(&self) -> &S {
        match self {
            Self::Direct(target) => target,
            Self::Guarded { target, .. } => target,
        }
    }

    /// Guard attached to the rule, if any.
    pub fn guard(&self) -> Option<&Guard> {
        match self {
            Self::Direct(_) => None,
            Self::Guarded { guard, .. } => guard.as_ref(),
        }
    }
}

impl<S: State> From<S> for TransitionRule<S> {
    fn from(target: S) -> Self {
        Self::Direct(target)
    }
}

/// Create a guarded rule from a target and a predicate.
///
/// # Example
///
/// ```rust
/// use fsmcell::core::{guarded, TransitionRule};
///
/// let rule: TransitionRule<String> = guarded("loading".to_string(), || true);
/// assert_eq!(rule.target(), "loading");
/// assert!(rule.guard().is_some());
/// ```
pub fn guarded<S, F>(target: S, guard: F) -> TransitionRule<S>
where
    S: State,
    F: Fn() -> bool + Send + Sync + 'static,
{
    TransitionRule::Guarded {
        target,
        guard: Some(Guard::new(guard)),
    }
}

#[derive(Clone, Debug)]
struct StateRow<S: State, E: Event> {
    state: S,
    rules: Vec<(E, TransitionRule<S>)>,
}

/// Mapping from state to a per-state mapping from event to rule.
///
/// Rows and rules keep insertion order. A state with no row, or a row with no
/// rule for an event, simply has no transition for that event; a state that
/// has a row but no rules behaves as terminal.
///
/// A table is treated as immutable once a machine owns it. Machines hold it
/// behind an `Arc`, so one table can back any number of machines.
///
/// # Example
///
/// ```rust
/// use fsmcell::core::{TransitionRule, TransitionTable};
///
/// let mut table: TransitionTable<String, String> = TransitionTable::new();
/// table.insert(
///     "idle".into(),
///     "FETCH".into(),
///     TransitionRule::Direct(String::from("loading")),
/// );
///
/// assert!(table.rule(&"idle".into(), &"FETCH".into()).is_some());
/// assert!(table.rule(&"idle".into(), &"SUCCESS".into()).is_none());
/// assert!(table.rule(&"loading".into(), &"FETCH".into()).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    rows: Vec<StateRow<S, E>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn row(&self, state: &S) -> Option<&StateRow<S, E>> {
        self.rows.iter().find(|row| row.state == *state)
    }

    fn row_mut(&mut self, state: S) -> &mut StateRow<S, E> {
        let index = match self.rows.iter().position(|row| row.state == state) {
            Some(index) => index,
            None => {
                self.rows.push(StateRow {
                    state,
                    rules: Vec::new(),
                });
                self.rows.len() - 1
            }
        };
        &mut self.rows[index]
    }

    /// Add a row for `state` with no rules, if it has none yet.
    pub fn add_state(&mut self, state: S) {
        self.row_mut(state);
    }

    /// Set the rule for `(from, event)`, returning the rule it replaces.
    pub fn insert(
        &mut self,
        from: S,
        event: E,
        rule: impl Into<TransitionRule<S>>,
    ) -> Option<TransitionRule<S>> {
        let rule = rule.into();
        let row = self.row_mut(from);
        match row.rules.iter_mut().find(|(existing, _)| *existing == event) {
            Some((_, slot)) => Some(std::mem::replace(slot, rule)),
            None => {
                row.rules.push((event, rule));
                None
            }
        }
    }

    /// Look up the rule for `event` in `state`.
    pub fn rule(&self, state: &S, event: &E) -> Option<&TransitionRule<S>> {
        self.row(state)?
            .rules
            .iter()
            .find(|(candidate, _)| candidate == event)
            .map(|(_, rule)| rule)
    }

    /// Whether `state` has a row, even an empty one.
    pub fn contains_state(&self, state: &S) -> bool {
        self.row(state).is_some()
    }

    /// Events that have a rule in `state`, in insertion order.
    pub fn events_from<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a E> + 'a {
        self.row(state)
            .into_iter()
            .flat_map(|row| row.rules.iter().map(|(event, _)| event))
    }

    /// States that have a row, in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.rows.iter().map(|row| &row.state)
    }

    /// Every `(from, event, rule)` entry, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &E, &TransitionRule<S>)> + '_ {
        self.rows.iter().flat_map(|row| {
            row.rules
                .iter()
                .map(move |(event, rule)| (&row.state, event, rule))
        })
    }

    /// Number of rules across all rows.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.rules.len()).sum()
    }

    /// Whether the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
