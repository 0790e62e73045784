//! Bounded history of state transitions.
//!
//! The actor runs forever, so the history keeps only the most recent
//! transitions and counts the ones it has dropped.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of transitions retained when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single change of state.
///
/// Only real changes are recorded; a tick that leaves the actor in the
/// same variant produces no record.
///
/// # Example
///
/// ```rust
/// use heroine::core::StateTransition;
/// use heroine::HeroineState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: HeroineState::Walking,
///     to: HeroineState::Jumping,
///     timestamp: Utc::now(),
///     tick: 1,
/// };
/// assert_ne!(transition.from, transition.to);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Wall-clock time the change was observed
    pub timestamp: DateTime<Utc>,
    /// Ordinal of the tick that produced the change (1-based)
    pub tick: u64,
}

/// Ordered, bounded history of state transitions.
///
/// Oldest records are evicted first once `limit` is reached.
///
/// # Example
///
/// ```rust
/// use heroine::core::{StateHistory, StateTransition};
/// use heroine::HeroineState;
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(1);
///
/// history.record(StateTransition {
///     from: HeroineState::Walking,
///     to: HeroineState::Jumping,
///     timestamp: Utc::now(),
///     tick: 3,
/// });
/// history.record(StateTransition {
///     from: HeroineState::Jumping,
///     to: HeroineState::Walking,
///     timestamp: Utc::now(),
///     tick: 7,
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.evicted(), 1);
/// assert_eq!(history.get_path(), vec![&HeroineState::Jumping, &HeroineState::Walking]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
    evicted: u64,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` records.
    ///
    /// A limit of zero keeps nothing but still counts evictions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
            evicted: 0,
        }
    }

    /// Append a transition, evicting the oldest record when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            self.evicted += 1;
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
            self.evicted += 1;
        }
        self.transitions.push_back(transition);
    }

    /// States traversed by the retained records.
    ///
    /// Returns the `from` of the oldest retained record followed by the
    /// `to` of every record, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` when empty, or when the clock went backwards between
    /// the two records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of retained records.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of records dropped to honour the limit.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Dawn,
        Noon,
        Dusk,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Dawn => "Dawn",
                Self::Noon => "Noon",
                Self::Dusk => "Dusk",
            }
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn transition(from: Phase, to: Phase, secs: i64, tick: u64) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            timestamp: at(secs),
            tick,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();

        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn get_path_follows_recorded_changes() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Dawn, Phase::Noon, 100, 1));
        history.record(transition(Phase::Noon, Phase::Dusk, 105, 6));

        assert_eq!(
            history.get_path(),
            vec![&Phase::Dawn, &Phase::Noon, &Phase::Dusk]
        );
        assert_eq!(history.last().map(|t| t.tick), Some(6));
    }

    #[test]
    fn oldest_records_are_evicted_at_limit() {
        let mut history = StateHistory::with_limit(2);
        history.record(transition(Phase::Dawn, Phase::Noon, 1, 1));
        history.record(transition(Phase::Noon, Phase::Dusk, 2, 2));
        history.record(transition(Phase::Dusk, Phase::Dawn, 3, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.evicted(), 1);
        assert_eq!(
            history.get_path(),
            vec![&Phase::Noon, &Phase::Dusk, &Phase::Dawn]
        );
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = StateHistory::with_limit(0);
        history.record(transition(Phase::Dawn, Phase::Noon, 1, 1));

        assert!(history.is_empty());
        assert_eq!(history.evicted(), 1);
    }

    #[test]
    fn duration_spans_oldest_to_newest() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Dawn, Phase::Noon, 10, 1));
        history.record(transition(Phase::Noon, Phase::Dusk, 17, 8));

        assert_eq!(history.duration(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Dawn, Phase::Noon, 10, 1));

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn backwards_clock_yields_no_duration() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Dawn, Phase::Noon, 20, 1));
        history.record(transition(Phase::Noon, Phase::Dusk, 10, 2));

        assert!(history.duration().is_none());
    }

    #[test]
    fn history_serializes_with_limit_and_evictions() {
        let mut history = StateHistory::with_limit(1);
        history.record(transition(Phase::Dawn, Phase::Noon, 1, 1));
        history.record(transition(Phase::Noon, Phase::Dusk, 2, 2));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.limit(), 1);
        assert_eq!(back.evicted(), 1);
    }
}
