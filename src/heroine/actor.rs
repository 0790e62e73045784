//! The heroine: an actor whose behavior is delegated to her current state.

use super::error::TickError;
use super::state::HeroineState;
use crate::clock::Clock;
use crate::core::{StateHistory, StateTransition};
use std::io::Write;
use tracing::{debug, trace};

/// Actor that owns exactly one [`HeroineState`] at a time.
///
/// Each [`tick`](Heroine::tick) hands control to the current state and
/// replaces it with whatever the state returns.
///
/// # Example
///
/// ```rust
/// use heroine::clock::FixedClock;
/// use heroine::{Heroine, HeroineState};
///
/// let mut heroine = Heroine::new();
/// let mut out = Vec::new();
///
/// heroine.tick(&FixedClock::from_epoch_secs(9), &mut out).unwrap();
///
/// assert_eq!(out, b"walking\n");
/// assert_eq!(heroine.state(), HeroineState::Jumping);
/// ```
#[derive(Clone, Debug)]
pub struct Heroine {
    state: HeroineState,
    ticks: u64,
    history: StateHistory<HeroineState>,
}

impl Default for Heroine {
    fn default() -> Self {
        Self::new()
    }
}

impl Heroine {
    /// A heroine who starts out walking.
    pub fn new() -> Self {
        Self::with_history(StateHistory::new())
    }

    /// A heroine who starts out walking and keeps at most `limit` transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_history(StateHistory::with_limit(limit))
    }

    fn with_history(history: StateHistory<HeroineState>) -> Self {
        Self {
            state: HeroineState::Walking,
            ticks: 0,
            history,
        }
    }

    pub fn state(&self) -> HeroineState {
        self.state
    }

    /// Number of ticks performed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn history(&self) -> &StateHistory<HeroineState> {
        &self.history
    }

    /// Run one tick: let the current state act, then adopt its result.
    ///
    /// A change of variant is recorded in the history. On error the
    /// heroine keeps her current state and the tick is not counted.
    pub fn tick<C, W>(&mut self, clock: &C, out: &mut W) -> Result<(), TickError>
    where
        C: Clock + ?Sized,
        W: Write + ?Sized,
    {
        let current = self.state;
        let next = current.compute_next(self, clock, out)?;
        self.ticks += 1;
        trace!(tick = self.ticks, state = current.label(), "tick");

        if next != current {
            debug!(tick = self.ticks, from = ?current, to = ?next, "state changed");
            self.history.record(StateTransition {
                from: current,
                to: next,
                timestamp: clock.now(),
                tick: self.ticks,
            });
        }
        self.state = next;
        Ok(())
    }
}
