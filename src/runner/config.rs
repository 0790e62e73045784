//! Runner settings.
//!
//! These are fixed at build time; nothing is read from the command line
//! or the environment.

use crate::core::DEFAULT_HISTORY_LIMIT;
use std::time::Duration;

/// Pause between two ticks of the control loop.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Settings for a [`Runner`](super::Runner).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Blocking pause after each tick
    pub tick_period: Duration,

    /// Transitions retained by the heroine's history
    pub history_limit: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
