//! Runner error types.

use crate::heroine::TickError;
use thiserror::Error;

/// Errors that stop the control loop.
#[derive(Debug, Error)]
pub enum RunError {
    /// The heroine's tick failed
    #[error("tick {tick} failed: {source}")]
    Tick {
        tick: u64,
        #[source]
        source: TickError,
    },

    /// The output stream could not be flushed after a tick
    #[error("failed to flush output: {0}")]
    Flush(#[source] std::io::Error),
}
