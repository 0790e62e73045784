//! Tick error types.

use thiserror::Error;

/// Errors that can occur while the heroine performs a tick.
///
/// Reading the clock cannot fail; only writing the state line can.
#[derive(Debug, Error)]
pub enum TickError {
    /// The state's line could not be written to the output stream
    #[error("failed to write state line: {0}")]
    Output(#[from] std::io::Error),
}
