//! Core state machine vocabulary.
//!
//! - `State`: naming of a behavioral state
//! - `Guard`: pure predicate over a wall-clock reading
//! - `StateHistory`: bounded log of state changes
//!
//! Nothing here performs I/O or reads the clock.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
