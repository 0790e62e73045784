//! The heroine and her states.
//!
//! [`HeroineState`] is a closed enum with one variant per behavior.
//! [`Heroine`] owns the current variant and swaps it out on every tick.

mod actor;
mod error;
mod state;

pub use actor::Heroine;
pub use error::TickError;
pub use state::{HeroineState, JUMPING_EXIT_EVERY, WALKING_EXIT_EVERY};
