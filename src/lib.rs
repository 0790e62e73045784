//! Heroine: the State pattern on a wall clock
//!
//! A [`Heroine`] is always in exactly one [`HeroineState`]. On every tick
//! she hands control to that state, which prints its name and decides,
//! from the current epoch second, whether to switch to the other state.
//!
//! # Core Concepts
//!
//! - **State**: a closed enum of behaviors, described by the `State` trait
//! - **Guards**: pure predicates over the clock reading that trigger a switch
//! - **History**: a bounded record of every switch, stamped with the time
//! - **Runner**: the blocking once-per-second loop around the heroine
//!
//! # Example
//!
//! ```rust
//! use heroine::clock::FixedClock;
//! use heroine::{Heroine, HeroineState};
//!
//! let mut heroine = Heroine::new();
//! let mut out = Vec::new();
//!
//! // 14 is not a multiple of 3: she keeps walking.
//! heroine.tick(&FixedClock::from_epoch_secs(14), &mut out).unwrap();
//! assert_eq!(heroine.state(), HeroineState::Walking);
//!
//! // 15 is: she starts jumping.
//! heroine.tick(&FixedClock::from_epoch_secs(15), &mut out).unwrap();
//! assert_eq!(heroine.state(), HeroineState::Jumping);
//!
//! assert_eq!(out, b"walking\nwalking\n");
//! ```

pub mod clock;
pub mod core;
pub mod heroine;
mod macros;
pub mod runner;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use heroine::{Heroine, HeroineState, TickError};
pub use runner::{RunError, Runner, RunnerConfig, Shutdown};
