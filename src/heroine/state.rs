//! The heroine's two behavioral states.

use super::actor::Heroine;
use super::error::TickError;
use crate::clock::Clock;
use crate::core::Guard;
use crate::state_enum;
use std::io::Write;

/// Walking leaves for Jumping on epoch seconds divisible by this.
pub const WALKING_EXIT_EVERY: i64 = 3;

/// Jumping leaves for Walking on epoch seconds divisible by this.
pub const JUMPING_EXIT_EVERY: i64 = 7;

state_enum! {
    /// What the heroine is doing.
    ///
    /// Both variants are non-terminal; the heroine alternates between
    /// them for as long as she is ticked.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum HeroineState {
        /// Prints `walking`, switches to `Jumping` on multiples of three seconds.
        #[default]
        Walking,
        /// Prints `Jumping`, switches to `Walking` on multiples of seven seconds.
        Jumping,
    }
}

impl HeroineState {
    /// Line written to the output on every tick spent in this state.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Jumping => "Jumping",
        }
    }

    /// The variant this state switches to when its guard holds.
    pub const fn other(self) -> Self {
        match self {
            Self::Walking => Self::Jumping,
            Self::Jumping => Self::Walking,
        }
    }

    /// Period, in epoch seconds, on which this state is left.
    pub const fn exit_every(self) -> i64 {
        match self {
            Self::Walking => WALKING_EXIT_EVERY,
            Self::Jumping => JUMPING_EXIT_EVERY,
        }
    }

    /// Guard deciding when this state is left, as a reusable predicate.
    pub fn exit_guard(self) -> Guard {
        Guard::divisible_by(self.exit_every())
    }

    /// Next state for a given clock reading, without side effects.
    ///
    /// ```rust
    /// use heroine::HeroineState;
    ///
    /// assert_eq!(HeroineState::Walking.next_at(9), HeroineState::Jumping);
    /// assert_eq!(HeroineState::Walking.next_at(10), HeroineState::Walking);
    /// assert_eq!(HeroineState::Jumping.next_at(14), HeroineState::Walking);
    /// ```
    pub fn next_at(self, epoch_secs: i64) -> Self {
        if epoch_secs.rem_euclid(self.exit_every()) == 0 {
            self.other()
        } else {
            self
        }
    }

    /// Perform this state's behavior for one tick and return the next state.
    ///
    /// Writes the state's label as one line to `out`, then reads `clock`
    /// and applies the exit guard. The heroine is passed for symmetry with
    /// the actor's own update and is not consulted.
    pub fn compute_next<C, W>(
        self,
        _heroine: &Heroine,
        clock: &C,
        out: &mut W,
    ) -> Result<Self, TickError>
    where
        C: Clock + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out, "{}", self.label())?;
        Ok(self.next_at(clock.epoch_secs()))
    }
}
