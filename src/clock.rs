//! Wall-clock access.
//!
//! States read the time through [`Clock`] so tests can pin the reading.

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current instant, used to stamp history records.
    fn now(&self) -> DateTime<Utc>;

    /// Whole seconds since the Unix epoch, used by the exit guards.
    fn epoch_secs(&self) -> i64 {
        self.now().timestamp()
    }
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same epoch second.
///
/// The guard-facing reading is kept as given. Seconds beyond chrono's
/// range only affect [`Clock::now`], which saturates to the nearest
/// representable instant.
///
/// ```rust
/// use heroine::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::from_epoch_secs(9);
/// assert_eq!(clock.epoch_secs(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    secs: i64,
}

impl FixedClock {
    pub fn from_epoch_secs(secs: i64) -> Self {
        Self { secs }
    }

    /// Move the reading to `secs`.
    pub fn set_epoch_secs(&mut self, secs: i64) {
        self.secs = secs;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match Utc.timestamp_opt(self.secs, 0).single() {
            Some(at) => at,
            None if self.secs < 0 => DateTime::<Utc>::MIN_UTC,
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    fn epoch_secs(&self) -> i64 {
        self.secs
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn epoch_secs(&self) -> i64 {
        (**self).epoch_secs()
    }
}
