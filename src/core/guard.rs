//! Guard predicates over a wall-clock reading.
//!
//! A guard decides whether a state leaves on this tick. It sees only the
//! number of whole seconds since the Unix epoch, so it is pure and can be
//! checked against any reading in tests.

/// A pure predicate over epoch seconds.
///
/// Guards are evaluated every tick and are not edge-triggered: if the
/// predicate holds on two consecutive readings, it fires on both.
///
/// # Example
///
/// ```rust
/// use heroine::core::Guard;
///
/// let every_third = Guard::divisible_by(3);
///
/// assert!(every_third.check(9));
/// assert!(!every_third.check(10));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(i64) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate on epoch seconds.
    ///
    /// The predicate must be deterministic and free of side effects.
    ///
    /// ```rust
    /// use heroine::core::Guard;
    ///
    /// let after_epoch = Guard::new(|secs| secs > 0);
    /// assert!(after_epoch.check(1));
    /// assert!(!after_epoch.check(-1));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(i64) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that holds when `secs` is an exact multiple of `period`.
    ///
    /// Uses the Euclidean remainder so readings before the epoch are
    /// treated the same way as readings after it. A `period` of zero
    /// never holds.
    pub fn divisible_by(period: i64) -> Self {
        Self::new(move |secs| period != 0 && secs.rem_euclid(period) == 0)
    }

    /// Check the guard against a reading.
    pub fn check(&self, epoch_secs: i64) -> bool {
        (self.predicate)(epoch_secs)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
