//! Time sources for the engine.
//!
//! Operations that stamp or age records read the time through [`Clock`] so
//! the hosting app can supply the wall clock and tests can pin it.

use chrono::{DateTime, Duration, Utc};

/// A source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that reports a fixed instant until moved.
///
/// # Example
///
/// ```
/// use travel_companion_engine::clock::{Clock, FixedClock};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 12, 16, 11, 0, 0).unwrap();
/// let mut clock = FixedClock::new(start);
/// clock.advance(Duration::seconds(30));
/// assert_eq!(clock.now(), start + Duration::seconds(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 15, 14, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
