//! Time source abstraction.
//!
//! Every time-dependent transition reads the current instant through a
//! [`Clock`] so the stopwatch and note timestamps can be driven by a manual
//! clock in tests. A clock may be unavailable, in which case it yields `None`
//! and callers leave their state untouched.

use chrono::{DateTime, Duration, Local, NaiveDateTime, Utc};
use std::sync::Mutex;

/// Source of the current wall-clock instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant, or `None` when no time source is available.
    fn now(&self) -> Option<DateTime<Utc>>;

    /// Current instant as fractional seconds since the Unix epoch.
    fn now_epoch_secs(&self) -> Option<f64> {
        self.now().map(epoch_secs)
    }

    /// Current instant in the host's local time zone, without offset.
    fn now_local_naive(&self) -> Option<NaiveDateTime> {
        self.now()
            .map(|instant| instant.with_timezone(&Local).naive_local())
    }
}

/// Converts an instant to fractional seconds since the Unix epoch.
pub fn epoch_secs(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / 1_000_000.0
}

/// The operating system's real-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        Some(Utc::now())
    }
}

/// A clock that only moves when told to.
///
/// Starts at a fixed instant; [`ManualClock::advance`] moves it forward and
/// [`ManualClock::set_unavailable`] simulates a missing time source.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Option<DateTime<Utc>>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(Some(start)),
        }
    }

    /// Creates a clock frozen at the given Unix timestamp (whole seconds).
    pub fn at_epoch_secs(secs: i64) -> Self {
        Self::new(DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default())
    }

    /// Moves the clock forward by `by`. No effect while unavailable.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut current) = self.current.lock()
            && let Some(instant) = current.as_mut()
        {
            *instant += by;
        }
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance(Duration::seconds(secs));
    }

    /// Makes the clock report no time at all.
    pub fn set_unavailable(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        self.current.lock().ok().and_then(|current| *current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at_epoch_secs(1_000);
        assert_eq!(clock.now_epoch_secs(), Some(1_000.0));

        clock.advance_secs(5);
        assert_eq!(clock.now_epoch_secs(), Some(1_005.0));

        clock.advance(Duration::milliseconds(500));
        assert_eq!(clock.now_epoch_secs(), Some(1_005.5));
    }

    #[test]
    fn test_manual_clock_unavailable() {
        let clock = ManualClock::at_epoch_secs(1_000);
        clock.set_unavailable();

        assert!(clock.now().is_none());
        assert!(clock.now_local_naive().is_none());

        // Advancing an unavailable clock does not resurrect it
        clock.advance_secs(1);
        assert!(clock.now_epoch_secs().is_none());
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        let secs = SystemClock.now_epoch_secs().unwrap();
        assert!(secs > 1_577_836_800.0);
    }
}
