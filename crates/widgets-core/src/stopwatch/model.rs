//! Stopwatch state and its transitions.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Persisted stopwatch state.
///
/// Field names follow the export document: `start` is the reference instant in
/// epoch seconds and `elapsed` the accumulated seconds while idle.
///
/// Invariant: `running` implies `start.is_some()`, and an idle stopwatch has no
/// `start`. Values coming from an import are brought back to this shape with
/// [`StopwatchState::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwatchState {
    pub running: bool,
    pub start: Option<f64>,
    pub elapsed: f64,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self {
            running: false,
            start: None,
            elapsed: 0.0,
        }
    }
}

impl StopwatchState {
    /// Creates an idle stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts or resumes the stopwatch.
    ///
    /// The reference instant is shifted back by the accumulated time so a
    /// resume continues where the last stop left off. Returns `true` when the
    /// state changed; already running or no clock leaves it untouched.
    pub fn start(&mut self, clock: &dyn Clock) -> bool {
        if self.running {
            return false;
        }
        let Some(now) = clock.now_epoch_secs() else {
            tracing::warn!("Clock unavailable, stopwatch start ignored");
            return false;
        };

        self.start = Some(now - self.elapsed);
        self.running = true;
        true
    }

    /// Stops the stopwatch, folding the running time into `elapsed`.
    ///
    /// Returns `true` when the state changed.
    pub fn stop(&mut self, clock: &dyn Clock) -> bool {
        if !self.running {
            return false;
        }
        let Some(elapsed) = self.running_elapsed(clock) else {
            tracing::warn!("Clock unavailable, stopwatch stop ignored");
            return false;
        };

        self.elapsed = elapsed;
        self.start = None;
        self.running = false;
        true
    }

    /// Returns to idle at zero from any state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seconds elapsed as of now.
    ///
    /// Never mutates. While idle this is exactly the accumulated value; while
    /// running it is measured against the clock and is `None` if the clock has
    /// no reading.
    pub fn current_elapsed(&self, clock: &dyn Clock) -> Option<f64> {
        if self.running {
            self.running_elapsed(clock)
        } else {
            Some(self.elapsed)
        }
    }

    fn running_elapsed(&self, clock: &dyn Clock) -> Option<f64> {
        let start = self.start?;
        let now = clock.now_epoch_secs()?;
        // A clock that stepped backwards must not produce negative time
        Some((now - start).max(0.0))
    }

    /// Restores the state invariant on values of unknown origin.
    ///
    /// A running stopwatch without a reference instant is treated as idle, an
    /// idle one drops any leftover reference, and a negative or non-finite
    /// accumulated value becomes zero.
    pub fn normalized(mut self) -> Self {
        if !self.elapsed.is_finite() || self.elapsed < 0.0 {
            self.elapsed = 0.0;
        }
        if let Some(start) = self.start
            && !start.is_finite()
        {
            self.start = None;
        }
        if self.running && self.start.is_none() {
            self.running = false;
        }
        if !self.running {
            self.start = None;
        }
        self
    }
}
