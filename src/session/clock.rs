//! Elapsed-time tracking for a game session.
//!
//! The clock is a capability behind the [`GameClock`] trait so sessions can
//! run against the real [`WallClock`] or a counted/stubbed one in tests.

use std::time::{Duration, Instant};

/// Start/stop stopwatch contract.
///
/// `start` zeroes the reading and begins counting; while already running it
/// is a no-op. `stop` freezes the reading; while already stopped it is a
/// no-op. `elapsed` is readable in either state.
pub trait GameClock {
    /// Begin timing from zero. No-op while running.
    fn start(&mut self);

    /// Freeze the current reading. No-op while stopped.
    fn stop(&mut self);

    /// Whether the clock is currently counting.
    fn is_running(&self) -> bool;

    /// The current reading.
    fn elapsed(&self) -> Duration;
}

/// Real stopwatch over monotonic time.
#[derive(Clone, Debug, Default)]
pub struct WallClock {
    started_at: Option<Instant>,
    frozen: Duration,
}

impl WallClock {
    /// Create a stopped clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameClock for WallClock {
    fn start(&mut self) {
        if self.started_at.is_some() {
            return;
        }
        self.frozen = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.frozen = started_at.elapsed();
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => started_at.elapsed(),
            None => self.frozen,
        }
    }
}

/// Decorator that counts `start` and `stop` calls on the wrapped clock.
///
/// Counts every call, including the no-op ones the wrapped clock ignores,
/// so tests can assert on exactly how a session drives its clock.
#[derive(Clone, Debug)]
pub struct CountingClock<C: GameClock> {
    inner: C,
    start_calls: u32,
    stop_calls: u32,
}

impl<C: GameClock> CountingClock<C> {
    /// Wrap a clock.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            start_calls: 0,
            stop_calls: 0,
        }
    }

    /// Number of `start` calls observed so far.
    #[must_use]
    pub fn start_calls(&self) -> u32 {
        self.start_calls
    }

    /// Number of `stop` calls observed so far.
    #[must_use]
    pub fn stop_calls(&self) -> u32 {
        self.stop_calls
    }
}

impl<C: GameClock> GameClock for CountingClock<C> {
    fn start(&mut self) {
        self.start_calls += 1;
        self.inner.start();
    }

    fn stop(&mut self) {
        self.stop_calls += 1;
        self.inner.stop();
    }

    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    fn elapsed(&self) -> Duration {
        self.inner.elapsed()
    }
}

/// Render a duration as `HH:MM:SS`, zero-padded.
#[must_use]
pub fn format_hms(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_stopped_at_zero() {
        let clock = WallClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_start_and_stop() {
        let mut clock = WallClock::new();

        clock.start();
        assert!(clock.is_running());

        clock.stop();
        assert!(!clock.is_running());

        // The reading stays frozen after stop.
        let frozen = clock.elapsed();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut clock = WallClock::new();
        clock.start();
        clock.start();
        assert!(clock.is_running());
    }

    #[test]
    fn test_stop_while_stopped_is_noop() {
        let mut clock = WallClock::new();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_restart_zeroes_the_reading() {
        let mut clock = WallClock::new();
        clock.start();
        clock.stop();
        clock.start();
        assert!(clock.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_counting_clock_records_calls() {
        let mut clock = CountingClock::new(WallClock::new());

        clock.start();
        clock.stop();
        // No-op on the wrapped clock, still counted.
        clock.stop();

        assert_eq!(clock.start_calls(), 1);
        assert_eq!(clock.stop_calls(), 2);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::ZERO), "00:00:00");
        assert_eq!(format_hms(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_hms(Duration::from_secs(61)), "00:01:01");
        assert_eq!(format_hms(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_hms(Duration::from_secs(3 * 3600 + 25 * 60 + 7)), "03:25:07");
    }
}
