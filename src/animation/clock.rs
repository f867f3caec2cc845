//! Time sources for driving a run to completion.
//!
//! The controller itself never waits; it is handed `now` and reports the next
//! deadline. A [`Clock`] is what a blocking driver uses to get from one
//! deadline to the next. Tests use [`ManualClock`], which jumps straight to
//! the deadline, so a full run takes no wall-clock time.

use std::thread;
use std::time::{Duration, Instant};

/// Time source for drivers that wait on deadlines.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Return once `now() >= deadline`.
    fn sleep_until(&mut self, deadline: Instant);
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Virtual time that only moves when asked to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    now: Instant,
}

impl ManualClock {
    /// Clock frozen at the current instant.
    pub fn new() -> Self {
        let origin = Instant::now();
        Self { origin, now: origin }
    }

    /// Move virtual time forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Virtual time passed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.now - self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep_until(&mut self, deadline: Instant) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_jumps() {
        let mut clock = ManualClock::new();
        let start = clock.now();
        clock.sleep_until(start + Duration::from_millis(500));
        assert_eq!(clock.elapsed(), Duration::from_millis(500));

        // sleeping into the past is a no-op
        clock.sleep_until(start);
        assert_eq!(clock.elapsed(), Duration::from_millis(500));

        clock.advance(Duration::from_millis(20));
        assert_eq!(clock.now() - start, Duration::from_millis(520));
    }

    #[test]
    fn test_system_clock_past_deadline_returns() {
        let mut clock = SystemClock;
        let before = clock.now();
        clock.sleep_until(before);
        assert!(clock.now() >= before);
    }
}
