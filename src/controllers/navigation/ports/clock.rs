use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic page time, measured from mount.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    mounted_at: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mounted_at: Instant::now(),
        }
    }

    /// The instant a page-time deadline falls on, for event-loop wake-ups.
    #[must_use]
    pub fn instant_at(&self, page_time: Duration) -> Instant {
        self.mounted_at + page_time
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.mounted_at.elapsed()
    }
}

/// Virtual clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(250));

        assert_eq!(clock.now(), Duration::from_millis(250));

        clock.set(Duration::from_secs(2));
        assert_eq!(handle.now(), Duration::from_secs(2));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
        assert!(clock.instant_at(Duration::from_secs(1)) > clock.instant_at(Duration::ZERO));
    }
}
