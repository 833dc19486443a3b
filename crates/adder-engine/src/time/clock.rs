use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic timestamp source.
///
/// Timestamps are offsets from a clock-specific origin and never decrease.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock backed [`Clock`] with nanosecond resolution.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven [`Clock`].
///
/// Clones share the same reading, so a test can hand one clone to the UI
/// context and keep another to advance time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to `t`. Earlier values are ignored.
    pub fn set(&self, t: Duration) {
        if t > self.now.get() {
            self.now.set(t);
        }
    }

    pub fn set_millis(&self, ms: u64) {
        self.set(Duration::from_millis(ms));
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
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
        let a = ManualClock::new();
        let b = a.clone();
        a.set_millis(150);
        assert_eq!(b.now(), Duration::from_millis(150));
        b.advance(Duration::from_millis(50));
        assert_eq!(a.now(), Duration::from_millis(200));
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let c = ManualClock::new();
        c.set_millis(100);
        c.set_millis(40);
        assert_eq!(c.now(), Duration::from_millis(100));
    }

    #[test]
    fn monotonic_clock_is_non_decreasing() {
        let c = MonotonicClock::new();
        let a = c.now();
        let b = c.now();
        assert!(b >= a);
    }
}
