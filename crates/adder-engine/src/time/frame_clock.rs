use std::time::{Duration, Instant};

/// Paces redraws to a target frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    /// Minimum spacing between frames; `None` redraws as fast as the loop allows.
    interval: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            interval: None,
        }
    }

    /// Paces frames to at most `fps` per second. `0` disables pacing.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.interval = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        self
    }

    /// Earliest instant the next frame should be produced at.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.map(|i| self.last + i)
    }

    /// True when enough time has passed since the last tick.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_deadline().is_none_or(|d| now >= d)
    }

    /// Marks a frame as produced now and returns the tick instant.
    pub fn tick(&mut self) -> Instant {
        self.last = Instant::now();
        self.last
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
