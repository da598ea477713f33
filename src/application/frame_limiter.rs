use std::time::{Duration, Instant};

/// Throttles the main loop to a fixed frame period.
pub struct FrameLimiter {
    period: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_frame: Instant::now(),
        }
    }

    /// Time left in the current frame as of `now`; zero once the period has passed
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.period.saturating_sub(now.saturating_duration_since(self.last_frame))
    }

    /// Sleep out the rest of the frame and start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}
