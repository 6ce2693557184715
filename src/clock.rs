//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Keeps the loop on a fixed cadence by sleeping away whatever is left of
/// each frame period.  A frame that overruns is not made up for.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    frame_start: Instant,
}

impl FrameClock {
    /// `fps` must be non-zero; `GameConfig` guarantees that.
    pub fn new(fps: u32) -> Self {
        FrameClock {
            period: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the current frame boundary.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.frame_start.elapsed())
    }

    /// Restart the frame without sleeping, e.g. after a blocking menu.
    pub fn reset(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleep until the frame boundary, then start the next frame.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
