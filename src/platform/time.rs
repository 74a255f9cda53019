//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

use crate::consts::{MAX_LAG_FRAMES, TICK_INTERVAL};

/// Sleeps each frame out to the next tick deadline.
///
/// Frames that overrun by more than `MAX_LAG_FRAMES` intervals move the
/// deadline forward instead of trying to catch up.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next: Instant,
    throttled: bool,
    frames: u64,
    // FPS tracking
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
}

impl FrameClock {
    pub fn new(throttled: bool) -> Self {
        Self::with_interval(TICK_INTERVAL, throttled)
    }

    pub fn with_interval(interval: Duration, throttled: bool) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
            throttled,
            frames: 0,
            frame_times: [None; 60],
            frame_index: 0,
        }
    }

    /// End the current frame, sleeping until its deadline if throttled
    pub fn wait(&mut self) {
        self.frames += 1;
        if self.throttled {
            let now = Instant::now();
            if self.next > now {
                std::thread::sleep(self.next - now);
                self.next += self.interval;
            } else if now - self.next > self.interval * MAX_LAG_FRAMES {
                log::debug!("Frame {} overran; resetting deadline", self.frames);
                self.next = now + self.interval;
            } else {
                self.next += self.interval;
            }
        }

        self.frame_times[self.frame_index] = Some(Instant::now());
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average rate over the last 60 frames, once that many have run
    pub fn fps(&self) -> Option<u32> {
        let newest = self.frame_times[(self.frame_index + 59) % 60]?;
        let oldest = self.frame_times[self.frame_index]?;
        let elapsed = newest.duration_since(oldest).as_secs_f64();
        (elapsed > 0.0).then(|| (59.0 / elapsed).round() as u32)
    }
}
