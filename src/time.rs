use std::time::{Duration, Instant};

/// Measures the time between frames and optionally holds each frame to a
/// minimum duration.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    min_frame: Option<Duration>,
}

impl FrameClock {
    pub fn new(min_frame: Option<Duration>) -> Self {
        Self {
            last: Instant::now(),
            min_frame,
        }
    }

    /// Seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta.as_secs_f32()
    }

    /// Sleeps until the minimum frame duration has passed since the last tick.
    pub fn pace(&self) {
        if let Some(min_frame) = self.min_frame {
            let elapsed = self.last.elapsed();
            if elapsed < min_frame {
                std::thread::sleep(min_frame - elapsed);
            }
        }
    }
}
