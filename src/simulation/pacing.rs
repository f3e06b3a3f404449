//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Caps a loop at a fixed number of iterations per second.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    deadline: Instant,
}

impl FramePacer {
    /// Creates a pacer for `rate` frames per second.
    pub fn new(rate: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(rate.max(1)));
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }

    /// Sleeps until the current frame's deadline, then schedules the next one.
    ///
    /// A loop running late is not made to catch up; the schedule restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.period;
        } else {
            self.deadline = now + self.period;
        }
    }
}
