//! Real-time pacing for the frame loop.

use std::time::{Duration, Instant};

/// Limits the frame loop to a fixed rate.
///
/// The governor is the only place that sleeps. Each call to `pace` ends one frame.
#[derive(Debug)]
pub struct FrameGovernor {
    step: Duration,
    frames: u64,
}

/// A one-shot delay measured against the wall clock.
///
/// Unlike a sleep, the delay is polled, so the frame loop keeps running while it counts down.
#[derive(Copy, Clone, Debug)]
pub struct Delay {
    deadline: Instant,
}

impl FrameGovernor {
    pub fn new(step: Duration) -> FrameGovernor {
        FrameGovernor { step, frames: 0 }
    }

    /// Time left in the current frame, given how long it has been running.
    ///
    /// Returns `None` when the frame has already used up its time step.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.step
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Sleep out the rest of the frame and advance the frame counter.
    pub fn pace(&mut self, elapsed: Duration) {
        if let Some(remaining) = self.remaining(elapsed) {
            std::thread::sleep(remaining);
        }

        self.frames += 1;
    }

    /// Number of frames completed.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Delay {
    pub fn start(duration: Duration, now: Instant) -> Delay {
        Delay {
            deadline: now + duration,
        }
    }

    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
