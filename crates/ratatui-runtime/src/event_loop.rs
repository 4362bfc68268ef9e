use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// Default refresh rate in frames per second.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Frame pacing state.
///
/// Emits one `Frame` per interval. If the application falls behind, missed
/// frames are dropped rather than replayed in a burst.
#[derive(Debug)]
pub(super) struct FrameClock {
    interval: Duration,
    next_frame_at: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl FrameClock {
    /// Creates a clock whose first frame is due immediately.
    pub fn new(now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / DEFAULT_FRAME_RATE),
            next_frame_at: now,
            frame_count: 0,
        }
    }

    pub(super) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub(super) fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Consumes the pending frame if one is due at `now`.
    fn take_frame(&mut self, now: Instant) -> bool {
        if now < self.next_frame_at {
            return false;
        }
        self.next_frame_at += self.interval;
        if self.next_frame_at <= now {
            self.next_frame_at = now + self.interval;
        }
        self.frame_count += 1;
        true
    }

    fn time_to_next_frame(&self, now: Instant) -> Duration {
        self.next_frame_at.saturating_duration_since(now)
    }

    /// Returns the next event.
    ///
    /// Blocks until the next frame is due or a crossterm event occurs.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.take_frame(now) {
                return Ok(TuiEvent::Frame);
            }
            if event::poll(self.time_to_next_frame(now))? {
                return Ok(event::read()?.into());
            }
        }
    }
}
