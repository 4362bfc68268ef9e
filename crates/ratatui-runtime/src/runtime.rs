use std::{io, time::Duration};

use crate::{App, event::TuiEvent, event_loop::FrameClock};

/// TUI application runtime.
///
/// Paces the application at a fixed frame rate and executes applications that
/// implement the `App` trait.
#[derive(Default, Debug)]
pub struct Runtime {
    clock: FrameClock,
}

impl Runtime {
    /// Creates a new Runtime running at 60 frames per second.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frame rate (Hz, frames per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.set_frame_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Sets the time between frames.
    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.clock.set_interval(interval);
    }

    /// Number of frames produced so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the frame loop until `app.should_exit()` returns true
    ///    - `Frame`: calls `app.update()` then `app.draw()`
    ///    - Crossterm events: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.clock.next()? {
                    TuiEvent::Frame => {
                        app.update(&mut self);
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
