//! Frame-paced terminal runtime.
//!
//! Drives an [`App`] at a fixed refresh rate: every frame the app is updated
//! once and then drawn, and terminal input is delivered between frames. The
//! loop only ever waits for the next frame or for input.

pub use self::{app::App, event_loop::DEFAULT_FRAME_RATE, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
