//! Simulation logic built on top of the [`core`](crate::core) value types.
//!
//! - [`Arena`] - ball/paddle physics inside static bounds, one tick at a time
//! - [`ArenaEvent`] - what the ball hit during a tick, and the points it is worth
//! - [`random_serve_velocity`] - randomized ball velocity used when a turn starts
//!
//! # Tick Order
//!
//! A full update cycle, as driven by the session that owns the arena:
//!
//! 1. The controller's command is applied with [`Arena::apply_paddle_command`]
//! 2. [`Arena::advance`] moves the ball and reports an [`ArenaEvent`]
//! 3. [`Arena::end_tick`] clears the paddle's per-tick velocity
//!
//! # Example
//!
//! ```
//! use pong_engine::{Arena, Bounds, DEFAULT_TIME_STEP};
//!
//! let mut arena = Arena::new(Bounds::from_size(1024.0, 1024.0));
//! arena.apply_paddle_command(4.0);
//! let event = arena.advance(DEFAULT_TIME_STEP);
//! arena.end_tick();
//!
//! assert_eq!(event.score_delta(), 0);
//! assert_eq!(arena.paddle().velocity().x, 0.0);
//! ```

pub use self::{arena::*, serve::*};

mod arena;
mod serve;
