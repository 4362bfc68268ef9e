//! Evolving paddle policies with a genetic algorithm.
//!
//! # How Training Works
//!
//! 1. **Population** - A [`Generation`] of random [`Agent`]s (or one loaded from disk)
//! 2. **Turns** - Each agent controls the paddle for a fixed, growing time
//! 3. **Score** - Points earned during the turn become the agent's score
//! 4. **Selection** - The top `floor(len * cull) + 1` agents form the breeding pool
//! 5. **Reproduction** - Every slot of the next generation is a child of two distinct pool members
//! 6. **Repeat** - For the configured number of generations
//!
//! # Architecture
//!
//! ```text
//!   Evolution (state machine)
//!       │ Turn
//!       ▼
//!   EvolutionDriver ──SessionHandle──▶ SimulationHost (render loop thread)
//!       ▲                                   │ owns
//!       │ score                             ▼
//!       └────────────────────────── SimulationSession ── Arena + policy
//! ```
//!
//! The [`headless`] runner plays the same turns on one thread with a simulated
//! clock.

pub use self::{
    agent::{Agent, breed},
    driver::{EvolutionDriver, TurnTimer, WallClockTimer},
    evolution::{Evolution, EvolutionSchedule, EvolutionState, Turn},
    generation::{Generation, GenerationError},
    headless::run_headless,
    host::{DriverError, SessionCommand, SessionHandle, SimulationHost, TurnResult, session_channel},
    session::SimulationSession,
    summary::GenerationSummary,
};

pub mod agent;
pub mod driver;
pub mod evolution;
pub mod generation;
pub mod headless;
pub mod host;
pub mod session;
pub mod summary;
