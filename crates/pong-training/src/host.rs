//! Single-owner access to the simulation session.
//!
//! The render/simulation loop owns a [`SimulationHost`], which owns the
//! [`SimulationSession`]. Everything else talks to the session through a
//! [`SessionHandle`], which only sends [`SessionCommand`]s. Commands are applied
//! by the host at the start of each frame, so the session is never touched by
//! two threads.
//!
//! ```text
//!  evolution driver                      render loop
//!  ────────────────                      ───────────
//!  bind_agent(turn) ──── Bind ─────────▶ frame(): apply, tick
//!  (turn timer)                          frame(): tick
//!  request_score_and_reset() ─ Score ──▶ frame(): capture score, reset
//!        ◀───────────────────── reply ───┘
//! ```

use std::{
    collections::VecDeque,
    sync::mpsc::{self, TryRecvError},
};

use pong_engine::ArenaEvent;
use rand::Rng;

use crate::{evolution::Turn, session::SimulationSession, summary::GenerationSummary};

/// Number of turn results kept for display.
const RECENT_RESULT_COUNT: usize = 16;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DriverError {
    #[display("simulation session is no longer running")]
    SessionClosed,
}

/// Requests applied by the host at the next frame.
#[derive(Debug)]
pub enum SessionCommand {
    /// Put this turn's agent on the paddle.
    Bind(Turn),
    /// Capture the running score, reply with it, and reset the session.
    ScoreAndReset(mpsc::Sender<i32>),
    /// A generation finished evaluating.
    Report(GenerationSummary),
    /// Stop the render loop.
    Exit,
}

/// Outcome of a finished turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub generation: usize,
    pub agent: usize,
    pub score: i32,
}

#[derive(Debug)]
pub struct SimulationHost<R> {
    session: SimulationSession<R>,
    commands: mpsc::Receiver<SessionCommand>,
    driver_connected: bool,
    exit_requested: bool,
    recent_results: VecDeque<TurnResult>,
    summaries: Vec<GenerationSummary>,
}

/// Sending side of the host's command channel.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
}

/// Wraps `session` in a host and returns it with a handle to drive it.
pub fn session_channel<R>(session: SimulationSession<R>) -> (SimulationHost<R>, SessionHandle) {
    let (tx, rx) = mpsc::channel();
    let host = SimulationHost {
        session,
        commands: rx,
        driver_connected: true,
        exit_requested: false,
        recent_results: VecDeque::with_capacity(RECENT_RESULT_COUNT),
        summaries: vec![],
    };
    (host, SessionHandle { commands: tx })
}

impl<R> SimulationHost<R>
where
    R: Rng,
{
    #[must_use]
    pub fn session(&self) -> &SimulationSession<R> {
        &self.session
    }

    /// Returns `false` once every [`SessionHandle`] has been dropped.
    #[must_use]
    pub fn is_driver_connected(&self) -> bool {
        self.driver_connected
    }

    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Most recent turn results, newest last.
    pub fn recent_results(&self) -> impl Iterator<Item = &TurnResult> {
        self.recent_results.iter()
    }

    #[must_use]
    pub fn summaries(&self) -> &[GenerationSummary] {
        &self.summaries
    }

    /// Applies all pending commands without blocking.
    pub fn process_commands(&mut self) {
        while self.driver_connected {
            match self.commands.try_recv() {
                Ok(command) => self.apply(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.driver_connected = false,
            }
        }
    }

    /// Applies pending commands, then runs one simulation tick.
    pub fn frame(&mut self, dt: f64) -> Option<ArenaEvent> {
        self.process_commands();
        self.session.tick(dt)
    }

    fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Bind(turn) => self.session.bind(turn),
            SessionCommand::ScoreAndReset(reply) => {
                let turn = self
                    .session
                    .active_turn()
                    .map(|turn| (turn.generation, turn.agent));
                let score = self.session.score_and_reset();
                if let Some((generation, agent)) = turn {
                    if self.recent_results.len() == RECENT_RESULT_COUNT {
                        self.recent_results.pop_front();
                    }
                    self.recent_results.push_back(TurnResult {
                        generation,
                        agent,
                        score,
                    });
                }
                // The driver may have given up waiting; nothing to do then.
                let _ = reply.send(score);
            }
            SessionCommand::Report(summary) => self.summaries.push(summary),
            SessionCommand::Exit => self.exit_requested = true,
        }
    }
}

impl SessionHandle {
    pub fn bind_agent(&self, turn: Turn) -> Result<(), DriverError> {
        self.send(SessionCommand::Bind(turn))
    }

    /// Asks the host to end the turn and blocks until the score is captured.
    pub fn request_score_and_reset(&self) -> Result<i32, DriverError> {
        let (tx, rx) = mpsc::channel();
        self.send(SessionCommand::ScoreAndReset(tx))?;
        rx.recv().map_err(|_| DriverError::SessionClosed)
    }

    pub fn report(&self, summary: GenerationSummary) -> Result<(), DriverError> {
        self.send(SessionCommand::Report(summary))
    }

    pub fn request_exit(&self) -> Result<(), DriverError> {
        self.send(SessionCommand::Exit)
    }

    fn send(&self, command: SessionCommand) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .map_err(|_| DriverError::SessionClosed)
    }
}
