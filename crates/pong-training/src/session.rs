use pong_engine::{Arena, ArenaEvent, Bounds, random_serve_velocity};
use pong_policy::{Observation, paddle_velocity_command};
use rand::Rng;

use crate::evolution::Turn;

/// Live state of the arena during a turn.
///
/// Holds the arena, the running score, and the turn (if any) whose agent
/// controls the paddle. Without an active turn the arena is frozen.
#[derive(Debug, Clone)]
pub struct SimulationSession<R> {
    arena: Arena,
    score: i32,
    active: Option<Turn>,
    rng: R,
}

impl<R> SimulationSession<R>
where
    R: Rng,
{
    #[must_use]
    pub fn new(bounds: Bounds, rng: R) -> Self {
        Self {
            arena: Arena::new(bounds),
            score: 0,
            active: None,
            rng,
        }
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Points accumulated during the current turn.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn active_turn(&self) -> Option<&Turn> {
        self.active.as_ref()
    }

    /// Puts the turn's agent in control of the paddle.
    ///
    /// Replaces any previously active turn.
    pub fn bind(&mut self, turn: Turn) {
        log::debug!(
            "gen #{} agent #{} genes: {:.3?}",
            turn.generation + 1,
            turn.agent + 1,
            turn.genes
        );
        if let Some(previous) = self.active.replace(turn) {
            log::warn!(
                "gen #{} agent #{} replaced before it was scored",
                previous.generation + 1,
                previous.agent + 1
            );
        }
    }

    /// Runs one full update cycle: controller, physics, scoring.
    ///
    /// Returns `None` when no agent is active.
    pub fn tick(&mut self, dt: f64) -> Option<ArenaEvent> {
        let turn = self.active.as_ref()?;
        let command = paddle_velocity_command(&Observation::from_arena(&self.arena), &turn.genes);
        self.arena.apply_paddle_command(command);
        let event = self.arena.advance(dt);
        self.score = self.score.saturating_add(event.score_delta());
        self.arena.end_tick();
        Some(event)
    }

    /// Captures the turn's score and prepares the arena for the next agent.
    ///
    /// The active agent is released, the ball is served with a fresh random
    /// velocity, and the running score is cleared.
    pub fn score_and_reset(&mut self) -> i32 {
        let score = self.score;
        self.active = None;
        self.score = 0;
        let serve = random_serve_velocity(&mut self.rng);
        self.arena.reset(serve);
        score
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pong_engine::{DEFAULT_TIME_STEP, MIN_VERTICAL_SERVE_SPEED, Vec2};
    use pong_policy::GENE_COUNT;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn session() -> SimulationSession<Pcg64Mcg> {
        SimulationSession::new(Bounds::from_size(1024.0, 1024.0), Pcg64Mcg::seed_from_u64(31))
    }

    fn turn(genes: [f64; GENE_COUNT]) -> Turn {
        Turn {
            generation: 0,
            agent: 0,
            genes,
            duration: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_idle_session_is_frozen() {
        let mut session = session();
        let before = session.arena().clone();
        assert_eq!(session.tick(DEFAULT_TIME_STEP), None);
        assert_eq!(session.arena(), &before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_tick_moves_paddle_by_command_and_clears_velocity() {
        let mut session = session();
        // Positive weight on the right-edge gap pushes right.
        let mut genes = [0.0; GENE_COUNT];
        genes[7] = 10.0;
        session.bind(turn(genes));
        let x0 = session.arena().paddle().position().x;
        session.tick(DEFAULT_TIME_STEP);
        let x1 = session.arena().paddle().position().x;
        assert!(x1 > x0);
        assert!(x1 - x0 < 10.0);
        assert_eq!(session.arena().paddle().velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_score_accumulates_and_resets() {
        let mut session = session();
        session.bind(turn([0.0; GENE_COUNT]));
        let mut expected = 0;
        let mut events = 0;
        for _ in 0..3000 {
            let event = session.tick(DEFAULT_TIME_STEP).unwrap();
            expected += event.score_delta();
            if !event.is_quiet() {
                events += 1;
            }
        }
        assert_eq!(session.score(), expected);
        assert!(events > 0);

        let score = session.score_and_reset();
        assert_eq!(score, expected);
        assert_eq!(session.score(), 0);
        assert!(session.active_turn().is_none());
        let arena = session.arena();
        assert_eq!(arena.ball().position(), arena.bounds().center());
        assert!(arena.ball().velocity().y.abs() >= MIN_VERTICAL_SERVE_SPEED);
    }
}
