//! Generation-by-generation training schedule.
//!
//! [`Evolution`] is a small state machine that hands out one [`Turn`] at a time
//! and absorbs the score each turn produced. It does not know how a turn is
//! played; the threaded [`driver`](crate::driver) and the
//! [`headless`](crate::headless) runner both feed it.
//!
//! ```text
//!   Idle ──next_turn──▶ Evaluating ──finish_turn──▶ Scoring ──next_turn──▶ Evaluating
//!                                        │
//!                          last agent of │ the generation
//!                                        ▼
//!                      Breeding ──next_turn──▶ Evaluating     (more generations)
//!                      Terminal                               (schedule complete)
//! ```
//!
//! Every evaluated generation is replaced by its bred successor, the last one
//! included, so the run result is a fresh generation ready for the next run.

use std::time::Duration;

use pong_policy::Genes;
use rand::Rng;

use crate::{generation::Generation, summary::GenerationSummary};

/// Turn length of the first generation.
pub const BASE_TURN_DURATION: Duration = Duration::from_secs(5);

/// Fraction of the ranked generation eligible as parents.
pub const TRAINING_CULL_FRACTION: f64 = 0.3;

/// Number of agents in a freshly created population.
pub const POPULATION_SIZE: usize = 10;

/// How many generations to run and how long each turn lasts.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionSchedule {
    /// Number of generations to evaluate (at least one).
    pub generations: usize,
    pub base_turn: Duration,
    /// Extra turn time added per generation.
    pub turn_increment: Duration,
    pub cull_fraction: f64,
}

impl Default for EvolutionSchedule {
    fn default() -> Self {
        Self {
            generations: 1,
            base_turn: BASE_TURN_DURATION,
            turn_increment: Duration::ZERO,
            cull_fraction: TRAINING_CULL_FRACTION,
        }
    }
}

impl EvolutionSchedule {
    /// Turn length for the zero-based `generation`.
    #[must_use]
    pub fn turn_duration(&self, generation: usize) -> Duration {
        let steps = u32::try_from(generation).unwrap_or(u32::MAX);
        self.base_turn + self.turn_increment.saturating_mul(steps)
    }
}

/// One agent's exclusive time on the paddle.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// Zero-based generation index.
    pub generation: usize,
    /// Index of the agent within its generation.
    pub agent: usize,
    pub genes: Genes,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EvolutionState {
    /// No turn has been handed out yet.
    Idle,
    /// An agent is on the paddle.
    Evaluating { generation: usize, agent: usize },
    /// The agent's score has been recorded.
    Scoring { generation: usize, agent: usize },
    /// `generation` was fully evaluated and its successor bred.
    Breeding { generation: usize },
    /// Every scheduled generation has been evaluated.
    Terminal,
}

#[derive(Debug)]
pub struct Evolution<R> {
    schedule: EvolutionSchedule,
    generation: Generation,
    generation_index: usize,
    next_agent: usize,
    state: EvolutionState,
    rng: R,
}

impl<R> Evolution<R>
where
    R: Rng,
{
    #[must_use]
    pub fn new(schedule: EvolutionSchedule, generation: Generation, rng: R) -> Self {
        assert!(schedule.generations >= 1);
        Self {
            schedule,
            generation,
            generation_index: 0,
            next_agent: 0,
            state: EvolutionState::Idle,
            rng,
        }
    }

    #[must_use]
    pub fn schedule(&self) -> &EvolutionSchedule {
        &self.schedule
    }

    #[must_use]
    pub fn state(&self) -> EvolutionState {
        self.state
    }

    /// The generation currently being evaluated, or the bred successor of the
    /// last evaluated generation once terminal.
    #[must_use]
    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    #[must_use]
    pub fn generation_index(&self) -> usize {
        self.generation_index
    }

    #[must_use]
    pub fn into_generation(self) -> Generation {
        self.generation
    }

    /// Activates the next agent, or returns `None` once terminal.
    ///
    /// # Panics
    ///
    /// Panics if the previous turn has not been finished.
    pub fn next_turn(&mut self) -> Option<Turn> {
        match self.state {
            EvolutionState::Terminal => return None,
            EvolutionState::Evaluating { .. } => panic!("previous turn is still running"),
            EvolutionState::Idle
            | EvolutionState::Scoring { .. }
            | EvolutionState::Breeding { .. } => {}
        }

        let generation = self.generation_index;
        let agent = self.next_agent;
        let duration = self.schedule.turn_duration(generation);
        if agent == 0 {
            log::info!(
                "Starting generation #{} ({} agents, {:.1} sec/turn)",
                generation + 1,
                self.generation.len(),
                duration.as_secs_f64()
            );
        }

        self.state = EvolutionState::Evaluating { generation, agent };
        Some(Turn {
            generation,
            agent,
            genes: *self.generation.agents()[agent].genes(),
            duration,
        })
    }

    /// Records the active agent's final score.
    ///
    /// When this completes a generation, its summary is returned and the
    /// successor is bred. After the last scheduled generation the evolution
    /// becomes terminal and the successor is the run result.
    ///
    /// # Panics
    ///
    /// Panics if no turn is running.
    pub fn finish_turn(&mut self, score: i32) -> Option<GenerationSummary> {
        let EvolutionState::Evaluating { generation, agent } = self.state else {
            panic!("no turn is running");
        };
        self.generation.set_score(agent, score);
        self.state = EvolutionState::Scoring { generation, agent };
        log::info!(
            "gen #{} agent #{}: scored {score}",
            generation + 1,
            agent + 1
        );

        self.next_agent += 1;
        if self.next_agent < self.generation.len() {
            return None;
        }

        let summary = GenerationSummary::new(generation, &self.generation);
        log::info!("{summary}");

        self.generation = self
            .generation
            .select_next(self.schedule.cull_fraction, &mut self.rng);
        if generation + 1 >= self.schedule.generations {
            self.state = EvolutionState::Terminal;
        } else {
            self.generation_index += 1;
            self.next_agent = 0;
            self.state = EvolutionState::Breeding { generation };
        }
        Some(summary)
    }
}
