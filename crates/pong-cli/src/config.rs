use std::{path::PathBuf, time::Duration};

use anyhow::ensure;
use pong_engine::{Bounds, DEFAULT_TIME_STEP};
use pong_training::{EvolutionSchedule, evolution::BASE_TURN_DURATION};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use ratatui_runtime::DEFAULT_FRAME_RATE;

/// Width and height of the arena in world units.
const ARENA_SIZE: f64 = 1024.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of generations to evaluate
    #[clap(short = 'g', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    generations: u32,
    /// Seconds added to every turn for each generation after the first
    #[clap(short = 't', long, default_value_t = 0)]
    time_increase: u64,
    /// Population file, loaded at startup if it exists and written when training ends
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,
    /// Simulation frames per second
    #[clap(long, default_value_t = DEFAULT_FRAME_RATE)]
    fps: f64,
    /// Seed for the random number generators
    #[clap(long)]
    seed: Option<u64>,
    /// Write log messages to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Default for TrainArg {
    fn default() -> Self {
        Self {
            generations: 1,
            time_increase: 0,
            file: None,
            fps: DEFAULT_FRAME_RATE,
            seed: None,
            log_file: None,
        }
    }
}

/// Validated settings for one training run.
#[derive(Debug, Clone)]
pub(crate) struct TrainConfig {
    pub schedule: EvolutionSchedule,
    pub population_file: Option<PathBuf>,
    pub frame_rate: f64,
    pub time_step: f64,
    pub bounds: Bounds,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl TrainConfig {
    pub fn from_arg(arg: &TrainArg) -> anyhow::Result<Self> {
        let TrainArg {
            generations,
            time_increase,
            file,
            fps,
            seed,
            log_file,
        } = arg;

        ensure!(*generations >= 1, "at least one generation is required");
        ensure!(
            fps.is_finite() && *fps > 0.0,
            "frame rate must be a positive number, got {fps}"
        );

        let schedule = EvolutionSchedule {
            generations: usize::try_from(*generations)?,
            base_turn: BASE_TURN_DURATION,
            turn_increment: Duration::from_secs(*time_increase),
            ..EvolutionSchedule::default()
        };

        Ok(Self {
            schedule,
            population_file: file.clone(),
            frame_rate: *fps,
            time_step: DEFAULT_TIME_STEP,
            bounds: Bounds::from_size(ARENA_SIZE, ARENA_SIZE),
            seed: *seed,
            log_file: log_file.clone(),
        })
    }

    /// Generator for population creation and breeding.
    pub fn evolution_rng(&self) -> Pcg64Mcg {
        self.rng(0)
    }

    /// Generator for ball serves.
    pub fn session_rng(&self) -> Pcg64Mcg {
        self.rng(1)
    }

    fn rng(&self, stream: u64) -> Pcg64Mcg {
        match self.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed.wrapping_add(stream)),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainConfig::from_arg(&TrainArg::default()).unwrap();
        assert_eq!(config.schedule.generations, 1);
        assert_eq!(config.schedule.turn_duration(3), BASE_TURN_DURATION);
        assert!(config.population_file.is_none());
        assert_eq!(config.bounds.width(), ARENA_SIZE);
    }

    #[test]
    fn test_time_increase_extends_turns() {
        let arg = TrainArg {
            generations: 4,
            time_increase: 2,
            ..TrainArg::default()
        };
        let config = TrainConfig::from_arg(&arg).unwrap();
        assert_eq!(config.schedule.turn_duration(3), Duration::from_secs(11));
    }

    #[test]
    fn test_bad_frame_rate_is_rejected() {
        for fps in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let arg = TrainArg {
                fps,
                ..TrainArg::default()
            };
            assert!(TrainConfig::from_arg(&arg).is_err(), "fps={fps}");
        }
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let arg = TrainArg {
            seed: Some(7),
            ..TrainArg::default()
        };
        let config = TrainConfig::from_arg(&arg).unwrap();
        let a: u64 = config.evolution_rng().random();
        let b: u64 = config.evolution_rng().random();
        let c: u64 = config.session_rng().random();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
