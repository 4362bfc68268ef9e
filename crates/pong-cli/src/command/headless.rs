use std::time::Instant;

use pong_policy::{Feature, Genes};
use pong_training::{Evolution, SimulationSession, run_headless};

use crate::{
    config::{TrainArg, TrainConfig},
    logging::{self, Console},
    population,
};

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = TrainConfig::from_arg(arg)?;
    logging::init(config.log_file.as_deref(), Console::Stderr)?;

    let mut rng = config.evolution_rng();
    let generation = population::load_or_create(config.population_file.as_deref(), &mut rng)?;
    let mut evolution = Evolution::new(config.schedule.clone(), generation, rng);
    let mut session = SimulationSession::new(config.bounds, config.session_rng());

    let start = Instant::now();
    let summaries = run_headless(
        &mut evolution,
        &mut session,
        config.frame_rate,
        config.time_step,
    );
    log::info!(
        "Evaluated {}/{} generations in {:.2} sec",
        summaries.len(),
        evolution.schedule().generations,
        start.elapsed().as_secs_f64()
    );
    if let Some(summary) = summaries.last() {
        log::info!("Best genes: {}", describe_genes(&summary.best_genes));
    }

    if let Some(path) = &config.population_file {
        population::save(evolution.generation(), path)?;
    }
    Ok(())
}

/// Formats genes as `name=value` pairs in feature order.
fn describe_genes(genes: &Genes) -> String {
    Feature::ALL
        .iter()
        .zip(genes)
        .map(|(feature, gene)| format!("{}={gene:.3}", feature.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genes_are_labelled_by_feature() {
        let genes = [1.0, -2.0, 0.5, 0.0, 3.25, -0.125, 10.0, 7.0];
        assert_eq!(
            describe_genes(&genes),
            "ball_x=1.000 ball_y=-2.000 ball_vx=0.500 ball_vy=0.000 paddle_x=3.250 \
             paddle_y=-0.125 ball_paddle_distance=10.000 paddle_right_gap=7.000"
        );
    }
}
