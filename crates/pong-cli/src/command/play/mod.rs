use std::thread::{self, JoinHandle};

use anyhow::Context;
use pong_training::{Evolution, EvolutionDriver, SimulationSession, WallClockTimer, session_channel};
use ratatui_runtime::Runtime;

use crate::{
    command::play::app::ArenaApp,
    config::{TrainArg, TrainConfig},
    logging::{self, Console},
    population,
};

mod app;

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = TrainConfig::from_arg(arg)?;
    logging::init(config.log_file.as_deref(), Console::Quiet)?;

    let mut rng = config.evolution_rng();
    let generation = population::load_or_create(config.population_file.as_deref(), &mut rng)?;
    let evolution = Evolution::new(config.schedule.clone(), generation, rng);
    let session = SimulationSession::new(config.bounds, config.session_rng());
    let (host, handle) = session_channel(session);

    let population_file = config.population_file.clone();
    let driver = thread::Builder::new()
        .name("evolution".to_owned())
        .spawn(move || -> anyhow::Result<()> {
            let exit_handle = handle.clone();
            let generation = EvolutionDriver::new(evolution, handle, WallClockTimer).run()?;
            let Some(path) = population_file else {
                log::info!("Training finished");
                return Ok(());
            };
            let saved = population::save(&generation, &path);
            // The UI closes even if saving failed; the error surfaces after it.
            let _ = exit_handle.request_exit();
            saved
        })
        .context("Failed to start the evolution thread")?;

    let mut app = ArenaApp::new(host, &config);
    Runtime::new()
        .run(&mut app)
        .context("Terminal UI failed")?;

    finish_driver(driver, app.run_complete())
}

/// Collects the driver's result once the UI has closed.
///
/// When the driver asked the UI to close it is past training and saving, so
/// it is joined and its error returned. Otherwise the user quit mid-run and
/// the driver is left behind unless it already finished.
fn finish_driver(
    driver: JoinHandle<anyhow::Result<()>>,
    run_complete: bool,
) -> anyhow::Result<()> {
    if run_complete || driver.is_finished() {
        driver
            .join()
            .map_err(|_| anyhow::anyhow!("evolution thread panicked"))??;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_completed_run_waits_for_the_save_result() {
        let driver = thread::spawn(|| -> anyhow::Result<()> {
            thread::sleep(Duration::from_millis(50));
            anyhow::bail!("Failed to create population file")
        });
        let err = finish_driver(driver, true).unwrap_err();
        assert!(err.to_string().contains("population file"));
    }

    #[test]
    fn test_finished_driver_error_is_reported() {
        let driver = thread::spawn(|| -> anyhow::Result<()> { anyhow::bail!("session closed") });
        while !driver.is_finished() {
            thread::yield_now();
        }
        assert!(finish_driver(driver, false).is_err());
    }

    #[test]
    fn test_interrupted_run_does_not_block() {
        let driver = thread::spawn(|| -> anyhow::Result<()> {
            thread::sleep(Duration::from_secs(2));
            Ok(())
        });
        finish_driver(driver, false).unwrap();
    }
}
