//! Loading and saving the population file.

use std::path::Path;

use anyhow::Context;
use pong_training::{Generation, evolution::POPULATION_SIZE};
use rand::Rng;

use crate::util;

const FILE_KIND: &str = "population";

/// Loads the generation stored at `path`, or creates a random one.
///
/// A random population is used when no path is given or the file does not
/// exist. Any other problem with the file is an error.
pub(crate) fn load_or_create<R>(path: Option<&Path>, rng: &mut R) -> anyhow::Result<Generation>
where
    R: Rng + ?Sized,
{
    if let Some(path) = path {
        let exists = path
            .try_exists()
            .with_context(|| format!("Failed to access population file: {}", path.display()))?;
        if exists {
            let generation: Generation = util::read_json_file(FILE_KIND, path)?;
            log::info!(
                "Loaded {} agents from {}",
                generation.len(),
                path.display()
            );
            return Ok(generation);
        }
        log::info!(
            "{} does not exist, starting from a random population",
            path.display()
        );
    }
    Ok(Generation::random(POPULATION_SIZE, rng)?)
}

pub(crate) fn save(generation: &Generation, path: &Path) -> anyhow::Result<()> {
    util::write_json_file(FILE_KIND, path, generation)?;
    log::info!("Saved {} agents to {}", generation.len(), path.display());
    Ok(())
}
