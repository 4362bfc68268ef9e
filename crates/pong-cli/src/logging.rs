use std::{fs::File, path::Path};

use anyhow::Context;
use env_logger::{Env, Target};

/// Where log output goes when no file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Console {
    /// Log to stderr at `info` unless `RUST_LOG` says otherwise.
    Stderr,
    /// The terminal is in use; stay quiet unless `RUST_LOG` is set.
    Quiet,
}

/// Installs the global logger.
///
/// With `log_file`, messages are written there at `info` by default.
pub(crate) fn init(log_file: Option<&Path>, console: Console) -> anyhow::Result<()> {
    let default_filter = match (log_file, console) {
        (Some(_), _) | (None, Console::Stderr) => "info",
        (None, Console::Quiet) => "off",
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder
        .try_init()
        .context("Failed to initialize the logger")?;
    Ok(())
}
