use clap::{Parser, Subcommand};

use crate::config::TrainArg;

mod headless;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    /// Options for `play` when no subcommand is given
    #[clap(flatten)]
    play: TrainArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train in the terminal, watching every turn (default)
    Play(#[clap(flatten)] TrainArg),
    /// Train without a terminal UI, as fast as possible
    Headless(#[clap(flatten)] TrainArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(args.play)) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Headless(arg) => headless::run(&arg)?,
    }
    Ok(())
}
