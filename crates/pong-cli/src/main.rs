mod command;
mod config;
mod logging;
mod population;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
