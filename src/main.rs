use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use preftui::cli::Cli;
use preftui::prefs::LogSink;
use preftui::{logging, ui};

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let initial = cli.initial_preferences();
    tracing::info!(?initial, "starting appearance form");

    ui::run(
        initial,
        Box::new(LogSink),
        Duration::from_millis(cli.tick_ms),
    )?;
    Ok(())
}
