//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{App, Cli, GameStore, JsonFileStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut store = match cli.state_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_location()?,
    };

    if cli.fresh
        && let Err(e) = store.clear_game()
    {
        warn!(error = %e, "Failed to discard saved game");
    }

    info!(state_file = %store.path().display(), "Starting noughts");

    let app = App::new(Box::new(store));
    noughts::run(app)
}
