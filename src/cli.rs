//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - persisted tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with saved games and themes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the saved-game file (defaults to the platform data directory)
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Discard any saved game and start with a fresh board
    #[arg(long)]
    pub fresh: bool,
}
