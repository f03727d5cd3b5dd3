//! Noughts - persisted tic-tac-toe for the terminal
//!
//! A 3x3 two-player game with turn alternation, win/draw detection, a
//! saved-game snapshot that survives restarts, and a light/dark theme.
//!
//! # Architecture
//!
//! - **Game**: pure logical core - board, turns, and terminal-state rules
//! - **Store**: injected persistence boundary for the snapshot and theme
//! - **Tui**: ratatui presentation shell observing the game state
//!
//! # Example
//!
//! ```
//! use noughts::{App, MemoryStore, Position};
//!
//! let store = MemoryStore::new();
//! let mut app = App::new(Box::new(store.clone()));
//! app.play_at(Position::Center);
//! assert!(store.saved_game().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod store;
mod theme;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Game core
pub use game::{Board, Game, GameStatus, MoveTransition, Player, Position, Square, rules};

// Crate-level exports - Persistence
pub use store::{GameStore, JsonFileStore, MemoryStore, Snapshot, StoreError};

// Crate-level exports - Theme
pub use theme::{Palette, Theme};

// Crate-level exports - TUI
pub use tui::{App, CursorMove, run};
