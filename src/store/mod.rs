//! Persistence boundary for game snapshots and the theme preference.
//!
//! The core depends only on the [`GameStore`] trait. The binary wires in
//! the JSON file store; tests use the in-memory store.

mod json_file;
mod memory;
mod snapshot;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use crate::theme::Theme;
use derive_more::{Display, Error};
use tracing::instrument;

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Key/value persistence for the game snapshot and theme preference.
///
/// Writes are best-effort: callers log failures and continue, and no
/// method is expected to fail in a way visible to the player. The game
/// snapshot and the theme occupy independent keys — clearing one never
/// touches the other.
pub trait GameStore {
    /// Persists the {board, turn} snapshot, replacing any previous one.
    fn save_game(&mut self, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Loads the stored snapshot, if any.
    ///
    /// Malformed stored state loads as `None` rather than an error.
    fn load_game(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Removes the stored snapshot. The theme is left untouched.
    fn clear_game(&mut self) -> Result<(), StoreError>;

    /// Persists the theme preference.
    fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError>;

    /// Loads the stored theme preference, if any.
    fn load_theme(&self) -> Result<Option<Theme>, StoreError>;
}
