//! File-backed store: one JSON document in the platform data directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{GameStore, Snapshot, StoreError};
use crate::game::Player;
use crate::theme::Theme;

/// On-disk document.
///
/// The keys mirror the logical key/value pairs of the persisted state:
/// `board` (nine cells of `null | "x" | "o"`), `turn` (`"x" | "o"`),
/// and `mode` (`"dark-mode" | "light-mode"`). Absent keys are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<Vec<Option<Player>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    turn: Option<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Theme>,
}

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created lazily on first write.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn new(path: PathBuf) -> Self {
        debug!("Creating JsonFileStore");
        Self { path }
    }

    /// Creates a store at the default location in the platform data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the platform has no data directory.
    #[instrument]
    pub fn at_default_location() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StoreError::new("No platform data directory available"))?;
        Ok(Self::new(dir.join("noughts").join("state.json")))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the document, treating a missing or malformed file as empty.
    fn read_doc(&self) -> Result<StateDoc, StoreError> {
        if !self.path.exists() {
            return Ok(StateDoc::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                // Malformed state is recoverable: start over from defaults.
                warn!(path = %self.path.display(), error = %e, "Malformed state file, ignoring");
                Ok(StateDoc::default())
            }
        }
    }

    /// Writes the document, creating the parent directory if needed.
    fn write_doc(&self, doc: &StateDoc) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl GameStore for JsonFileStore {
    #[instrument(skip(self, snapshot))]
    fn save_game(&mut self, snapshot: &Snapshot) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "Saving game snapshot");
        let mut doc = self.read_doc()?;
        doc.board = Some(snapshot.wire_board());
        doc.turn = Some(*snapshot.turn());
        self.write_doc(&doc)
    }

    #[instrument(skip(self))]
    fn load_game(&self) -> Result<Option<Snapshot>, StoreError> {
        let doc = self.read_doc()?;
        let (Some(board), Some(turn)) = (doc.board, doc.turn) else {
            debug!("No stored game");
            return Ok(None);
        };
        Ok(Snapshot::from_wire(&board, turn))
    }

    #[instrument(skip(self))]
    fn clear_game(&mut self) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "Clearing game snapshot");
        let mut doc = self.read_doc()?;
        doc.board = None;
        doc.turn = None;
        self.write_doc(&doc)
    }

    #[instrument(skip(self))]
    fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        debug!(theme = %theme.label(), "Saving theme");
        let mut doc = self.read_doc()?;
        doc.mode = Some(theme);
        self.write_doc(&doc)
    }

    #[instrument(skip(self))]
    fn load_theme(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self.read_doc()?.mode)
    }
}
