//! In-memory store for tests and fakes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, instrument};

use super::{GameStore, Snapshot, StoreError};
use crate::theme::Theme;

#[derive(Debug, Default)]
struct Inner {
    game: Option<Snapshot>,
    theme: Option<Theme>,
}

/// Store that keeps everything in memory.
///
/// Clones share the same backing storage, so a test can hand one clone
/// to the app and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored snapshot, if any.
    pub fn saved_game(&self) -> Option<Snapshot> {
        self.inner.borrow().game.clone()
    }

    /// Returns the stored theme, if any.
    pub fn saved_theme(&self) -> Option<Theme> {
        self.inner.borrow().theme
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self, snapshot))]
    fn save_game(&mut self, snapshot: &Snapshot) -> Result<(), StoreError> {
        debug!("Saving game snapshot to memory");
        self.inner.borrow_mut().game = Some(snapshot.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    fn load_game(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.inner.borrow().game.clone())
    }

    #[instrument(skip(self))]
    fn clear_game(&mut self) -> Result<(), StoreError> {
        debug!("Clearing game snapshot from memory");
        self.inner.borrow_mut().game = None;
        Ok(())
    }

    #[instrument(skip(self))]
    fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.inner.borrow_mut().theme = Some(theme);
        Ok(())
    }

    #[instrument(skip(self))]
    fn load_theme(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self.inner.borrow().theme)
    }
}
