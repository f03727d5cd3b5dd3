//! Application state observed by the render loop.

use tracing::{debug, info, instrument, warn};

use crate::game::{Game, GameStatus, MoveTransition, Position};
use crate::store::GameStore;
use crate::theme::Theme;

/// Ticks the win celebration stays on screen (~3s at the poll rate).
const CELEBRATION_TICKS: u8 = 30;

/// Direction for cursor movement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// Move up one row, wrapping.
    Up,
    /// Move down one row, wrapping.
    Down,
    /// Move left one column, wrapping.
    Left,
    /// Move right one column, wrapping.
    Right,
}

/// Main application state: the game, its store, and presentation state.
///
/// All transitions run synchronously on the UI event loop; the store is
/// written best-effort after each accepted move.
pub struct App {
    game: Game,
    store: Box<dyn GameStore>,
    theme: Theme,
    cursor: Position,
    status_line: String,
    celebration: u8,
}

impl App {
    /// Creates the application, resuming any stored game and theme.
    ///
    /// Absent or malformed stored state falls back to an empty board
    /// with X to move and the dark theme.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn GameStore>) -> Self {
        let game = match store.load_game() {
            Ok(Some(snapshot)) => {
                info!("Resuming stored game");
                Game::resume(&snapshot)
            }
            Ok(None) => Game::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load stored game, starting fresh");
                Game::new()
            }
        };
        let theme = match store.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load stored theme, using default");
                Theme::default()
            }
        };
        let status_line = status_message(&game);
        Self {
            game,
            store,
            theme,
            cursor: Position::Center,
            status_line,
            celebration: 0,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the cursor position for keyboard cell selection.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// True while the win celebration is playing.
    pub fn celebrating(&self) -> bool {
        self.celebration > 0
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Invalid moves are dropped without feedback. Accepted moves are
    /// persisted; a winning move starts the celebration.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, pos: Position) {
        match self.game.play(pos) {
            MoveTransition::Ignored => {
                debug!("Move ignored");
            }
            transition => {
                self.persist();
                self.status_line = status_message(&self.game);
                if let MoveTransition::Won(winner) = transition {
                    info!(winner = %winner, "Starting celebration");
                    self.celebration = CELEBRATION_TICKS;
                }
            }
        }
    }

    /// Plays at the cursor position.
    pub fn play_cursor(&mut self) {
        self.play_at(self.cursor);
    }

    /// Moves the cursor, wrapping at the board edges.
    #[instrument(skip(self))]
    pub fn move_cursor(&mut self, direction: CursorMove) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match direction {
            CursorMove::Up => ((row + 2) % 3, col),
            CursorMove::Down => ((row + 1) % 3, col),
            CursorMove::Left => (row, (col + 2) % 3),
            CursorMove::Right => (row, (col + 1) % 3),
        };
        // In range by construction.
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }

    /// Resets to a fresh game and clears the stored snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.game.reset();
        self.celebration = 0;
        self.status_line = status_message(&self.game);
        if let Err(e) = self.store.clear_game() {
            warn!(error = %e, "Failed to clear stored game");
        }
    }

    /// Flips the theme and persists the preference.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme.label(), "Theme toggled");
        if let Err(e) = self.store.save_theme(self.theme) {
            warn!(error = %e, "Failed to persist theme");
        }
    }

    /// Advances fire-and-forget animations by one tick.
    pub fn tick(&mut self) {
        self.celebration = self.celebration.saturating_sub(1);
    }

    /// Persists the current snapshot, logging on failure.
    fn persist(&mut self) {
        if let Err(e) = self.store.save_game(&self.game.snapshot()) {
            warn!(error = %e, "Failed to persist game snapshot");
        }
    }
}

/// Status line text for the current game state.
fn status_message(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            format!("Player {}'s turn", game.turn())
        }
        GameStatus::Won(winner) => {
            format!("Player {} wins! Press 'r' for a new game.", winner)
        }
        GameStatus::Draw => "It's a draw! Press 'r' for a new game.".to_string(),
    }
}
