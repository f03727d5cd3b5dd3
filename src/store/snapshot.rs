//! The persisted {board, turn} pair.

use crate::game::{Board, Player};
use derive_getters::Getters;
use tracing::{instrument, warn};

/// A resumable game: the board and whose move is next.
///
/// Written after every accepted move and cleared on explicit reset.
/// The theme is persisted independently and is not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// Board at the time of the save.
    board: Board,
    /// Player to move next.
    turn: Player,
}

impl Snapshot {
    /// Creates a snapshot from a board and the player to move.
    pub fn new(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Returns the board as the wire shape: nine optional marks.
    pub fn wire_board(&self) -> Vec<Option<Player>> {
        self.board.to_cells().to_vec()
    }

    /// Rebuilds a snapshot from wire data.
    ///
    /// Returns `None` if the stored board does not have exactly nine
    /// cells; malformed state is recoverable, not fatal.
    #[instrument(skip(cells))]
    pub fn from_wire(cells: &[Option<Player>], turn: Player) -> Option<Self> {
        let cells: [Option<Player>; 9] = match cells.try_into() {
            Ok(cells) => cells,
            Err(_) => {
                warn!(len = cells.len(), "Stored board has wrong length, discarding");
                return None;
            }
        };
        Some(Self::new(Board::from_cells(cells), turn))
    }
}
