//! Game engine: move application and the InProgress/Finished state machine.

use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use crate::store::Snapshot;
use tracing::{debug, instrument};

/// Result of offering a move to the engine.
///
/// Invalid moves (occupied square, or any move after the game has
/// finished) are reported as [`MoveTransition::Ignored`] and change
/// nothing. The terminal transitions double as notifications the caller
/// may act on (or ignore) for presentation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTransition {
    /// The move was dropped without changing any state.
    Ignored,
    /// The mark was placed and the game continues.
    Placed,
    /// The mark was placed and wins the game.
    Won(Player),
    /// The mark was placed and fills the board with no winner.
    Draw,
}

/// Tic-tac-toe game: board, turn to move, and derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board. X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Resumes a game from a persisted snapshot.
    ///
    /// Status is derived state, so it is recomputed from the board
    /// rather than trusted from storage. Resuming a finished board
    /// yields a finished game.
    #[instrument(skip(snapshot))]
    pub fn resume(snapshot: &Snapshot) -> Self {
        let board = snapshot.board().clone();
        let status = Self::evaluate(&board);
        debug!(status = ?status, "Resumed game from snapshot");
        Self {
            board,
            turn: *snapshot.turn(),
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the persistable {board, turn} snapshot of this game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.turn)
    }

    /// Plays the current player's mark at the given position.
    ///
    /// On success the mark is written, the turn flips, and the status is
    /// re-evaluated. Moves on occupied squares or after the game has
    /// finished are silently dropped.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, pos: Position) -> MoveTransition {
        if !self.status.in_progress() {
            debug!("Move after game end ignored");
            return MoveTransition::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!("Move on occupied square ignored");
            return MoveTransition::Ignored;
        }

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        self.turn = player.opponent();
        self.status = Self::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => MoveTransition::Placed,
            GameStatus::Won(winner) => {
                debug!(winner = %winner, "Game won");
                MoveTransition::Won(winner)
            }
            GameStatus::Draw => {
                debug!("Game drawn");
                MoveTransition::Draw
            }
        }
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Derives the status from a board.
    fn evaluate(board: &Board) -> GameStatus {
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
