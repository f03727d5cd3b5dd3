//! The logical core: board, turns, and terminal-state rules.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{Game, MoveTransition};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
