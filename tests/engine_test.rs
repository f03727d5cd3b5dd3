//! Tests for the game engine: turn alternation, move validation, and
//! the InProgress/Finished state machine.

use noughts::{Game, GameStatus, MoveTransition, Player, Position, Square};

/// Plays the given cell indices in order, panicking if any move is
/// unexpectedly ignored.
fn play_all(game: &mut Game, indices: &[usize]) -> MoveTransition {
    let mut last = MoveTransition::Ignored;
    for &index in indices {
        let pos = Position::from_index(index).expect("index in range");
        last = game.play(pos);
        assert_ne!(last, MoveTransition::Ignored, "move at {} was ignored", index);
    }
    last
}

#[test]
fn test_new_game_defaults() {
    let game = Game::new();
    assert_eq!(game.turn(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().squares().iter().all(|&s| s == Square::Empty));
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = Game::new();
    assert_eq!(game.turn(), Player::X);
    game.play(Position::TopLeft);
    assert_eq!(game.turn(), Player::O);
    game.play(Position::Center);
    assert_eq!(game.turn(), Player::X);
    game.play(Position::BottomRight);
    assert_eq!(game.turn(), Player::O);
}

#[test]
fn test_occupied_square_is_noop() {
    let mut game = Game::new();
    assert_eq!(game.play(Position::TopLeft), MoveTransition::Placed);

    let board_before = game.board().clone();
    let turn_before = game.turn();

    // Same square again: dropped, nothing changes.
    assert_eq!(game.play(Position::TopLeft), MoveTransition::Ignored);
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.turn(), turn_before);
}

#[test]
fn test_moves_after_finish_are_noops() {
    let mut game = Game::new();
    // X: 0, 1, 2 wins the top row; O: 4, 7.
    let last = play_all(&mut game, &[0, 4, 1, 7, 2]);
    assert_eq!(last, MoveTransition::Won(Player::X));

    let board_before = game.board().clone();
    let turn_before = game.turn();

    assert_eq!(game.play(Position::BottomLeft), MoveTransition::Ignored);
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.turn(), turn_before);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = Game::new();
    let last = play_all(&mut game, &[0, 4, 1, 7, 2]);
    assert_eq!(last, MoveTransition::Won(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_draw_scenario() {
    let mut game = Game::new();
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7 - no three in a row anywhere.
    let last = play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(last, MoveTransition::Draw);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_reset_restores_defaults() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);
    game.reset();

    assert_eq!(game.turn(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().squares().iter().all(|&s| s == Square::Empty));
}

#[test]
fn test_turn_flips_on_winning_move() {
    // The turn flips on every accepted move, the final one included, so
    // a finished game's snapshot carries the opponent of the last mover.
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);
    assert_eq!(game.turn(), Player::O);
}

#[test]
fn test_snapshot_round_trip() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1]);

    let resumed = Game::resume(&game.snapshot());
    assert_eq!(resumed.board(), game.board());
    assert_eq!(resumed.turn(), game.turn());
    assert_eq!(resumed.status(), GameStatus::InProgress);
}

#[test]
fn test_resume_rederives_finished_status() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    // Status is not stored; it comes back from the board itself.
    let resumed = Game::resume(&game.snapshot());
    assert_eq!(resumed.status(), GameStatus::Won(Player::X));
}
