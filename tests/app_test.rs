//! Tests for the application shell over an in-memory store.

use noughts::{App, GameStatus, GameStore, MemoryStore, Player, Position, Theme};

fn app_with_store() -> (App, MemoryStore) {
    let store = MemoryStore::new();
    let app = App::new(Box::new(store.clone()));
    (app, store)
}

#[test]
fn test_starts_fresh_without_stored_state() {
    let (app, _store) = app_with_store();
    assert_eq!(app.game().turn(), Player::X);
    assert_eq!(app.game().status(), GameStatus::InProgress);
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn test_move_persists_snapshot() {
    let (mut app, store) = app_with_store();
    assert!(store.saved_game().is_none());

    app.play_at(Position::TopLeft);

    let saved = store.saved_game().expect("snapshot written");
    assert_eq!(*saved.turn(), Player::O);
}

#[test]
fn test_ignored_move_does_not_persist() {
    let (mut app, store) = app_with_store();
    app.play_at(Position::TopLeft);
    let saved_before = store.saved_game();

    // Occupied square: dropped, and no new write happens.
    app.play_at(Position::TopLeft);
    assert_eq!(store.saved_game(), saved_before);
    assert_eq!(app.game().turn(), Player::O);
}

#[test]
fn test_resumes_stored_game() {
    let store = MemoryStore::new();
    {
        let mut app = App::new(Box::new(store.clone()));
        app.play_at(Position::TopLeft);
        app.play_at(Position::Center);
    }

    // A second app over the same store picks up where the first left off.
    let app = App::new(Box::new(store.clone()));
    assert_eq!(app.game().turn(), Player::X);
    assert!(!app.game().board().is_empty(Position::TopLeft));
    assert!(!app.game().board().is_empty(Position::Center));
}

#[test]
fn test_resumes_finished_game_as_finished() {
    let store = MemoryStore::new();
    {
        let mut app = App::new(Box::new(store.clone()));
        // X: 0, 1, 2 wins the top row; O: 4, 7.
        for index in [0, 4, 1, 7, 2] {
            app.play_at(Position::from_index(index).unwrap());
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    }

    // The terminal move was persisted and only reset clears it, so the
    // finished board comes back finished.
    let app = App::new(Box::new(store.clone()));
    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_reset_clears_stored_game() {
    let (mut app, store) = app_with_store();
    app.play_at(Position::TopLeft);
    assert!(store.saved_game().is_some());

    app.reset();

    assert!(store.saved_game().is_none());
    assert_eq!(app.game().turn(), Player::X);
    assert_eq!(app.game().status(), GameStatus::InProgress);
}

#[test]
fn test_theme_toggle_persists_independently() {
    let (mut app, store) = app_with_store();
    app.play_at(Position::TopLeft);

    app.toggle_theme();
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(store.saved_theme(), Some(Theme::Light));

    // Resetting the game leaves the theme alone.
    app.reset();
    assert_eq!(store.saved_theme(), Some(Theme::Light));
}

#[test]
fn test_resumes_stored_theme() {
    let store = MemoryStore::new();
    store.clone().save_theme(Theme::Light).unwrap();

    let app = App::new(Box::new(store.clone()));
    assert_eq!(app.theme(), Theme::Light);
}

#[test]
fn test_celebration_fires_on_win_and_decays() {
    let (mut app, _store) = app_with_store();
    for index in [0, 4, 1, 7, 2] {
        app.play_at(Position::from_index(index).unwrap());
    }
    assert!(app.celebrating());

    // Fire-and-forget: ticking it away changes no game state.
    for _ in 0..100 {
        app.tick();
    }
    assert!(!app.celebrating());
    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_no_celebration_on_draw() {
    let (mut app, _store) = app_with_store();
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        app.play_at(Position::from_index(index).unwrap());
    }
    assert_eq!(app.game().status(), GameStatus::Draw);
    assert!(!app.celebrating());
}

#[test]
fn test_cursor_moves_and_wraps() {
    use noughts::CursorMove;

    let (mut app, _store) = app_with_store();
    assert_eq!(app.cursor(), Position::Center);

    app.move_cursor(CursorMove::Up);
    assert_eq!(app.cursor(), Position::TopCenter);
    app.move_cursor(CursorMove::Up);
    assert_eq!(app.cursor(), Position::BottomCenter);
    app.move_cursor(CursorMove::Right);
    assert_eq!(app.cursor(), Position::BottomRight);
    app.move_cursor(CursorMove::Right);
    assert_eq!(app.cursor(), Position::BottomLeft);
}

#[test]
fn test_play_cursor_places_at_cursor() {
    let (mut app, store) = app_with_store();
    app.play_cursor();

    assert!(!app.game().board().is_empty(Position::Center));
    assert!(store.saved_game().is_some());
}
