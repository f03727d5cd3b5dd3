//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::game::{Board, GameStatus, Player, Position, Square};
use crate::theme::Palette;
use crate::tui::app::App;

/// Renders the 3x3 board with separators and the selection cursor.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1], &app.theme().palette());
    render_row(f, rows[2], app, 1);
    render_separator(f, rows[3], &app.theme().palette());
    render_row(f, rows[4], app, 2);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize) {
    let palette = app.theme().palette();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, &slot) in [cols[0], cols[2], cols[4]].iter().enumerate() {
        // Row and column are both 0-2 here.
        let pos = Position::from_row_col(row, col).unwrap();
        render_square(f, slot, app, pos);
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1], &palette);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: Position) {
    let palette = app.theme().palette();
    let (text, mut style) = square_text(app.game().board(), pos, &palette);

    // The cursor only matters while the game accepts moves.
    if pos == app.cursor() && app.game().status() == GameStatus::InProgress {
        style = style
            .fg(palette.highlight)
            .add_modifier(Modifier::UNDERLINED);
    }

    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn square_text(board: &Board, pos: Position, palette: &Palette) -> (String, Style) {
    match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(palette.dim),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.mark_x)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.mark_o)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(palette.dim));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Centers a fixed-size rectangle inside the given area.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
