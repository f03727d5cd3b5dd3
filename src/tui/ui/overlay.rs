//! End-of-game announcement overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::game::GameStatus;
use crate::tui::app::App;
use crate::tui::ui::board::center_rect;

/// Renders the win/draw overlay. Does nothing while the game is in
/// progress.
pub fn render_overlay(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let (title, message) = match app.game().status() {
        GameStatus::InProgress => return,
        GameStatus::Won(winner) => ("Winner!", format!("Player {} wins the game.", winner)),
        GameStatus::Draw => ("Draw", "Nobody wins this one.".to_string()),
    };

    let modal = center_rect(area, 36, 7);
    f.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(
            Style::default()
                .bg(palette.background)
                .fg(palette.highlight),
        );
    let text = format!("\n{}\n\nPress 'r' for a new game.", message);
    let paragraph = Paragraph::new(text)
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, modal);
}
