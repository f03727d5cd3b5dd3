//! Screen layout and rendering.

pub mod board;
pub mod overlay;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::game::Player;
use crate::theme::Palette;
use crate::tui::app::App;

/// Draws the whole screen from the application state.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = f.area();

    // Theme background behind everything.
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(f, chunks[0], app, &palette);
    render_celebration(f, chunks[1], app, &palette);
    board::render_board(f, chunks[2], app);
    render_turn_indicator(f, chunks[3], app, &palette);
    render_status(f, chunks[4], app, &palette);
    render_help(f, chunks[5], app, &palette);

    overlay::render_overlay(f, area, app);
}

fn render_title(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = Paragraph::new(format!("Tic Tac Toe — {} mode", app.theme().label()))
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_celebration(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if !app.celebrating() {
        return;
    }
    let confetti = Paragraph::new("* . ✦ . * . ✧ . * . ✦ . * . ✧ . *")
        .style(Style::default().fg(palette.highlight))
        .alignment(Alignment::Center);
    f.render_widget(confetti, area);
}

fn render_turn_indicator(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let turn = app.game().turn();
    let mark_span = |player: Player| {
        let color = match player {
            Player::X => palette.mark_x,
            Player::O => palette.mark_o,
        };
        let style = if player == turn {
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.dim)
        };
        Span::styled(format!(" {} ", player), style)
    };

    let line = Line::from(vec![
        Span::styled("Turn: ", Style::default().fg(palette.text)),
        mark_span(Player::X),
        Span::raw(" "),
        mark_span(Player::O),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect, _app: &App, palette: &Palette) {
    let help = Paragraph::new("1-9/arrows+enter play · r reset · t theme · q quit")
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}
