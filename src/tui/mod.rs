//! Terminal UI: event loop and rendering.

pub mod app;
pub mod ui;

pub use app::{App, CursorMove};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, instrument};

use crate::game::Position;

/// Runs the TUI until the player quits. Sets up the terminal and
/// restores it on exit.
#[instrument(skip(app))]
pub fn run(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Synchronous event loop: draw, poll for a key, dispatch, tick.
fn event_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("Starting event loop");
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll with a short timeout to keep animations ticking.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("Quitting");
                    return Ok(());
                }
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('t') => app.toggle_theme(),
                KeyCode::Char(c @ '1'..='9') => {
                    if let Some(pos) = Position::from_digit(c) {
                        app.play_at(pos);
                    }
                }
                KeyCode::Up => app.move_cursor(CursorMove::Up),
                KeyCode::Down => app.move_cursor(CursorMove::Down),
                KeyCode::Left => app.move_cursor(CursorMove::Left),
                KeyCode::Right => app.move_cursor(CursorMove::Right),
                KeyCode::Enter | KeyCode::Char(' ') => app.play_cursor(),
                _ => {}
            }
        }

        app.tick();
    }
}
