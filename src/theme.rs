//! Light/dark theme, persisted independently of the game state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Visual theme for the UI.
///
/// Defaults to [`Theme::Dark`]. The serialized names match the persisted
/// `mode` key values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    #[serde(rename = "dark-mode")]
    Dark,
    /// Light background, dark text.
    #[serde(rename = "light-mode")]
    Light,
}

impl Theme {
    /// Flips between dark and light.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                dim: Color::DarkGray,
                mark_x: Color::Blue,
                mark_o: Color::Red,
                highlight: Color::Yellow,
            },
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                dim: Color::Gray,
                mark_x: Color::Blue,
                mark_o: Color::Red,
                highlight: Color::Magenta,
            },
        }
    }
}

/// Colors a theme lends the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Separators, hints, and empty-square labels.
    pub dim: Color,
    /// Player X marks.
    pub mark_x: Color,
    /// Player O marks.
    pub mark_o: Color,
    /// Active turn and cursor highlight.
    pub highlight: Color,
}
