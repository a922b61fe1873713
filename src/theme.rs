//! Theme value and color palettes.
//!
//! The theme is an explicit value handed to the view layer; the pipeline
//! and resolver have no theme knowledge. Persistence goes through the
//! [`crate::traits::ThemeStore`] port.

use ratatui::style::Color;

/// Binary light/dark theme choice. Persisted as `"white"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    White,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    pub fn toggle(self) -> Theme {
        match self {
            Theme::White => Theme::Dark,
            Theme::Dark => Theme::White,
        }
    }

    /// The persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::White => "white",
            Theme::Dark => "dark",
        }
    }

    /// Parse the persisted string form. Unknown values are `None`, leaving
    /// the caller to fall back to the default.
    pub fn from_persisted(s: &str) -> Option<Theme> {
        match s.trim() {
            "white" => Some(Theme::White),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::White => Palette {
                bg: Color::White,
                fg: Color::Rgb(17, 21, 23),
                dim: Color::DarkGray,
                accent: Color::Rgb(0, 122, 204),
                highlight: Color::Rgb(17, 21, 23),
                error: Color::Red,
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(32, 44, 54),
                fg: Color::White,
                dim: Color::Gray,
                accent: Color::LightCyan,
                highlight: Color::White,
                error: Color::LightRed,
            },
        }
    }
}

/// Colors used by the view layer for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Primary text.
    pub fg: Color,
    /// Secondary text (labels, hints, placeholders).
    pub dim: Color,
    /// Accent for interactive markers.
    pub accent: Color,
    /// Selected-row text.
    pub highlight: Color,
    /// Error and empty-state messages.
    pub error: Color,
}
