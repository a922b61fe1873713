//! View layer: pure rendering of the application state.

pub mod detail;
pub mod error;
pub mod helpers;
pub mod list;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the active screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    frame.render_widget(
        Block::new().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    match app.screen {
        Screen::List => list::render_list(frame, app),
        Screen::Detail => detail::render_detail(frame, app),
        Screen::Error => error::render_error(frame, app),
    }
}
