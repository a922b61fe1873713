//! Error screen for fetch failures.
//!
//! Shows the failure's message text. Absence of data never lands here;
//! that is the detail screen's not-found state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the error screen.
pub fn render_error(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(1), // Heading
            Constraint::Length(1),
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Message
            Constraint::Length(2),
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Oops!",
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sorry, an unexpected error occurred:",
            Style::default().fg(palette.fg),
        )))
        .alignment(Alignment::Center),
        chunks[3],
    );

    let message = app.error_message.as_deref().unwrap_or("unknown error");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "esc  back to list",
            Style::default().fg(palette.dim),
        )))
        .alignment(Alignment::Center),
        chunks[6],
    );
}
