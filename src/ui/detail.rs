//! Country detail screen.
//!
//! Shows the biography fields, comma-joined currencies and languages, the
//! flag's accessible description and navigable border-country links. The
//! not-found sentinel renders its own state; it is not an error.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::{CountryDetail, DetailResolution};
use crate::theme::Palette;

use super::helpers::{flag_emoji, format_population, truncate};

/// Render the full detail screen.
pub fn render_detail(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Back hint
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Content
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "esc  back",
            Style::default().fg(palette.dim),
        ))),
        chunks[0],
    );

    let Some(detail) = &app.detail else {
        return;
    };

    if detail.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(palette.dim),
            ))),
            chunks[2],
        );
        return;
    }

    match &detail.resolution {
        Some(DetailResolution::Found(record)) => {
            render_record(frame, chunks[2], record, detail.border_selected, &palette);
        }
        Some(DetailResolution::NotFound) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Country not found",
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                chunks[2],
            );
        }
        None => {}
    }
}

fn render_record(
    frame: &mut Frame,
    area: Rect,
    record: &CountryDetail,
    border_selected: usize,
    palette: &Palette,
) {
    let mut lines: Vec<Line> = Vec::new();

    let flag = flag_emoji(&record.id);
    let heading = if flag.is_empty() {
        record.name.clone()
    } else {
        format!("{} {}", flag, record.name)
    };
    lines.push(Line::from(Span::styled(
        heading,
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    let languages = record
        .languages
        .values()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let currencies = record
        .currencies
        .iter()
        .map(|c| c.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    lines.push(field(palette, "Native Name", record.native_name.as_deref().unwrap_or("—")));
    lines.push(field(palette, "Population", &format_population(record.population)));
    lines.push(field(palette, "Region", &record.region));
    lines.push(field(palette, "Sub Region", record.subregion.as_deref().unwrap_or("—")));
    lines.push(field(palette, "Capital", record.capital.as_deref().unwrap_or("—")));
    lines.push(Line::default());
    lines.push(field(palette, "Top Level Domain", &record.tld));
    lines.push(field(palette, "Currencies", &currencies));
    lines.push(field(palette, "Languages", &languages));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        truncate(&record.flag.description, area.width.saturating_sub(2) as usize),
        Style::default().fg(palette.dim),
    )));

    if !record.borders.is_empty() {
        lines.push(Line::default());
        let mut spans = vec![Span::styled(
            "Border Countries: ",
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )];
        for (i, border) in record.borders.iter().enumerate() {
            let style = if i == border_selected {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            spans.push(Span::styled(format!(" {} ", border), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            "←/→ select border · enter follow",
            Style::default().fg(palette.dim),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn field<'a>(palette: &Palette, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), Style::default().fg(palette.fg)),
    ])
}
