//! Country list screen.
//!
//! Header with the app title and theme hint, a search line, a region
//! selector line, then the visible country rows. Loading and empty states
//! replace the rows.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::CountrySummary;
use crate::theme::Palette;

use super::helpers::{flag_emoji, format_population, truncate};

/// Lines per country row (two content lines + spacing).
const LINES_PER_ITEM: usize = 3;

/// Render the full list screen.
pub fn render_list(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Region selector
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Country rows
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_title_bar(frame, chunks[0], app, &palette);
    render_search_input(frame, chunks[2], app, &palette);
    render_region_selector(frame, chunks[3], app, &palette);
    render_rows(frame, chunks[5], app, &palette);
    render_footer(frame, chunks[6], &palette);
}

/// Title on the left, theme state on the right.
fn render_title_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = "Where in the worlds?";
    let theme_text = format!("{} mode", app.theme.as_str());

    let padding_len = (area.width as usize)
        .saturating_sub(title.len() + theme_text.len() + 2)
        .max(1);

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(theme_text, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_search_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled("search: ", Style::default().fg(palette.dim))];

    if app.search.is_empty() {
        spans.push(Span::styled(
            "Search for a country…",
            Style::default().fg(palette.dim),
        ));
    } else {
        spans.push(Span::styled(
            app.search.clone(),
            Style::default().fg(palette.fg),
        ));
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_region_selector(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled("region: ", Style::default().fg(palette.dim)),
        Span::styled(
            app.region.label(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (tab to cycle)", Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_rows(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    if app.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(palette.dim),
            ))),
            area,
        );
        return;
    }

    // Keep the selection inside the viewport before borrowing the list.
    let rows_that_fit = (area.height as usize / LINES_PER_ITEM).max(1);
    if app.selected < app.scroll_offset {
        app.scroll_offset = app.selected;
    } else if app.selected >= app.scroll_offset + rows_that_fit {
        app.scroll_offset = app.selected + 1 - rows_that_fit;
    }
    let scroll_offset = app.scroll_offset;
    let selected = app.selected;

    let visible = app.visible();

    if let Some(message) = crate::pipeline::empty_message(visible.len(), &app.search) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ))),
            area,
        );
        return;
    }

    for (display_idx, (i, country)) in visible
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(rows_that_fit)
        .enumerate()
    {
        let row_y = area.y + (display_idx * LINES_PER_ITEM) as u16;
        if row_y >= area.bottom() {
            break;
        }
        let has_meta_line = row_y + 1 < area.bottom();
        render_country_row(
            frame,
            area.x,
            row_y,
            area.width,
            country,
            i == selected,
            has_meta_line,
            palette,
        );
    }
}

/// One country row:
/// Line 1: > 🇧🇪 Belgium                        11,589,623
/// Line 2:   Europe · Brussels
#[allow(clippy::too_many_arguments)]
fn render_country_row(
    frame: &mut Frame,
    x: u16,
    y: u16,
    width: u16,
    country: &CountrySummary,
    is_selected: bool,
    has_meta_line: bool,
    palette: &Palette,
) {
    let content_width = (width as usize).saturating_sub(2);

    let population = format_population(country.population);
    let flag = flag_emoji(&country.id);
    let name_text = if flag.is_empty() {
        country.name.clone()
    } else {
        format!("{} {}", flag, country.name)
    };
    let name_max = content_width.saturating_sub(population.len() + 2);
    let name_text = truncate(&name_text, name_max);

    let prefix = if is_selected { "> " } else { "  " };
    let name_style = if is_selected {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    };

    let padding_len = content_width
        .saturating_sub(unicode_width::UnicodeWidthStr::width(name_text.as_str()) + population.len());
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.accent)),
        Span::styled(name_text, name_style),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(population, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));

    if !has_meta_line {
        return;
    }
    let mut meta = country.region.clone();
    if let Some(capital) = &country.capital {
        meta.push_str(" · ");
        meta.push_str(capital);
    }
    let meta_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(truncate(&meta, content_width), Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(meta_line), Rect::new(x, y + 1, width, 1));
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = Line::from(Span::styled(
        "↑/↓ select · enter open · tab region · ctrl+t theme · esc quit",
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
