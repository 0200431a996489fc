//! Current palette - one full-width swatch row per color

use crate::app::state::AppState;
use crate::tui::theme::{Theme, get_theme, label_color, swatch_color};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::padded;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    if state.current.is_empty() {
        render_instructions(frame, &theme, padded(area));
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(padded(area));

    render_header(frame, state, &theme, rows[0]);

    let width = rows[1].width as usize;
    let visible = rows[1].height as usize;
    let lines: Vec<Line> = state
        .current
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(visible)
        .map(|(i, &color)| {
            let bg = swatch_color(color, state.show_opacity);
            let label = format!(" {:>4}  {}", i + 1, color.hex(state.show_opacity));
            Line::from(Span::styled(
                format!("{label:<width$}"),
                Style::default()
                    .bg(bg)
                    .fg(label_color(bg))
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), rows[1]);
}

fn render_header(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let mut spans = vec![Span::styled(
        format!("{} colors", state.current.len()),
        Style::default().fg(theme.colors.fg_secondary),
    )];
    if state.current_is_saved() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} saved", icons.save),
            Style::default().fg(theme.colors.accent),
        ));
    }
    if state.current.len() > area.height as usize {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("from #{}", state.scroll_offset + 1),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_instructions(frame: &mut Frame, theme: &Theme, area: Rect) {
    let heading = |title: &str| {
        Line::from(Span::styled(
            format!("━━ {title} ━━"),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let step = |text: &str| {
        Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(theme.colors.fg_primary),
        ))
    };

    let lines = vec![
        heading("How to use"),
        step("1. Select a number of colours (← / →, [ / ])."),
        step("2. Choose if you would like to view opacity (o)."),
        step("3. Press Enter to generate!"),
        Line::default(),
        heading("Save for later"),
        step("Press s to keep a record of the palette."),
        step("To view saved palettes, press v or 2."),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
