//! Saved palettes screen - one swatch strip per saved palette

use crate::app::state::AppState;
use crate::palette::Palette;
use crate::tui::theme::{get_theme, swatch_color};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::padded;

/// Prefix width: cursor, mark, index.
const PREFIX_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let area = padded(area);

    if state.store.is_empty() {
        let msg = Line::from(Span::styled(
            "No saved palettes. Press s on the palette screen to save one.",
            Style::default().fg(theme.colors.fg_secondary),
        ));
        frame.render_widget(Paragraph::new(msg), area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let visible = rows[0].height as usize;
    state.saved_list.set_viewport(visible);

    let list = &state.saved_list;
    let strip_width = (rows[0].width as usize).saturating_sub(PREFIX_WIDTH);

    let lines: Vec<Line> = state
        .store
        .list()
        .iter()
        .enumerate()
        .skip(list.scroll_offset)
        .take(visible)
        .map(|(i, palette)| {
            let is_selected = i == list.selected;
            let cursor = if is_selected { icons.selected } else { icons.unselected };
            let mark = if list.marked.contains(&i) { icons.marked } else { " " };
            let text_style = if is_selected {
                Style::default()
                    .fg(theme.colors.fg_primary)
                    .bg(theme.colors.bg_highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.colors.fg_secondary)
            };

            let mut spans = vec![
                Span::styled(format!("{cursor} "), Style::default().fg(theme.colors.accent)),
                Span::styled(format!("{mark} "), Style::default().fg(theme.colors.accent)),
                Span::styled(format!("{:>4}  ", i + 1), text_style),
            ];
            spans.extend(strip_spans(palette, strip_width, state.show_opacity));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), rows[0]);

    let hints = Line::from(Span::styled(
        "Space: Mark  d: Delete marked (or selected)  o: Opacity",
        Style::default().fg(theme.colors.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(hints), rows[1]);
}

fn strip_spans(palette: &Palette, width: usize, show_opacity: bool) -> Vec<Span<'static>> {
    palette
        .iter()
        .zip(strip_widths(palette.len(), width))
        .map(|(&color, w)| {
            Span::styled(
                " ".repeat(w),
                Style::default().bg(swatch_color(color, show_opacity)),
            )
        })
        .collect()
}

/// Split `width` cells across `n` colors as evenly as possible.
/// Colors that do not fit get no cells and are left out.
fn strip_widths(n: usize, width: usize) -> Vec<usize> {
    if n == 0 || width == 0 {
        return Vec::new();
    }
    if n >= width {
        return vec![1; width];
    }
    let base = width / n;
    let extra = width % n;
    (0..n).map(|i| base + usize::from(i < extra)).collect()
}
