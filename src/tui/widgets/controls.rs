//! Controls bar - count slider, toggles, generate button

use crate::app::state::AppState;
use crate::config::Config;
use crate::tui::theme::{LoadingSpinner, Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::padded;

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(padded(inner));

    render_slider(frame, cfg, state, &theme, rows[0]);
    render_buttons(frame, state, &theme, rows[1]);
}

fn render_slider(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let max = cfg.generator.max_for(state.show_max);
    let count_label = format!("{:>5} ", state.color_count);
    let max_label = format!(" {max}");
    let bar_width = (area.width as usize).saturating_sub(count_label.len() + max_label.len());
    let (filled, empty) = slider_split(state.color_count, max, bar_width);

    let line = Line::from(vec![
        Span::styled(
            count_label,
            Style::default()
                .fg(theme.colors.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(icons.slider_full.repeat(filled), Style::default().fg(theme.colors.accent)),
        Span::styled(
            if bar_width > 0 { icons.slider_head } else { "" },
            Style::default().fg(theme.colors.accent),
        ),
        Span::styled(icons.slider_empty.repeat(empty), Style::default().fg(theme.colors.border)),
        Span::styled(max_label, Style::default().fg(theme.colors.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_buttons(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let toggle = |on: bool, icon: &str, label: &str| {
        let style = if on {
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.colors.fg_secondary)
        };
        Span::styled(format!("[{}] {icon} {label}", if on { "x" } else { " " }), style)
    };

    let generate = if state.generating {
        Span::styled(
            format!(
                "{} Generating... {:>3}%",
                LoadingSpinner::frame(state.tick),
                (state.progress * 100.0).round() as u32
            ),
            Style::default().fg(theme.colors.accent_alt),
        )
    } else {
        Span::styled(
            " Enter: Generate New Palette ",
            Style::default()
                .fg(theme.colors.bg_primary)
                .bg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        )
    };

    let save_style = if state.current.is_empty() {
        Style::default().fg(theme.colors.border)
    } else {
        Style::default().fg(theme.colors.fg_primary)
    };

    let line = Line::from(vec![
        toggle(state.show_max, icons.expand, "max (m)"),
        Span::raw("  "),
        toggle(state.show_opacity, icons.eye, "opacity (o)"),
        Span::raw("  "),
        Span::styled(format!("{} save (s)", icons.save), save_style),
        Span::raw("  "),
        Span::styled(format!("{} clear (c)", icons.trash), save_style),
        Span::raw("   "),
        generate,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Cells before and after the slider head for `value` in `1..=max`.
fn slider_split(value: u32, max: u32, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let track = width - 1;
    let ratio = if max > 1 {
        f64::from(value.clamp(1, max) - 1) / f64::from(max - 1)
    } else {
        1.0
    };
    let filled = ((track as f64) * ratio).round() as usize;
    (filled, track - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_split_ends() {
        assert_eq!(slider_split(1, 200, 11), (0, 10));
        assert_eq!(slider_split(200, 200, 11), (10, 0));
        assert_eq!(slider_split(5, 1, 11), (10, 0));
        assert_eq!(slider_split(5, 200, 0), (0, 0));
    }

    #[test]
    fn test_slider_split_middle() {
        let (filled, empty) = slider_split(101, 201, 21);
        assert_eq!((filled, empty), (10, 10));
    }
}
