//! Help screen showing keybindings

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_content = vec![
        section_header("Palette", &theme),
        keybind("Enter / n", "Generate new palette", &theme),
        keybind("→ / l / +", "One more color", &theme),
        keybind("← / h / -", "One less color", &theme),
        keybind("] / [", "Ten more / less", &theme),
        keybind("m", "Toggle max range", &theme),
        keybind("o", "Toggle opacity", &theme),
        keybind("s", "Save palette", &theme),
        keybind("c / Del", "Clear palette", &theme),
        keybind("v", "View saved", &theme),
        keybind("j / k", "Scroll colors", &theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Saved", &theme),
        keybind("j / k", "Move down / up", &theme),
        keybind("g / G", "Go to top / bottom", &theme),
        keybind("Space", "Mark / unmark", &theme),
        keybind("d / Del", "Delete marked or selected", &theme),
        keybind("Backspace", "Back to palette", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("Tab", "Next screen", &theme),
        keybind("1-3", "Go to screen", &theme),
        keybind("?", "Keybinds", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.colors.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.colors.fg_primary)),
    ])
}
