//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen, ToastKind};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{controls, help, saved, sidebar, swatches};

/// Main layout structure:
/// ┌──────────┬─────────────────────────────────────────┐
/// │  Menu    │           Main Content                  │
/// │          │     (Palette / Saved / Keybinds)        │
/// │ Palette  │                                         │
/// │ Saved    │                                         │
/// │ Keybinds │                                         │
/// ├──────────┴─────────────────────────────────────────┤
/// │ count slider · toggles · generate                  │
/// └────────────────────────────────────────────────────┘
///  status / toast
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Sidebar + content
            Constraint::Length(4), // Controls
            Constraint::Length(1), // Status line
        ])
        .split(root);

    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(30)])
        .split(rows[0]);

    sidebar::render(frame, state, top_cols[0]);
    render_main_content(frame, state, top_cols[1]);
    controls::render(frame, cfg, state, rows[1]);
    render_status_line(frame, state, rows[2]);
}

fn render_main_content(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = match state.screen {
        Screen::Generator if state.current.is_empty() => format!(" {} Palette ", icons.generate),
        Screen::Generator => format!(" {} Palette · {} ", icons.generate, state.current.len()),
        Screen::Saved => format!(" {} Saved · {} ", icons.saved, state.store.len()),
        Screen::Help => format!(" {} Keybinds ", icons.help),
    };

    let main = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .title(title)
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = main.inner(area);
    frame.render_widget(main, area);

    match state.screen {
        Screen::Generator => swatches::render(frame, state, inner),
        Screen::Saved => saved::render(frame, state, inner),
        Screen::Help => help::render(frame, inner),
    }
}

fn render_status_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let line = match &state.toast {
        Some(toast) => {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.colors.success),
                ToastKind::Error => (icons.error, theme.colors.error),
            };
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(
                    toast.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            format!(" {}", state.status),
            Style::default().fg(theme.colors.fg_secondary),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Screen;
    use crate::palette::generate;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(state: &mut AppState) -> String {
        render_sized(state, 100, 30)
    }

    fn render_sized(state: &mut AppState, width: u16, height: u16) -> String {
        let cfg = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, &cfg, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_palette_shows_instructions() {
        let mut state = AppState::new(&Config::default());
        let text = rendered_text(&mut state);
        assert!(text.contains("How to use"));
        assert!(text.contains("Generate New Palette"));
    }

    #[test]
    fn test_renders_each_screen() {
        let mut state = AppState::new(&Config::default());
        state.current = generate(12).unwrap();
        state.store.save(state.current.clone());

        let text = rendered_text(&mut state);
        assert!(text.contains("12 colors"));
        assert!(text.contains("saved"));

        state.screen = Screen::Saved;
        assert!(rendered_text(&mut state).contains("Saved · 1"));

        state.screen = Screen::Help;
        assert!(rendered_text(&mut state).contains("Mark / unmark"));
    }

    #[test]
    fn test_generating_shows_progress() {
        let mut state = AppState::new(&Config::default());
        assert!(state.begin_generation());
        state.set_progress(1, 2);
        let text = rendered_text(&mut state);
        assert!(text.contains("Generating..."));
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_short_terminal_keeps_saved_cursor_visible() {
        let mut state = AppState::new(&Config::default());
        for _ in 0..20 {
            state.store.save(generate(3).unwrap());
        }
        state.screen = Screen::Saved;
        state.saved_list.selected = 15;

        // 14 rows leave 6 list rows after controls, status, borders and hints.
        render_sized(&mut state, 100, 14);
        assert_eq!(state.saved_list.viewport_height, 6);
        assert_eq!(state.saved_list.scroll_offset, 10);
        assert!(render_sized(&mut state, 100, 14).contains("  16  "));
    }
}
