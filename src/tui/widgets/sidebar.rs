use crate::app::state::{AppState, Screen};
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border))
        .title(" Menu ")
        .title_style(Style::default().fg(theme.colors.accent));

    let items: Vec<ListItem> = Screen::ALL
        .iter()
        .map(|&screen| {
            let (icon, label) = match screen {
                Screen::Generator => (icons.generate, "Palette"),
                Screen::Saved => (icons.saved, "Saved"),
                Screen::Help => (icons.help, "Keybinds"),
            };
            let is_selected = screen == state.screen;

            let style = if is_selected {
                Style::default()
                    .fg(theme.colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.colors.fg_primary)
            };
            let icon_style = if is_selected {
                Style::default().fg(theme.colors.accent)
            } else {
                Style::default().fg(theme.colors.fg_secondary)
            };
            let prefix = if is_selected { icons.selected } else { icons.unselected };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, icon_style),
                Span::raw(" "),
                Span::styled(icon, icon_style),
                Span::raw(" "),
                Span::styled(label, style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.screen.index()));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.colors.bg_primary)
                .bg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
}
