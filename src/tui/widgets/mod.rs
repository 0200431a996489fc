pub mod controls;
pub mod help;
pub mod root;
pub mod saved;
pub mod sidebar;
pub mod swatches;

/// Left/right one-cell padding inside a bordered block.
pub(crate) fn padded(area: ratatui::layout::Rect) -> ratatui::layout::Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area)[1]
}
