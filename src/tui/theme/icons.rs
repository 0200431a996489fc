//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    // Navigation
    pub generate: &'static str,
    pub saved: &'static str,
    pub help: &'static str,

    // Actions
    pub trash: &'static str,
    pub save: &'static str,
    pub eye: &'static str,
    pub expand: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
    pub marked: &'static str,

    // Slider
    pub slider_full: &'static str,
    pub slider_empty: &'static str,
    pub slider_head: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            generate: "\u{f0d0}",       // nf-fa-magic
            saved: "\u{f1fc}",          // nf-fa-paint_brush
            help: "\u{f059}",           // nf-fa-question_circle

            trash: "\u{f1f8}",          // nf-fa-trash
            save: "\u{f0c7}",           // nf-fa-floppy_o
            eye: "\u{f06e}",            // nf-fa-eye
            expand: "\u{f065}",         // nf-fa-expand

            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times

            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",
            marked: "\u{f14a}",         // nf-fa-check_square

            slider_full: "━",
            slider_empty: "─",
            slider_head: "●",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
