//! Theme configuration - Monochrome chrome around colorful swatches

pub mod colors;
pub mod icons;

pub use colors::UiColors;
pub use icons::{Icons, LoadingSpinner};

use ratatui::style::Color as TermColor;
use ratatui::symbols::border;

use crate::palette::Color;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: UiColors,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            colors: UiColors::MONO,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}

/// Terminal color for a swatch. Terminals have no alpha, so opacity is shown
/// by compositing over black.
pub fn swatch_color(color: Color, show_opacity: bool) -> TermColor {
    let [r, g, b] = if show_opacity {
        color.over_black()
    } else {
        color.opaque().over_black()
    };
    TermColor::Rgb(r, g, b)
}

/// Black or white, whichever reads better on top of `bg`.
pub fn label_color(bg: TermColor) -> TermColor {
    match bg {
        TermColor::Rgb(r, g, b) => {
            let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            if luma > 140.0 {
                TermColor::Rgb(0, 0, 0)
            } else {
                TermColor::Rgb(255, 255, 255)
            }
        }
        _ => TermColor::Rgb(255, 255, 255),
    }
}
