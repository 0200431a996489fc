//! Random color palette generator with a session palette store.
//!
//! The core API lives in [`palette`]: [`palette::generate`] draws random RGBA
//! colors and [`palette::PaletteStore`] keeps the palettes saved during a
//! session. The remaining modules make up the terminal front end.

pub mod app;
pub mod config;
pub mod input;
pub mod palette;
pub mod tui;

pub use palette::{Color, Palette, PaletteError, PaletteStore, generate, generate_with};
