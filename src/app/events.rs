use crate::palette::{Palette, PaletteError};

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Generator(GeneratorEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum GeneratorEvent {
    /// `done` of `total` delay steps have elapsed.
    Progress { done: u32, total: u32 },
    Finished(Result<Palette, PaletteError>),
}
