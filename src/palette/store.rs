use super::{Palette, PaletteError};
use std::collections::BTreeSet;

/// Saved palettes for the current session, in save order.
#[derive(Debug, Clone, Default)]
pub struct PaletteStore {
    palettes: Vec<Palette>,
}

impl PaletteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a palette. Empty palettes are ignored; returns whether it was stored.
    pub fn save(&mut self, palette: Palette) -> bool {
        if palette.is_empty() {
            return false;
        }
        self.palettes.push(palette);
        true
    }

    /// All saved palettes in save order.
    pub fn list(&self) -> &[Palette] {
        &self.palettes
    }

    /// Remove the palettes at `indices`.
    ///
    /// Either every index is valid and all are removed, or nothing changes.
    pub fn delete<I>(&mut self, indices: I) -> Result<(), PaletteError>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        let len = self.palettes.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(PaletteError::OutOfRange { index, len });
        }

        let mut position = 0;
        self.palettes.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        Ok(())
    }

    /// Whether an identical palette has already been saved.
    pub fn contains(&self, palette: &Palette) -> bool {
        self.palettes.iter().any(|p| p == palette)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
