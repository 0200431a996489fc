//! Random RGBA palettes and the session palette store.

pub mod error;
pub mod store;

pub use error::PaletteError;
pub use store::PaletteStore;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single RGBA color. Every channel lies in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Channels outside `[0.0, 1.0]` are clamped; NaN becomes 0.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Draw all four channels uniformly from `[0.0, 1.0]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.random_range(0.0..=1.0),
            green: rng.random_range(0.0..=1.0),
            blue: rng.random_range(0.0..=1.0),
            alpha: rng.random_range(0.0..=1.0),
        }
    }

    /// Same color with alpha maxed out.
    pub fn opaque(self) -> Self {
        Self { alpha: 1.0, ..self }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        ]
    }

    /// RGB bytes after compositing over black by alpha.
    pub fn over_black(self) -> [u8; 3] {
        [
            to_byte(self.red * self.alpha),
            to_byte(self.green * self.alpha),
            to_byte(self.blue * self.alpha),
        ]
    }

    /// `#RRGGBBAA`, or `#RRGGBB` when `with_alpha` is false.
    pub fn hex(self, with_alpha: bool) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if with_alpha {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}")
        }
    }

    pub fn channels(self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex(true))
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn to_byte(v: f64) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

/// Ordered, immutable sequence of colors produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Generate `count` random colors using the thread-local RNG.
pub fn generate(count: i64) -> Result<Palette, PaletteError> {
    generate_with(&mut rand::rng(), count)
}

/// Generate `count` random colors from `rng`.
///
/// Zero yields an empty palette; a negative count is rejected, and so is a
/// count whose colors cannot be allocated.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: i64) -> Result<Palette, PaletteError> {
    if count < 0 {
        return Err(PaletteError::InvalidArgument { count });
    }
    let n = usize::try_from(count).map_err(|_| PaletteError::TooLarge { count })?;
    let mut colors = Vec::new();
    colors
        .try_reserve_exact(n)
        .map_err(|_| PaletteError::TooLarge { count })?;
    colors.extend((0..n).map(|_| Color::random(&mut *rng)));
    Ok(Palette::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn in_unit(c: &Color) -> bool {
        c.channels().iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_generate_length_and_bounds() {
        for count in [1, 2, 5, 200, 1000] {
            let palette = generate(count).unwrap();
            assert_eq!(palette.len(), count as usize);
            assert!(palette.iter().all(in_unit));
        }
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let palette = generate(0).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_generate_negative_is_invalid() {
        assert_eq!(
            generate(-1),
            Err(PaletteError::InvalidArgument { count: -1 })
        );
    }

    #[test]
    fn test_generate_huge_count_is_an_error() {
        assert_eq!(
            generate(i64::MAX),
            Err(PaletteError::TooLarge { count: i64::MAX })
        );
    }

    #[test]
    fn test_generate_with_seed_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(7), 8).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(7), 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_generation_varies() {
        let hexes: HashSet<String> = (0..50)
            .map(|_| {
                generate(5)
                    .unwrap()
                    .iter()
                    .map(|c| c.hex(true))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        // 50 palettes of 5 colors colliding is astronomically unlikely.
        assert!(hexes.len() >= 49, "only {} distinct palettes", hexes.len());
    }

    #[test]
    fn test_channels_look_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let palette = generate_with(&mut rng, 5000).unwrap();
        for ch in 0..4 {
            let mean: f64 =
                palette.iter().map(|c| c.channels()[ch]).sum::<f64>() / palette.len() as f64;
            assert!((mean - 0.5).abs() < 0.03, "channel {ch} mean {mean}");
        }
    }

    #[test]
    fn test_hex_formatting() {
        let c = Color::new(1.0, 0.0, 0.5, 0.25);
        assert_eq!(c.hex(true), "#FF008040");
        assert_eq!(c.hex(false), "#FF0080");
        assert_eq!(c.to_string(), "#FF008040");
        assert_eq!(c.opaque().hex(true), "#FF0080FF");
    }

    #[test]
    fn test_new_clamps_channels() {
        let c = Color::new(2.0, -1.0, f64::NAN, 0.5);
        assert_eq!(c.channels(), [1.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_over_black() {
        let c = Color::new(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.over_black(), [128, 64, 0]);
        assert_eq!(c.opaque().over_black(), [255, 128, 0]);
    }

    #[test]
    fn test_palette_json_shape() {
        let palette = Palette::new(vec![Color::new(1.0, 0.0, 0.0, 1.0)]);
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"[{"red":1.0,"green":0.0,"blue":0.0,"alpha":1.0}]"#);
    }
}
