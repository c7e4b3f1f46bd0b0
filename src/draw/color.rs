//! RGBA color type and the named drawing palette.

use crate::input::InputError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red: Color = "red".parse().unwrap();
/// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
/// let custom: Color = "#ff8000".parse().unwrap();
/// assert_eq!(custom.g, 128.0 / 255.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

impl FromStr for Color {
    type Err = InputError;

    /// Parses a palette name (case-insensitive) or a `#rrggbb` hex triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| InputError::UnknownColor(s.to_string()));
        }
        crate::util::name_to_color(trimmed).ok_or_else(|| InputError::UnknownColor(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// ============================================================================
// Palette
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color, the darker web green rather than pure lime
pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=165/255, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);

/// Predefined purple color (R=128/255, G=0.0, B=128/255)
pub const PURPLE: Color = Color::new(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color, also the default canvas background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color, the default pen color
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_names_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), RED);
        assert_eq!(" purple ".parse::<Color>().unwrap(), PURPLE);
        assert_eq!("BLACK".parse::<Color>().unwrap(), BLACK);
    }

    #[test]
    fn parses_hex_triples() {
        let color: Color = "#0000ff".parse().unwrap();
        assert_eq!(color, BLUE);
    }

    #[test]
    fn rejects_unknown_names_and_bad_hex() {
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(InputError::UnknownColor(name)) if name == "chartreuse"
        ));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }
}
