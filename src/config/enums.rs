//! Configuration enum types.

use crate::draw::Color;
use crate::input::InputError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex triple
/// default_color = "red"
/// background = "#fafafa"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, white, red, green, blue, yellow, orange, purple, pink) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the name or RGB triple to a [`Color`].
    ///
    /// Names go through the palette (or hex parsing); RGB arrays are converted
    /// from 0-255 to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Result<Color, InputError> {
        match self {
            ColorSpec::Name(name) => name.parse(),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Name(name) => f.write_str(name),
            ColorSpec::Rgb([r, g, b]) => write!(f, "[{r}, {g}, {b}]"),
        }
    }
}
