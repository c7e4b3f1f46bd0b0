//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::PenType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing surface settings.
///
/// The canvas has a fixed size for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color; the eraser paints with this color
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Tool defaults applied at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - a palette name, `#rrggbb`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush size in pixels (valid range: 1 - 256)
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Initial pen type (line, round, square, arrow, diamond)
    #[serde(default)]
    pub default_pen_type: PenType,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
            default_pen_type: PenType::default(),
        }
    }
}

/// Snapshot export settings.
///
/// Used when an export is requested without an explicit destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory generated snapshot names are placed in
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name template (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Format for generated snapshot names (png, eps, ps, svg, pdf)
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filename_template: default_filename_template(),
            format: ExportFormat::default(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

pub(super) fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_size() -> u32 {
    2
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

pub(super) fn default_filename_template() -> String {
    "snapshot_%Y-%m-%d_%H%M%S".to_string()
}
