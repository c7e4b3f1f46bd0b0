//! Configuration file support for sketchpad.
//!
//! Configuration is optional: without a file every setting takes the built-in
//! default (800×600 white canvas, black pen of size 2 drawing lines, EPS
//! snapshots in the working directory). A TOML file is only read when a path is
//! passed explicitly.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::{BLACK, CanvasSettings, WHITE};
use crate::export::ExportSettings;
use crate::input::ToolSettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;
use std::path::Path;

const DIMENSION_RANGE: RangeInclusive<u32> = 1..=16384;
const SIZE_RANGE: RangeInclusive<u32> = 1..=256;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [drawing]
/// default_color = "blue"
/// default_size = 4
/// default_pen_type = "round"
///
/// [export]
/// directory = "snapshots"
/// filename_template = "drawing_%H%M%S"
/// format = "png"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Config {
    /// Canvas geometry and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool defaults (color, size, pen type)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Snapshot naming and format
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text, then validates and clamps it.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced by the nearest valid value (or the default)
    /// and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `drawing.default_size`: 1 - 256
    /// - colors must resolve to a palette name, hex triple or RGB array
    /// - `export.filename_template` must not be empty
    fn validate_and_clamp(&mut self) {
        clamp_in_place("canvas.width", &mut self.canvas.width, DIMENSION_RANGE);
        clamp_in_place("canvas.height", &mut self.canvas.height, DIMENSION_RANGE);
        clamp_in_place("drawing.default_size", &mut self.drawing.default_size, SIZE_RANGE);

        if let Err(err) = self.canvas.background.to_color() {
            warn!("Invalid canvas.background: {err}, falling back to white");
            self.canvas.background = types::default_background();
        }

        if let Err(err) = self.drawing.default_color.to_color() {
            warn!("Invalid drawing.default_color: {err}, falling back to black");
            self.drawing.default_color = types::default_color();
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export.filename_template, using the default template");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Canvas geometry and background as used by the renderer.
    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color().unwrap_or(WHITE),
        }
    }

    /// Startup tool settings.
    pub fn tool_settings(&self) -> ToolSettings {
        let size = NonZeroU32::new(self.drawing.default_size).unwrap_or(crate::input::DEFAULT_SIZE);
        ToolSettings::new(
            self.drawing.default_color.to_color().unwrap_or(BLACK),
            size,
            self.drawing.default_pen_type,
        )
    }

    /// Settings for snapshots exported without an explicit path.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            directory: self.export.directory.clone(),
            filename_template: self.export.filename_template.clone(),
            format: self.export.format,
        }
    }
}

fn clamp_in_place(name: &str, value: &mut u32, range: RangeInclusive<u32>) {
    if !range.contains(value) {
        let clamped = (*value).clamp(*range.start(), *range.end());
        warn!(
            "Invalid {name} {value}, clamping to {}-{} range",
            range.start(),
            range.end()
        );
        *value = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Color};
    use crate::export::ExportFormat;
    use crate::input::{PenType, Tool};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let canvas = config.canvas_settings();
        assert_eq!((canvas.width, canvas.height), (800, 600));
        assert_eq!(canvas.background, WHITE);

        let tools = config.tool_settings();
        assert_eq!(tools.tool(), Tool::Pen);
        assert_eq!(tools.color(), BLACK);
        assert_eq!(tools.size().get(), 2);
        assert_eq!(tools.pen_type(), PenType::Line);

        assert_eq!(config.export_settings().format, ExportFormat::Eps);
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml_str(
            r#"
            [canvas]
            width = 320
            height = 200
            background = [16, 16, 16]

            [drawing]
            default_color = "blue"
            default_size = 6
            default_pen_type = "diamond"

            [export]
            directory = "out"
            filename_template = "drawing"
            format = "svg"
            "#,
        )
        .unwrap();

        let canvas = config.canvas_settings();
        assert_eq!((canvas.width, canvas.height), (320, 200));
        assert_eq!(canvas.background, Color::from_rgb8(16, 16, 16));

        let tools = config.tool_settings();
        assert_eq!(tools.color(), BLUE);
        assert_eq!(tools.size().get(), 6);
        assert_eq!(tools.pen_type(), PenType::Diamond);

        let export = config.export_settings();
        assert_eq!(export.directory, Path::new("out"));
        assert_eq!(export.filename_template, "drawing");
        assert_eq!(export.format, ExportFormat::Svg);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [canvas]
            width = 0
            height = 100000
            background = "no-such-color"

            [drawing]
            default_size = 0
            default_color = "mauve"

            [export]
            filename_template = "  "
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 16384);
        assert_eq!(config.canvas.background, ColorSpec::from("white"));
        assert_eq!(config.drawing.default_size, 1);
        assert_eq!(config.drawing.default_color, ColorSpec::from("black"));
        assert_eq!(
            config.export.filename_template,
            types::default_filename_template()
        );
    }

    #[test]
    fn unknown_pen_type_is_a_parse_error() {
        let err = Config::from_toml_str("[drawing]\ndefault_pen_type = \"spray\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn schema_lists_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "drawing", "export"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
