//! Drawing tool and pen type selection.

use super::InputError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The tool only decides which color a drag paints with; the shape comes from
/// the [`PenType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paints with the selected color (default)
    #[default]
    Pen,
    /// Paints with the canvas background color
    Eraser,
}

/// Shape stamped along the drag path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PenType {
    /// Continuous segments joining consecutive samples (default)
    #[default]
    Line,
    /// Filled circle centered on each sample
    Round,
    /// Filled square centered on each sample
    Square,
    /// Filled right triangle anchored on each sample
    Arrow,
    /// Filled rhombus centered on each sample
    Diamond,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
        }
    }
}

impl PenType {
    /// All pen types in menu order.
    pub const ALL: [PenType; 5] = [
        PenType::Line,
        PenType::Round,
        PenType::Square,
        PenType::Arrow,
        PenType::Diamond,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PenType::Line => "line",
            PenType::Round => "round",
            PenType::Square => "square",
            PenType::Arrow => "arrow",
            PenType::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            _ => Err(InputError::UnknownTool(s.to_string())),
        }
    }
}

impl FromStr for PenType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PenType::ALL
            .into_iter()
            .find(|pen_type| pen_type.as_str() == wanted)
            .ok_or_else(|| InputError::UnknownPenType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_types_parse_from_their_names() {
        for pen_type in PenType::ALL {
            assert_eq!(pen_type.to_string().parse::<PenType>().unwrap(), pen_type);
        }
        assert_eq!("Diamond".parse::<PenType>().unwrap(), PenType::Diamond);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "spray".parse::<PenType>(),
            Err(InputError::UnknownPenType(name)) if name == "spray"
        ));
        assert!(matches!(
            "brush".parse::<Tool>(),
            Err(InputError::UnknownTool(name)) if name == "brush"
        ));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Tool::Eraser).unwrap(), "\"eraser\"");
        let pen_type: PenType = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(pen_type, PenType::Square);
        assert!(serde_json::from_str::<Tool>("\"lasso\"").is_err());
    }
}
