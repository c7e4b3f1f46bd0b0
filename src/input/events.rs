//! Events delivered to the drawing core by a UI shell (or a replay script).

use super::tool::{PenType, Tool};
use crate::config::ColorSpec;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// One pointer event, setting change or command, in dispatch order.
///
/// Serialized with an `event` tag so a recorded stream reads as
/// `{"event": "drag_sample", "x": 10, "y": 12}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    DragStart,
    /// Pointer moved while the button is held (canvas-local pixels)
    DragSample { x: i32, y: i32 },
    /// Primary button released
    DragEnd,
    /// Pen or eraser picked from the tool panel
    ToolSelected { tool: Tool },
    /// Color picked from the palette (name, `#rrggbb` or `[r, g, b]`)
    ColorSelected { color: ColorSpec },
    /// Brush size picked; zero is rejected while parsing
    SizeSelected { size: NonZeroU32 },
    /// Pen type picked
    PenTypeSelected { pen_type: PenType },
    /// Remove everything drawn so far
    Clear,
    /// Remove the most recent primitive
    Undo,
    /// Write the canvas to a file; a name is generated when `path` is absent
    ExportSnapshot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
}

impl InputEvent {
    /// Parses a recorded event stream (a JSON array of events).
    pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, serde_json::Error> {
        serde_json::from_str(script)
    }
}
