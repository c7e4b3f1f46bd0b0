//! Input handling and tool state.
//!
//! This module turns pointer events, setting changes and commands into
//! drawing primitives. The [`ToolController`] owns the current tool, color,
//! size and pen type; the [`DrawingEngine`] owns the canvas and the active
//! stroke; [`Sketchpad`] routes each [`InputEvent`] to one of them.

pub mod engine;
pub mod error;
pub mod events;
pub mod settings;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use engine::{DrawingEngine, StrokeSession, synthesize};
pub use error::{EventError, InputError};
pub use events::InputEvent;
pub use settings::{DEFAULT_SIZE, ToolController, ToolSettings};
pub use state::{EventOutcome, Sketchpad};
pub use tool::{PenType, Tool};
