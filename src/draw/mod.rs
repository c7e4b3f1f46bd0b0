//! Drawing primitives, canvas state and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the named palette
//! - [`Primitive`]: the shapes a drag produces (segments and stamps)
//! - [`Canvas`]: ordered primitive list with undo/clear
//! - [`DirtyTracker`]: damage regions for incremental redraws
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod dirty;
pub mod primitive;
pub mod render;

pub use canvas::{Canvas, CanvasSettings};
pub use color::Color;
pub use dirty::DirtyTracker;
pub use primitive::Primitive;
pub use render::{render_background, render_canvas, render_primitive, render_primitives};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
