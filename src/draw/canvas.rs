//! Canvas state: the ordered list of drawn primitives.

use super::color::{Color, WHITE};
use super::primitive::Primitive;

/// Fixed geometry and background of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Background fill, also the color the eraser paints with
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: WHITE,
        }
    }
}

/// Container for every primitive drawn in the current session.
///
/// Insertion order is paint order (first = bottom, last = top). The list only
/// grows by appending and only shrinks by dropping the last primitive or
/// dropping everything; there is no way to reorder or edit in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    primitives: Vec<Primitive>,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub const fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }

    /// Appends a primitive on top of everything drawn so far.
    pub fn push(&mut self, primitive: Primitive) -> &Primitive {
        self.primitives.push(primitive);
        &self.primitives[self.primitives.len() - 1]
    }

    /// Removes and returns the most recently drawn primitive, if any.
    pub fn undo(&mut self) -> Option<Primitive> {
        self.primitives.pop()
    }

    /// Removes all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Primitives in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
