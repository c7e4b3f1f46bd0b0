//! Drawing engine: turns pointer drags into primitives.

use super::settings::ToolSettings;
use super::tool::PenType;
use crate::draw::{Canvas, Primitive};

/// Per-drag state. Exists only to remember the previous sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeSession {
    last_point: Option<(i32, i32)>,
}

impl StrokeSession {
    pub fn last_point(&self) -> Option<(i32, i32)> {
        self.last_point
    }
}

/// Owns the canvas and samples drags into it.
///
/// The first sample of every drag only sets the anchor; each later sample
/// appends exactly one primitive built from the settings passed with it.
#[derive(Debug, Default)]
pub struct DrawingEngine {
    canvas: Canvas,
    stroke: StrokeSession,
}

impl DrawingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down. Drops any anchor left from a previous drag.
    pub fn on_drag_start(&mut self) {
        self.stroke.last_point = None;
    }

    /// Pointer moved while down.
    ///
    /// Returns the appended primitive, or `None` for the anchoring sample.
    pub fn on_drag_sample(&mut self, x: i32, y: i32, settings: &ToolSettings) -> Option<&Primitive> {
        let previous = self.stroke.last_point.replace((x, y))?;
        let primitive = synthesize(previous, (x, y), settings);
        Some(self.canvas.push(primitive))
    }

    /// Pointer released. Safe to call with no drag in progress.
    pub fn on_drag_end(&mut self) {
        self.stroke.last_point = None;
    }

    /// Whether a drag anchor is currently set.
    pub fn is_dragging(&self) -> bool {
        self.stroke.last_point.is_some()
    }

    pub fn stroke(&self) -> StrokeSession {
        self.stroke
    }

    /// Removes every primitive.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Removes the most recent primitive; does nothing on an empty canvas.
    pub fn undo(&mut self) -> Option<Primitive> {
        self.canvas.undo()
    }

    /// Primitives in paint order, for rendering or export.
    pub fn snapshot(&self) -> &[Primitive] {
        self.canvas.primitives()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Builds the primitive for one sample.
///
/// Only `line` uses the previous sample; the stamps are centered on the
/// current one.
pub fn synthesize(from: (i32, i32), to: (i32, i32), settings: &ToolSettings) -> Primitive {
    let color = settings.color();
    let size = settings.size().get();
    let (x, y) = to;
    let StampBox {
        left,
        top,
        right,
        bottom,
    } = StampBox::around(to, size);

    match settings.pen_type() {
        PenType::Line => Primitive::LineSegment {
            x1: from.0,
            y1: from.1,
            x2: x,
            y2: y,
            color,
            width: size,
        },
        PenType::Round => Primitive::FilledOval {
            x1: left,
            y1: top,
            x2: right,
            y2: bottom,
            color,
        },
        PenType::Square => Primitive::FilledRect {
            x1: left,
            y1: top,
            x2: right,
            y2: bottom,
            color,
        },
        PenType::Arrow => Primitive::FilledPolygon {
            points: vec![(left, top), (left, bottom), (x, bottom)],
            color,
        },
        PenType::Diamond => Primitive::FilledPolygon {
            points: vec![(left, y), (x, top), (right, y), (x, bottom)],
            color,
        },
    }
}

/// Box reaching `size` pixels from a sample in every direction.
struct StampBox {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl StampBox {
    fn around((x, y): (i32, i32), size: u32) -> Self {
        let s = i32::try_from(size).unwrap_or(i32::MAX);
        Self {
            left: x.saturating_sub(s),
            top: y.saturating_sub(s),
            right: x.saturating_add(s),
            bottom: y.saturating_add(s),
        }
    }
}
