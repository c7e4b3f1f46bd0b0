//! Primitive definitions for drawn strokes and stamps.

use super::color::Color;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// One drawn shape on the canvas. Immutable once created.
///
/// Every drag sample after the first produces exactly one primitive; the
/// variant depends on the pen type that was active for that sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Straight segment between two consecutive drag samples (`line` pen type)
    LineSegment {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: u32,
    },
    /// Filled and outlined ellipse inscribed in the box (`round` pen type)
    FilledOval {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// Filled and outlined axis-aligned box (`square` pen type)
    FilledRect {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// Filled and outlined polygon (`arrow` and `diamond` pen types)
    FilledPolygon {
        /// Vertices in drawing order; the path is closed implicitly
        points: Vec<(i32, i32)>,
        color: Color,
    },
}

impl Primitive {
    /// Color the primitive is painted with.
    pub fn color(&self) -> Color {
        match self {
            Primitive::LineSegment { color, .. }
            | Primitive::FilledOval { color, .. }
            | Primitive::FilledRect { color, .. }
            | Primitive::FilledPolygon { color, .. } => *color,
        }
    }

    /// Returns the axis-aligned bounding box for this primitive, expanded to cover its outline.
    ///
    /// Returns `None` only for degenerate data (a polygon without vertices).
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Primitive::LineSegment {
                x1,
                y1,
                x2,
                y2,
                width,
                ..
            } => bounds_with_padding(&[(*x1, *y1), (*x2, *y2)], stroke_padding(*width as f64)),
            Primitive::FilledOval { x1, y1, x2, y2, .. }
            | Primitive::FilledRect { x1, y1, x2, y2, .. } => {
                bounds_with_padding(&[(*x1, *y1), (*x2, *y2)], OUTLINE_PADDING)
            }
            Primitive::FilledPolygon { points, .. } => bounds_with_padding(points, OUTLINE_PADDING),
        }
    }
}

/// Filled stamps carry a 1px outline, half of which lies outside the geometry.
const OUTLINE_PADDING: i32 = 1;

fn stroke_padding(width: f64) -> i32 {
    let padding = (width / 2.0).ceil() as i32;
    padding.max(1)
}

fn bounds_with_padding(points: &[(i32, i32)], padding: i32) -> Option<Rect> {
    let (&(first_x, first_y), rest) = points.split_first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first_x, first_x, first_y, first_y);

    for &(x, y) in rest {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    Rect::from_min_max(
        min_x.saturating_sub(padding),
        min_y.saturating_sub(padding),
        max_x.saturating_add(padding),
        max_y.saturating_add(padding),
    )
}
