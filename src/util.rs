//! Utility functions for color names and rectangle geometry.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to palette colors.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "yellow", "orange", "purple", "pink"
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "pink" => Some(PINK),
        _ => None,
    }
}

/// Maps a color back to its palette name for log output.
///
/// Returns "custom" for anything outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(&str, Color); 9] = [
        ("black", BLACK),
        ("white", WHITE),
        ("red", RED),
        ("green", GREEN),
        ("blue", BLUE),
        ("yellow", YELLOW),
        ("orange", ORANGE),
        ("purple", PURPLE),
        ("pink", PINK),
    ];

    NAMED
        .iter()
        .find(|(_, named)| {
            (named.r - color.r).abs() < 0.01
                && (named.g - color.g).abs() < 0.01
                && (named.b - color.b).abs() < 0.01
        })
        .map_or("custom", |(name, _)| *name)
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle used for primitive bounds and dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Returns `None` unless width and height are positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Overlapping area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        Self::from_min_max(
            self.x.max(other.x),
            self.y.max(other.y),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let (x, y) = (self.x.min(other.x), self.y.min(other.y));
        Rect {
            x,
            y,
            width: self.right().max(other.right()).saturating_sub(x),
            height: self.bottom().max(other.bottom()).saturating_sub(y),
        }
    }
}
