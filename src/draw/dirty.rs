//! Damage tracking between renders.
//!
//! The session records which parts of the canvas changed since a renderer last
//! drew it: the bounds of appended or undone primitives, or the whole canvas
//! after a clear. Regions are clipped to the canvas and overlapping ones merged.

use super::Primitive;
use crate::util::Rect;

#[derive(Debug, Default)]
pub struct DirtyTracker {
    pending: Vec<Rect>,
    whole_canvas: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the whole canvas; individual regions become redundant.
    pub fn mark_full(&mut self) {
        self.whole_canvas = true;
        self.pending.clear();
    }

    /// Records one changed rectangle, merging it into any region it overlaps.
    ///
    /// Pending regions never overlap each other.
    pub fn mark_rect(&mut self, rect: Rect) {
        if self.whole_canvas || !rect.is_valid() {
            return;
        }

        let mut merged = rect;
        // A grown union can reach regions that were kept earlier in the pass.
        loop {
            let before = self.pending.len();
            self.pending.retain(|existing| {
                if existing.intersection(&merged).is_some() {
                    merged = merged.union(existing);
                    false
                } else {
                    true
                }
            });
            if self.pending.len() == before {
                break;
            }
        }
        self.pending.push(merged);
    }

    /// Records the area a primitive covers.
    pub fn mark_primitive(&mut self, primitive: &Primitive) {
        match primitive.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.whole_canvas || !self.pending.is_empty()
    }

    /// Drains the recorded regions, clipped to a `width` x `height` canvas.
    ///
    /// Regions entirely off the canvas are dropped.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        let Some(canvas) = Rect::new(0, 0, width, height) else {
            self.mark_clean();
            return Vec::new();
        };

        if std::mem::take(&mut self.whole_canvas) {
            self.pending.clear();
            return vec![canvas];
        }

        self.pending
            .drain(..)
            .filter_map(|rect| rect.intersection(&canvas))
            .collect()
    }

    fn mark_clean(&mut self) {
        self.whole_canvas = false;
        self.pending.clear();
    }
}
