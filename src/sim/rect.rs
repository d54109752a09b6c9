//! Axis-aligned rectangle geometry
//!
//! Everything on the playfield - blocks, paddle, ball bounding box - is an
//! axis-aligned rectangle anchored at its bottom-left corner.

use glam::Vec2;

/// Axis-aligned rectangle, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Top-right corner
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Closed-interval overlap test on both axes: touching edges count as
    /// overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x <= b_max.x
            && a_max.x >= other.min.x
            && self.min.y <= b_max.y
            && a_max.y >= other.min.y
    }
}
