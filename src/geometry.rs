use serde::{Deserialize, Serialize};

/// Axis-aligned placed rectangle, origin at the lower-left corner.
///
/// This is the primitive the placement engine reasons about: every
/// already-placed rectangle (including the zero-height floor sentinel)
/// is one of these, and every acceptance check is phrased in terms of
/// `overlap_area` and `is_within_vertical_span`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The corner opposite the origin, `(x + width, y + height)`.
    /// Named for screen coordinates, where y grows downward.
    pub fn lower_right(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height)
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Whether this rectangle occupies any part of the horizontal band
    /// between `low` and `high` (half-open on both sides, so a rectangle
    /// whose top sits exactly at `low` does not count — nor does the
    /// zero-height floor).
    pub fn is_within_vertical_span(&self, low: f64, high: f64) -> bool {
        self.y < high && low < self.top()
    }

    /// Area of the intersection with `other`; 0.0 when disjoint.
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.top().min(other.top()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}
