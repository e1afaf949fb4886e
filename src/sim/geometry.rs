//! Axis-aligned geometry for the play-field
//!
//! Screen coordinates: x grows to the right, y grows downward, so the ceiling
//! has a smaller y than the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle spanning `(x0, y0)` to `(x1, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Shift the rectangle by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.x0 += delta.x;
        self.x1 += delta.x;
        self.y0 += delta.y;
        self.y1 += delta.y;
    }

    /// True if the intersection of the two rectangles has positive area.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// Immutable field geometry for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    /// Bird positions below this line are a crash
    pub ground_y: f32,
    /// Bird positions above this line bounce back down
    pub ceiling_y: f32,
}

impl PlayField {
    /// Centre of the field, where the bird spawns
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_positive_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 15.0, 15.0)));
        // Shared edge only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 20.0)));
        // Disjoint
        assert!(!a.overlaps(&Rect::new(30.0, 30.0, 40.0, 40.0)));
        // Containment
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let mut r = Rect::new(485.0, 0.0, 570.0, 200.0);
        r.translate(Vec2::new(-2.6, 0.0));
        assert!((r.x0 - 482.4).abs() < 1e-4);
        assert!((r.width() - 85.0).abs() < 1e-4);
        assert_eq!(r.height(), 200.0);
    }

    #[test]
    fn test_field_center() {
        let field = PlayField {
            width: 485.0,
            height: 640.0,
            ground_y: 609.0,
            ceiling_y: 20.0,
        };
        assert_eq!(field.center(), Vec2::new(242.5, 320.0));
    }
}
