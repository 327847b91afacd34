//! Axis-aligned bounding boxes.
//!
//! Every overlap test in the simulation goes through this one type so the
//! collision rules stay uniform: strict inequalities, no epsilon. Edges that
//! merely touch do not overlap.

use serde::{Serialize, Deserialize};

/// A rectangle in world space, positioned by its top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Strict AABB overlap test. Boxes that only share an edge do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when `other` lies entirely inside this box (edges may coincide)
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Aabb::new(100.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contains() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 50.0);
        let inner = Aabb::new(10.0, 10.0, 20.0, 20.0);
        let straddling = Aabb::new(90.0, 10.0, 20.0, 20.0);
        assert!(outer.contains_aabb(&inner));
        assert!(outer.contains_aabb(&outer));
        assert!(!outer.contains_aabb(&straddling));
    }
}
