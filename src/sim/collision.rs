//! Axis-aligned bounding boxes and the overlap predicate
//!
//! The whole collision system: a pure separating-axis test between the
//! player's (shrunk) box and each live obstacle's box. Stateless; the tick
//! decides what a hit means.

use glam::Vec2;

/// An axis-aligned box stored as min/max corners. Y grows downward, so
/// `min.y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True iff the boxes overlap on both axes. Edges count: two boxes that
    /// exactly touch are overlapping (closed intervals).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[test]
    fn test_disjoint_on_x() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_disjoint_on_y() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(0.0, 30.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_overlapping() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));

        let c = aabb(0.0, 10.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_containment() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(b.min, Vec2::new(40.0, 45.0));
        assert_eq!(b.max, Vec2::new(60.0, 55.0));
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 10.0);
    }
}
