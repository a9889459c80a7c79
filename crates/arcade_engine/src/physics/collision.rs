//! Radius colliders
//!
//! Two colliders overlap when the distance between their origins is strictly
//! less than the sum of their radii. Touching circles do not collide.

use crate::foundation::math::Point2;

/// Capability of anything that collides as a circle
pub trait RadiusCollider {
    /// Radius of the collision circle
    fn collision_radius(&self) -> f32;

    /// Center of the collision circle
    fn collision_origin(&self) -> Point2;

    /// Whether this collider overlaps `other`
    fn collides_with(&self, other: &dyn RadiusCollider) -> bool {
        let a = self.bounding_circle();
        a.intersects(&other.bounding_circle())
    }

    /// Snapshot of the collision circle
    fn bounding_circle(&self) -> BoundingCircle {
        BoundingCircle::new(self.collision_origin(), self.collision_radius())
    }
}

/// Symmetric overlap test between two colliders
pub fn overlaps(a: &dyn RadiusCollider, b: &dyn RadiusCollider) -> bool {
    a.collides_with(b)
}

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// Center in screen space
    pub center: Point2,
    /// Radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle overlaps another
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }

    /// Whether `point` lies strictly inside the circle
    pub fn contains_point(&self, point: Point2) -> bool {
        (point - self.center).magnitude_squared() < self.radius * self.radius
    }
}

impl RadiusCollider for BoundingCircle {
    fn collision_radius(&self) -> f32 {
        self.radius
    }

    fn collision_origin(&self) -> Point2 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn circle(x: f32, y: f32, r: f32) -> BoundingCircle {
        BoundingCircle::new(Point2::new(x, y), r)
    }

    #[test]
    fn test_touching_circles_do_not_overlap() {
        // 3-4-5 triangle keeps the distance exact in f32
        let a = circle(0.0, 0.0, 2.0);
        let b = circle(3.0, 4.0, 3.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_slightly_closer_circles_overlap() {
        let a = circle(0.0, 0.0, 2.0);
        let b = circle(3.0, 3.9, 3.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_far_circles_do_not_overlap() {
        assert!(!overlaps(&circle(0.0, 0.0, 10.0), &circle(100.0, 0.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = circle(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(0.0..50.0),
            );
            let b = circle(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(0.0..50.0),
            );
            assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }

    #[test]
    fn test_contains_point() {
        let c = circle(10.0, 10.0, 5.0);
        assert!(c.contains_point(Point2::new(12.0, 12.0)));
        assert!(!c.contains_point(Point2::new(15.0, 10.0)));
    }
}
