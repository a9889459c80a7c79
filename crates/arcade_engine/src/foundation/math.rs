//! Math utilities and types
//!
//! Provides the 2D math types used by entities, colliders and the draw context.

pub use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangle in screen space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub position: Point2,

    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(position: Point2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Create a rectangle of `size` centered on `center`
    pub fn centered_at(center: Point2, size: Vec2) -> Self {
        Self {
            position: center - size * 0.5,
            size,
        }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point2 {
        self.position + self.size * 0.5
    }

    /// Move the rectangle by `delta`
    pub fn offset(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: Point2) {
        self.position = center - self.size * 0.5;
    }

    /// Wrap the rectangle around the screen edges.
    ///
    /// `immersion` is the fraction of the rectangle allowed past an edge
    /// before it reappears on the opposite side.
    pub fn wrap_within(&mut self, screen: Vec2, immersion: f32) {
        let w = self.size.x * immersion;
        let h = self.size.y * immersion;
        let sw = screen.x - w;
        let sh = screen.y - h;

        if self.position.x < -w {
            self.position.x = sw;
        } else if self.position.x > sw {
            self.position.x = -w;
        }

        if self.position.y < -h {
            self.position.y = sh;
        } else if self.position.y > sh {
            self.position.y = -h;
        }
    }
}

/// Unit vector for a heading angle in radians.
///
/// Angles grow counter-clockwise on screen, so the y component is negated.
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

/// Normalize an angle to `[0, 2π)`
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
