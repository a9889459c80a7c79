//! Bullets

use super::{Body, FrameContext};
use arcade_engine::foundation::math::{Point2, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{Color, DrawContext};

const SIZE: f32 = 2.0;
const BOUNDS_IMMERSION: f32 = 0.5;

/// A shot fired by the player or a UFO.
///
/// Bullets do not expire on their own; whoever spawns one schedules its
/// expiry.
#[derive(Debug, Clone)]
pub struct Bullet {
    body: Body,
    velocity: Vec2,
    from_player: bool,
}

impl Bullet {
    /// Bullet centered on `origin`
    pub fn new(origin: Point2, velocity: Vec2, from_player: bool) -> Self {
        Self {
            body: Body::centered(origin, Vec2::new(SIZE, SIZE), None),
            velocity,
            from_player,
        }
    }

    /// Fired by the player rather than a UFO
    pub fn is_from_player(&self) -> bool {
        self.from_player
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    pub(crate) fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.body.bounds.offset(self.velocity * ctx.dt);
        self.body.bounds.wrap_within(ctx.screen, BOUNDS_IMMERSION);
    }

    pub(crate) fn draw(&self, frame: &mut dyn DrawContext) {
        frame.fill_rectangle(self.body.bounds, Color::WHITE);
    }
}

impl RadiusCollider for Bullet {
    fn collision_radius(&self) -> f32 {
        SIZE * 0.5
    }

    fn collision_origin(&self) -> Point2 {
        self.body.bounds.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::Harness;
    use approx::assert_relative_eq;

    #[test]
    fn test_bullet_wraps_past_right_edge() {
        let mut harness = Harness::new();
        let mut bullet = Bullet::new(Point2::new(1199.0, 100.0), Vec2::new(500.0, 0.0), true);
        bullet.update(&mut harness.ctx(0.1));
        assert_relative_eq!(bullet.body().bounds.position.x, -1.0);
        assert_relative_eq!(bullet.body().bounds.position.y, 99.0);
    }
}
