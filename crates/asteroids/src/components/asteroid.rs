//! Asteroids
//!
//! Tier 3 is the biggest. A hit asteroid splits into two of the next tier
//! down, heading off at right angles to the parent; tier 1 just vanishes.

use super::{Body, FrameContext};
use crate::error::GameError;
use arcade_engine::foundation::math::{heading_vector, wrap_angle, Point2, Rect, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{Color, DrawContext};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::Range;

/// Biggest asteroid tier
pub const MAX_TIER: u8 = 3;

const RECT_PER_TIER: f32 = 32.0;
const RADIUS_PER_TIER: f32 = 16.0;
const BOUNDS_IMMERSION: f32 = 0.9;
const SPEED_RANGE: Range<f32> = 100.0..300.0;
const SIDES_AT_MAX_TIER: u32 = 16;
const DRAW_THICKNESS: f32 = 2.0;

/// An asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    body: Body,
    tier: u8,
    heading: f32,
    speed: f32,
}

impl Asteroid {
    /// Asteroid of `tier` centered on `center`
    pub fn new(center: Point2, heading: f32, speed: f32, tier: u8) -> Result<Self, GameError> {
        if !(1..=MAX_TIER).contains(&tier) {
            return Err(GameError::InvalidAsteroidTier(tier));
        }
        let side = RECT_PER_TIER * f32::from(tier);
        Ok(Self {
            body: Body::centered(center, Vec2::new(side, side), None),
            tier,
            heading: wrap_angle(heading),
            speed,
        })
    }

    /// Biggest-tier asteroid entering from a random screen edge
    pub fn at_random_edge<R: Rng + ?Sized>(screen: Vec2, rng: &mut R) -> Self {
        let side = RECT_PER_TIER * f32::from(MAX_TIER);
        let immersed = side * BOUNDS_IMMERSION;

        let left = -immersed;
        let right = screen.x - (side - immersed);
        let top = -immersed;
        let bottom = screen.y - (side - immersed);

        let mut position = Point2::new(rng.gen_range(left..right), rng.gen_range(top..bottom));
        if rng.gen_bool(0.5) {
            position.x = if rng.gen_bool(0.5) { left } else { right };
        } else {
            position.y = if rng.gen_bool(0.5) { top } else { bottom };
        }

        Self {
            body: Body {
                bounds: Rect::new(position, Vec2::new(side, side)),
                visual: None,
            },
            tier: MAX_TIER,
            heading: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(SPEED_RANGE),
        }
    }

    /// Size tier, 1..=3
    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// Heading in radians
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Speed in pixels per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    /// Velocity vector
    pub fn velocity(&self) -> Vec2 {
        heading_vector(self.heading) * self.speed
    }

    /// Children produced by a hit: two of the next tier down, centered on this
    /// asteroid and heading +90 and -90 degrees from it. Tier 1 yields none.
    pub fn split<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self>, GameError> {
        let tier = self.tier - 1;
        if tier == 0 {
            return Ok(Vec::new());
        }
        let center = self.collision_origin();
        [FRAC_PI_2, -FRAC_PI_2]
            .into_iter()
            .map(|offset| Self::new(center, self.heading + offset, rng.gen_range(SPEED_RANGE), tier))
            .collect()
    }

    pub(crate) fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.body.bounds.offset(self.velocity() * ctx.dt);
        self.body.bounds.wrap_within(ctx.screen, BOUNDS_IMMERSION);
    }

    pub(crate) fn draw(&self, frame: &mut dyn DrawContext, debug: bool) {
        let center = self.collision_origin();
        let radius = self.collision_radius();
        let sides = SIDES_AT_MAX_TIER * u32::from(self.tier) / u32::from(MAX_TIER);
        frame.circle(center, radius, sides, Color::WHITE, DRAW_THICKNESS);

        if debug {
            frame.rectangle(self.body.bounds, Color::ORANGE);
            frame.line(center, center + heading_vector(self.heading) * radius, Color::RED);
        }
    }
}

impl RadiusCollider for Asteroid {
    fn collision_radius(&self) -> f32 {
        RADIUS_PER_TIER * f32::from(self.tier)
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tier_three_splits_into_two_tier_two() {
        let mut rng = StdRng::seed_from_u64(3);
        let parent = Asteroid::new(Point2::new(400.0, 300.0), 0.5, 150.0, 3).unwrap();
        let children = parent.split(&mut rng).unwrap();

        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.tier(), 2);
            assert_relative_eq!(child.collision_origin(), parent.collision_origin(), epsilon = 1e-4);
            assert_relative_eq!(child.collision_radius(), 32.0);
        }
        assert_relative_eq!(children[0].heading(), wrap_angle(0.5 + FRAC_PI_2), epsilon = 1e-5);
        assert_relative_eq!(children[1].heading(), wrap_angle(0.5 - FRAC_PI_2), epsilon = 1e-5);
    }

    #[test]
    fn test_tier_one_split_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let pebble = Asteroid::new(Point2::new(10.0, 10.0), 0.0, 100.0, 1).unwrap();
        assert!(pebble.split(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_tier_is_rejected() {
        let err = Asteroid::new(Point2::origin(), 0.0, 100.0, 4).unwrap_err();
        assert!(matches!(err, GameError::InvalidAsteroidTier(4)));
        assert!(Asteroid::new(Point2::origin(), 0.0, 100.0, 0).is_err());
    }

    #[test]
    fn test_edge_spawn_touches_a_border() {
        let mut rng = StdRng::seed_from_u64(11);
        let screen = Vec2::new(1200.0, 800.0);
        for _ in 0..50 {
            let asteroid = Asteroid::at_random_edge(screen, &mut rng);
            let p = asteroid.body().bounds.position;
            let on_edge = [p.x + 86.4, p.x - 1190.4, p.y + 86.4, p.y - 790.4]
                .iter()
                .any(|d| d.abs() < 1e-3);
            assert!(on_edge, "spawned at {p:?}");
            assert!(SPEED_RANGE.contains(&asteroid.speed()));
            assert_eq!(asteroid.tier(), MAX_TIER);
        }
    }

    #[test]
    fn test_update_moves_along_heading() {
        let mut harness = Harness::new();
        let mut asteroid = Asteroid::new(Point2::new(600.0, 400.0), 0.0, 200.0, 2).unwrap();
        asteroid.update(&mut harness.ctx(0.5));
        assert_relative_eq!(asteroid.collision_origin(), Point2::new(700.0, 400.0), epsilon = 1e-3);
    }
}
