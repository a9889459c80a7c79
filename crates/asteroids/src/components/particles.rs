//! Debris bursts
//!
//! Left behind wherever an asteroid breaks up: a handful of sparks flying
//! outward from the impact and fading over the burst's lifetime. Bigger rocks
//! throw more sparks for longer. A burst never collides and never removes
//! itself; whoever spawns it schedules its expiry.

use super::{Body, FrameContext};
use arcade_engine::foundation::math::{heading_vector, Point2, Rect, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{Color, DrawContext};
use rand::Rng;
use std::f32::consts::TAU;

const SPARKS_PER_TIER: u32 = 10;
const SPARK_SPEED: f32 = 100.0;
const LIFETIME_PER_TIER: f32 = 1.0;
const SPARK_SIZE: f32 = 2.0;

#[derive(Debug, Clone)]
struct Spark {
    position: Point2,
    velocity: Vec2,
}

/// A burst of debris sparks
#[derive(Debug, Clone)]
pub struct Particles {
    body: Body,
    sparks: Vec<Spark>,
    lifetime: f32,
    age: f32,
}

impl Particles {
    /// Burst for an asteroid of `tier` breaking up at `center`
    pub fn burst<R: Rng + ?Sized>(center: Point2, tier: u8, rng: &mut R) -> Self {
        let sparks = (0..SPARKS_PER_TIER * u32::from(tier))
            .map(|_| Spark {
                position: center,
                velocity: heading_vector(rng.gen_range(0.0..TAU))
                    * rng.gen_range(SPARK_SPEED * 0.5..=SPARK_SPEED),
            })
            .collect();
        Self {
            body: Body::centered(center, Vec2::zeros(), None),
            sparks,
            lifetime: LIFETIME_PER_TIER * f32::from(tier),
            age: 0.0,
        }
    }

    /// Number of sparks
    pub fn count(&self) -> usize {
        self.sparks.len()
    }

    /// Seconds the burst stays on screen
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Seconds since the burst started
    pub fn age(&self) -> f32 {
        self.age
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    pub(crate) fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.age += ctx.dt;
        for spark in &mut self.sparks {
            spark.position += spark.velocity * ctx.dt;
        }
    }

    pub(crate) fn draw(&self, frame: &mut dyn DrawContext) {
        let fade = (1.0 - self.age / self.lifetime).clamp(0.0, 1.0);
        let color = Color {
            a: fade,
            ..Color::WHITE
        };
        let size = Vec2::new(SPARK_SIZE, SPARK_SIZE);
        for spark in &self.sparks {
            frame.fill_rectangle(Rect::centered_at(spark.position, size), color);
        }
    }
}

impl RadiusCollider for Particles {
    fn collision_radius(&self) -> f32 {
        0.0
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
    use arcade_engine::render::{DrawCommand, DrawList};

    #[test]
    fn test_burst_scales_with_tier() {
        let mut harness = Harness::new();
        let big = Particles::burst(Point2::new(100.0, 100.0), 3, &mut harness.rng);
        let small = Particles::burst(Point2::new(100.0, 100.0), 1, &mut harness.rng);
        assert_eq!(big.count(), 30);
        assert_eq!(small.count(), 10);
        assert_relative_eq!(big.lifetime(), 3.0);
        assert_relative_eq!(small.lifetime(), 1.0);
    }

    #[test]
    fn test_sparks_fly_outward_and_fade() {
        let mut harness = Harness::new();
        let center = Point2::new(300.0, 300.0);
        let mut burst = Particles::burst(center, 2, &mut harness.rng);
        burst.update(&mut harness.ctx(0.5));
        assert_relative_eq!(burst.age(), 0.5);

        for spark in &burst.sparks {
            let travelled = (spark.position - center).norm();
            assert!((24.9..=50.1).contains(&travelled), "travelled {travelled}");
        }

        let mut frame = DrawList::new();
        burst.draw(&mut frame);
        assert_eq!(frame.len(), 20);
        let DrawCommand::Rectangle { color, filled, .. } = &frame.commands()[0] else {
            panic!("expected a filled spark");
        };
        assert!(*filled);
        assert_relative_eq!(color.a, 0.75);
    }
}
