//! Flying saucers
//!
//! A UFO crosses the screen horizontally, occasionally drifting diagonally for
//! a while, and takes an aimed shot at the player every couple of seconds.

use super::{Body, FrameContext, Spawn};
use crate::assets::{self, sounds};
use arcade_engine::foundation::math::{Point2, Rect, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{Color, DrawContext};
use rand::Rng;
use std::ops::Range;

const BIG_SIZE: f32 = 64.0;
const SPEED: f32 = 150.0;
const BOUNDS_IMMERSION: f32 = 0.5;
const EDGE_MARGIN: f32 = 20.0;
const SHOOT_INTERVAL: f32 = 2.0;
const DIAGONAL_DURATION: Range<f32> = 1.0..3.0;
const DIAGONAL_DELAY: Range<f32> = 1.0..5.0;

/// A UFO
#[derive(Debug, Clone)]
pub struct Ufo {
    body: Body,
    small: bool,
    direction: Vec2,
    aim: Vec2,
    shoot_timer: f32,
    diagonal_timer: f32,
    diagonal_duration: f32,
    straight_timer: f32,
    diagonal_delay: f32,
}

impl Ufo {
    /// UFO entering from the left or right edge at a random height
    pub fn new<R: Rng + ?Sized>(from_left: bool, small: bool, screen: Vec2, rng: &mut R) -> Self {
        let size = if small { BIG_SIZE * 0.5 } else { BIG_SIZE };
        let visual = if small { assets::SMALL_UFO } else { assets::BIG_UFO };

        let x = if from_left {
            -size * BOUNDS_IMMERSION
        } else {
            screen.x - (size - size * BOUNDS_IMMERSION)
        };
        let top = EDGE_MARGIN;
        let bottom = (screen.y - size - EDGE_MARGIN).max(top + 1.0);
        let y = rng.gen_range(top..bottom);

        let direction = if from_left { Vec2::x() } else { -Vec2::x() };
        let mut ufo = Self {
            body: Body {
                bounds: Rect::new(Point2::new(x, y), Vec2::new(size, size)),
                visual: Some(visual),
            },
            small,
            direction,
            aim: direction,
            shoot_timer: 0.0,
            diagonal_timer: 0.0,
            diagonal_duration: 0.0,
            straight_timer: 0.0,
            diagonal_delay: 0.0,
        };
        ufo.reset_diagonal(rng);
        ufo
    }

    /// Whether this is the small variant
    pub fn is_small(&self) -> bool {
        self.small
    }

    /// Current movement direction (not normalized while drifting)
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Move the UFO so its center lands on `center`
    pub fn set_center(&mut self, center: Point2) {
        self.body.bounds.set_center(center);
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    fn reset_diagonal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.diagonal_delay = rng.gen_range(DIAGONAL_DELAY);
        self.diagonal_duration = rng.gen_range(DIAGONAL_DURATION);
        self.diagonal_timer = 0.0;
    }

    fn steer<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        if self.direction.y == 0.0 {
            if self.straight_timer > self.diagonal_delay {
                self.direction.y = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
                self.straight_timer = 0.0;
            } else {
                self.straight_timer += dt;
            }
            return;
        }

        if self.diagonal_timer > self.diagonal_duration {
            self.direction.y = 0.0;
            self.reset_diagonal(rng);
        } else {
            self.diagonal_timer += dt;
        }
    }

    fn shoot(&mut self, ctx: &mut FrameContext<'_>) {
        let Some(target) = ctx.player_origin else {
            return;
        };
        let origin = self.collision_origin();
        let Some(aim) = (target - origin).try_normalize(f32::EPSILON) else {
            return;
        };
        self.aim = aim;
        ctx.spawns.push(Spawn::Bullet {
            origin,
            direction: aim,
            from_player: false,
        });
        ctx.sounds.play(sounds::UFO_FIRE);
    }

    pub(crate) fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.steer(ctx.dt, &mut *ctx.rng);

        let step = self.direction.try_normalize(f32::EPSILON).unwrap_or_else(Vec2::zeros);
        self.body.bounds.offset(step * SPEED * ctx.dt);
        self.body.bounds.wrap_within(ctx.screen, BOUNDS_IMMERSION);

        if self.shoot_timer > SHOOT_INTERVAL {
            self.shoot(ctx);
            self.shoot_timer = 0.0;
        }
        self.shoot_timer += ctx.dt;
    }

    pub(crate) fn draw(&self, frame: &mut dyn DrawContext, debug: bool) {
        if let Some(visual) = self.body.visual {
            frame.sprite(visual, self.body.bounds, 0.0);
        }

        if debug {
            let center = self.collision_origin();
            let radius = self.collision_radius();
            frame.line(center, center + self.aim * radius, Color::RED);
            frame.circle(center, radius, 16, Color::RED, 1.0);
        }
    }
}

impl RadiusCollider for Ufo {
    fn collision_radius(&self) -> f32 {
        self.body.bounds.size.x * 0.5
    }

    fn collision_origin(&self) -> Point2 {
        self.body.bounds.center()
    }
}
