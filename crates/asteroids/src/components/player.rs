//! Player ship

use super::{Body, FrameContext, Spawn};
use crate::assets::{self, sounds};
use arcade_engine::audio::SoundCue;
use arcade_engine::foundation::math::{heading_vector, wrap_angle, Point2, Rect, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{Color, DrawContext};
use rand::Rng;

const SIZE: f32 = 32.0;
const THRUSTER_SIZE: f32 = 16.0;
const THRUSTER_OFFSET: f32 = 6.0;
const ROTATION_SPEED: f32 = 350.0; // degrees per second
const ACCELERATION: f32 = 1000.0;
const FRICTION: f32 = 0.97;
const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 600.0;
const BOUNDS_IMMERSION: f32 = 0.5;
const COLLISION_RADIUS: f32 = 10.0;

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    velocity: Vec2,
    angle: f32,
    thrusting: bool,
}

impl Player {
    /// Ship at rest centered on `center`, nose pointing right
    pub fn new(center: Point2) -> Self {
        Self {
            body: Body::centered(center, Vec2::new(SIZE, SIZE), Some(assets::PLAYER_SHIP)),
            velocity: Vec2::zeros(),
            angle: 0.0,
            thrusting: false,
        }
    }

    /// Heading in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Whether the thruster is firing
    pub fn is_thrusting(&self) -> bool {
        self.thrusting
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    pub(crate) fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let dt = ctx.dt;
        let actions = ctx.actions;

        self.angle = wrap_angle(self.angle - actions.turn_axis() * ROTATION_SPEED.to_radians() * dt);

        if actions.thrust && !self.thrusting {
            ctx.sounds.push(SoundCue::StartLoop {
                sound: sounds::THRUST,
                pitch: ctx.rng.gen_range(-0.1..0.1),
            });
        } else if !actions.thrust && self.thrusting {
            ctx.sounds.push(SoundCue::StopLoop { sound: sounds::THRUST });
        }
        self.thrusting = actions.thrust;

        if self.thrusting {
            self.velocity += heading_vector(self.angle) * ACCELERATION * dt;
        } else {
            self.velocity *= FRICTION;
            if self.velocity.x.abs() < MIN_SPEED && self.velocity.y.abs() < MIN_SPEED {
                self.velocity = Vec2::zeros();
            }
        }

        if actions.fire {
            ctx.spawns.push(Spawn::Bullet {
                origin: self.collision_origin(),
                direction: heading_vector(self.angle),
                from_player: true,
            });
            ctx.sounds.play(sounds::FIRE);
        }

        self.velocity.x = self.velocity.x.clamp(-MAX_SPEED, MAX_SPEED);
        self.velocity.y = self.velocity.y.clamp(-MAX_SPEED, MAX_SPEED);

        self.body.bounds.offset(self.velocity * dt);
        self.body.bounds.wrap_within(ctx.screen, BOUNDS_IMMERSION);
    }

    fn thruster_rect(&self) -> Rect {
        let behind = -heading_vector(self.angle);
        let distance = SIZE * 0.5 + THRUSTER_SIZE * 0.5 - THRUSTER_OFFSET;
        Rect::centered_at(
            self.collision_origin() + behind * distance,
            Vec2::new(THRUSTER_SIZE, THRUSTER_SIZE),
        )
    }

    pub(crate) fn draw(&self, frame: &mut dyn DrawContext, debug: bool) {
        if let Some(visual) = self.body.visual {
            frame.sprite(visual, self.body.bounds, self.angle);
        }
        let thruster = self.thruster_rect();
        if self.thrusting {
            frame.sprite(assets::THRUSTER, thruster, self.angle);
        }

        if debug {
            let center = self.collision_origin();
            frame.rectangle(self.body.bounds, Color::ORANGE);
            frame.circle(center, COLLISION_RADIUS, 16, Color::RED, 1.0);
            frame.rectangle(thruster, Color::AQUA);
        }
    }
}

impl RadiusCollider for Player {
    fn collision_radius(&self) -> f32 {
        COLLISION_RADIUS
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
    fn test_thrust_accelerates_along_heading() {
        let mut harness = Harness::new();
        harness.actions.thrust = true;
        let mut player = Player::new(Point2::new(600.0, 400.0));

        player.update(&mut harness.ctx(0.1));
        assert_relative_eq!(player.velocity(), Vec2::new(100.0, 0.0), epsilon = 1e-3);
        assert!(matches!(harness.sounds.cues()[0], SoundCue::StartLoop { .. }));
    }

    #[test]
    fn test_speed_is_clamped_per_axis() {
        let mut harness = Harness::new();
        harness.actions.thrust = true;
        let mut player = Player::new(Point2::new(600.0, 400.0));
        for _ in 0..100 {
            player.update(&mut harness.ctx(0.05));
        }
        assert!(player.velocity().x <= MAX_SPEED);
        assert!(player.velocity().y.abs() <= MAX_SPEED);
    }

    #[test]
    fn test_friction_snaps_to_rest() {
        let mut harness = Harness::new();
        let mut player = Player::new(Point2::new(600.0, 400.0));
        player.velocity = Vec2::new(1.02, 0.5);
        player.update(&mut harness.ctx(0.016));
        assert_eq!(player.velocity(), Vec2::zeros());
    }

    #[test]
    fn test_releasing_thrust_stops_loop() {
        let mut harness = Harness::new();
        let mut player = Player::new(Point2::new(600.0, 400.0));
        harness.actions.thrust = true;
        player.update(&mut harness.ctx(0.016));
        harness.actions.thrust = false;
        player.update(&mut harness.ctx(0.016));
        assert!(matches!(harness.sounds.cues()[1], SoundCue::StopLoop { .. }));
        assert!(!player.is_thrusting());
    }

    #[test]
    fn test_fire_requests_bullet_from_center() {
        let mut harness = Harness::new();
        harness.actions.fire = true;
        let mut player = Player::new(Point2::new(600.0, 400.0));
        player.update(&mut harness.ctx(0.016));

        assert_eq!(harness.spawns.len(), 1);
        let Spawn::Bullet { origin, direction, from_player } = &harness.spawns[0];
        assert!(*from_player);
        assert_relative_eq!(*origin, Point2::new(600.0, 400.0));
        assert_relative_eq!(*direction, Vec2::new(1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_turning_right_decreases_angle() {
        let mut harness = Harness::new();
        harness.actions.turn_right = true;
        let mut player = Player::new(Point2::new(600.0, 400.0));
        player.update(&mut harness.ctx(0.1));
        assert_relative_eq!(player.angle(), wrap_angle(-35.0_f32.to_radians()), epsilon = 1e-5);
    }
}
