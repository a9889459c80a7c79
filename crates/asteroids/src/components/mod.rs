//! Game-specific components
//!
//! Every live object is an [`Actor`]: a tagged union over the kinds of entity
//! the game knows. Each kind owns its [`Body`] (bounds plus optional
//! visual) and its own update and draw rules.

mod asteroid;
mod bullet;
mod particles;
mod player;
mod ufo;

pub use asteroid::{Asteroid, MAX_TIER};
pub use bullet::Bullet;
pub use particles::Particles;
pub use player::Player;
pub use ufo::Ufo;

use crate::config::GameConfig;
use crate::controls::Actions;
use arcade_engine::audio::SoundQueue;
use arcade_engine::foundation::math::{Point2, Rect, Vec2};
use arcade_engine::physics::RadiusCollider;
use arcade_engine::render::{DrawContext, VisualHandle};
use rand::rngs::StdRng;

/// Bounds and visual shared by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Axis-aligned bounds in screen space
    pub bounds: Rect,

    /// Sprite drawn for this entity, if any
    pub visual: Option<VisualHandle>,
}

impl Body {
    /// Body of `size` centered on `center`
    pub fn centered(center: Point2, size: Vec2, visual: Option<VisualHandle>) -> Self {
        Self {
            bounds: Rect::centered_at(center, size),
            visual,
        }
    }
}

/// Something an entity wants created after its update
#[derive(Debug, Clone, PartialEq)]
pub enum Spawn {
    /// A bullet travelling along `direction` (unit length)
    Bullet {
        /// Muzzle position
        origin: Point2,
        /// Unit travel direction
        direction: Vec2,
        /// Fired by the player ship
        from_player: bool,
    },
}

/// Everything an entity may read or produce during its update
pub struct FrameContext<'a> {
    /// Seconds since last frame
    pub dt: f32,

    /// Logical actions this frame
    pub actions: &'a Actions,

    /// Playfield size
    pub screen: Vec2,

    /// Collision origin of the live player, if any
    pub player_origin: Option<Point2>,

    /// Game randomness
    pub rng: &'a mut StdRng,

    /// Entities to create once this update returns
    pub spawns: &'a mut Vec<Spawn>,

    /// Sound cues for the host
    pub sounds: &'a mut SoundQueue,

    /// Game configuration
    pub config: &'a GameConfig,
}

/// A live game object
#[derive(Debug, Clone)]
pub enum Actor {
    /// The player ship
    Player(Player),
    /// An asteroid of some tier
    Asteroid(Asteroid),
    /// A flying saucer
    Ufo(Ufo),
    /// A player or UFO shot
    Bullet(Bullet),
    /// Debris from a broken asteroid
    Particles(Particles),
}

impl Actor {
    /// Advance one frame
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        match self {
            Self::Player(player) => player.update(ctx),
            Self::Asteroid(asteroid) => asteroid.update(ctx),
            Self::Ufo(ufo) => ufo.update(ctx),
            Self::Bullet(bullet) => bullet.update(ctx),
            Self::Particles(particles) => particles.update(ctx),
        }
    }

    /// Describe this entity for the current frame
    pub fn draw(&self, frame: &mut dyn DrawContext, debug: bool) {
        match self {
            Self::Player(player) => player.draw(frame, debug),
            Self::Asteroid(asteroid) => asteroid.draw(frame, debug),
            Self::Ufo(ufo) => ufo.draw(frame, debug),
            Self::Bullet(bullet) => bullet.draw(frame),
            Self::Particles(particles) => particles.draw(frame),
        }
    }

    /// Shared body
    pub fn body(&self) -> &Body {
        match self {
            Self::Player(player) => player.body(),
            Self::Asteroid(asteroid) => asteroid.body(),
            Self::Ufo(ufo) => ufo.body(),
            Self::Bullet(bullet) => bullet.body(),
            Self::Particles(particles) => particles.body(),
        }
    }

    fn collider(&self) -> &dyn RadiusCollider {
        match self {
            Self::Player(player) => player,
            Self::Asteroid(asteroid) => asteroid,
            Self::Ufo(ufo) => ufo,
            Self::Bullet(bullet) => bullet,
            Self::Particles(particles) => particles,
        }
    }
}

impl RadiusCollider for Actor {
    fn collision_radius(&self) -> f32 {
        self.collider().collision_radius()
    }

    fn collision_origin(&self) -> Point2 {
        self.body().bounds.center()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use rand::SeedableRng;

    /// Owned pieces a [`FrameContext`] borrows from
    pub struct Harness {
        pub actions: Actions,
        pub rng: StdRng,
        pub spawns: Vec<Spawn>,
        pub sounds: SoundQueue,
        pub config: GameConfig,
        pub player_origin: Option<Point2>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                actions: Actions::default(),
                rng: StdRng::seed_from_u64(1),
                spawns: Vec::new(),
                sounds: SoundQueue::new(),
                config: GameConfig::default(),
                player_origin: None,
            }
        }

        pub fn ctx(&mut self, dt: f32) -> FrameContext<'_> {
            FrameContext {
                dt,
                actions: &self.actions,
                screen: self.config.gameplay.screen(),
                player_origin: self.player_origin,
                rng: &mut self.rng,
                spawns: &mut self.spawns,
                sounds: &mut self.sounds,
                config: &self.config,
            }
        }
    }
}
