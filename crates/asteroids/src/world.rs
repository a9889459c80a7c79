//! Game world
//!
//! Owns the entity registry and the typed groups layered over it. The session
//! holds exactly one world; nothing here is global, so tests can run as many
//! independent worlds as they like.

use crate::components::{Actor, Asteroid, Player};
use crate::error::GameError;
use arcade_engine::ecs::{EntityId, GroupId, Registry};
use arcade_engine::foundation::math::Point2;
use arcade_engine::physics::{BoundingCircle, RadiusCollider};
use arcade_engine::render::DrawContext;

/// Group ids registered for the game's entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Groups {
    /// The player ship (zero or one member)
    pub players: GroupId,
    /// Asteroids
    pub asteroids: GroupId,
    /// UFOs
    pub ufos: GroupId,
    /// Bullets fired by the player
    pub player_bullets: GroupId,
    /// Bullets fired by UFOs
    pub ufo_bullets: GroupId,
    /// Debris bursts
    pub effects: GroupId,
}

impl Groups {
    fn register(registry: &mut Registry<Actor>) -> Result<Self, GameError> {
        Ok(Self {
            players: registry.register_group("players")?,
            asteroids: registry.register_group("asteroids")?,
            ufos: registry.register_group("ufos")?,
            player_bullets: registry.register_group("player_bullets")?,
            ufo_bullets: registry.register_group("ufo_bullets")?,
            effects: registry.register_group("effects")?,
        })
    }

    /// Group an actor belongs to
    pub fn for_actor(&self, actor: &Actor) -> GroupId {
        match actor {
            Actor::Player(_) => self.players,
            Actor::Asteroid(_) => self.asteroids,
            Actor::Ufo(_) => self.ufos,
            Actor::Bullet(bullet) if bullet.is_from_player() => self.player_bullets,
            Actor::Bullet(_) => self.ufo_bullets,
            Actor::Particles(_) => self.effects,
        }
    }

    /// Collision origin of the live player, if any
    pub fn player_origin(&self, registry: &Registry<Actor>) -> Option<Point2> {
        registry
            .first_in_group(self.players)
            .and_then(|id| registry.get(id))
            .map(|actor| actor.collision_origin())
    }
}

/// Registry plus typed groups
#[derive(Debug)]
pub struct World {
    /// Every live entity
    pub registry: Registry<Actor>,
    /// Typed views over the registry
    pub groups: Groups,
}

impl World {
    /// Empty world with the game's groups registered
    pub fn new() -> Result<Self, GameError> {
        let mut registry = Registry::new();
        let groups = Groups::register(&mut registry)?;
        Ok(Self { registry, groups })
    }

    /// Add an actor to the registry and to its group
    pub fn spawn(&mut self, actor: Actor) -> EntityId {
        let group = self.groups.for_actor(&actor);
        self.registry.add_to_group(actor, group)
    }

    /// Spawn the player ship centered on `at`
    pub fn spawn_player(&mut self, at: Point2) -> EntityId {
        log::debug!("Spawning player at ({:.0}, {:.0})", at.x, at.y);
        self.spawn(Actor::Player(Player::new(at)))
    }

    /// Spawn an asteroid
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        self.spawn(Actor::Asteroid(asteroid))
    }

    /// Destroy an entity; `false` if it was already gone
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.registry.destroy(id).is_some()
    }

    /// The live player, if any
    pub fn player(&self) -> Option<EntityId> {
        self.registry.first_in_group(self.groups.players)
    }

    /// Collision origin of the live player
    pub fn player_origin(&self) -> Option<Point2> {
        self.groups.player_origin(&self.registry)
    }

    /// Live asteroids
    pub fn asteroid_count(&self) -> usize {
        self.registry.group_len(self.groups.asteroids)
    }

    /// Live UFOs
    pub fn ufo_count(&self) -> usize {
        self.registry.group_len(self.groups.ufos)
    }

    /// Whether any asteroid overlaps `zone`
    pub fn any_asteroid_within(&self, zone: &BoundingCircle) -> bool {
        self.registry
            .group_members(self.groups.asteroids)
            .iter()
            .filter_map(|id| self.registry.get(*id))
            .any(|asteroid| zone.contains_point(asteroid.collision_origin()))
    }

    /// Destroy every UFO
    pub fn clear_ufos(&mut self) -> usize {
        let cleared = self.registry.destroy_group(self.groups.ufos);
        if cleared > 0 {
            log::debug!("Cleared {} ufos", cleared);
        }
        cleared
    }

    /// Destroy everything
    pub fn clear(&mut self) {
        self.registry.remove_all();
    }

    /// Draw every live entity in registration order
    pub fn draw(&self, frame: &mut dyn DrawContext, debug: bool) {
        self.registry.draw_all(|_, actor| actor.draw(&mut *frame, debug));
    }
}
