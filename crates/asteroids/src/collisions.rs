//! Collision resolution
//!
//! Runs once per frame after every entity has moved. Pairs of groups are
//! tested in a fixed order:
//!
//! 1. player vs asteroid
//! 2. player vs UFO
//! 3. player vs UFO bullet
//! 4. UFO vs asteroid
//! 5. player bullet vs asteroid
//! 6. player bullet vs UFO
//! 7. UFO bullet vs asteroid
//!
//! For each member of the first group only the first overlapping member of the
//! second group (in group order) is taken. The first group is walked with its
//! scan cursor, so destroying the current member or anything else mid-scan is
//! safe.

use crate::components::{Actor, Particles};
use crate::error::GameError;
use crate::world::World;
use arcade_engine::ecs::{EntityId, GroupId, Registry};
use arcade_engine::foundation::math::Point2;
use arcade_engine::physics::{BoundingCircle, RadiusCollider};
use rand::Rng;

/// What a collision did, for scoring and progression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEvent {
    /// The player ship was destroyed
    PlayerDestroyed {
        /// Where it happened
        at: Point2,
    },
    /// An asteroid was hit and split (or vanished)
    AsteroidDestroyed {
        /// Tier of the asteroid that was hit
        tier: u8,
        /// Hit by a player bullet
        by_player: bool,
        /// Where it happened
        at: Point2,
        /// Debris burst left behind
        emitter: EntityId,
    },
    /// A UFO was destroyed
    UfoDestroyed {
        /// Small variant
        small: bool,
        /// Hit by a player bullet
        by_player: bool,
        /// Where it happened
        at: Point2,
    },
}

/// Resolve every collision for this frame, appending what happened to `events`
pub fn resolve<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    events: &mut Vec<CollisionEvent>,
) -> Result<(), GameError> {
    let g = world.groups;

    // Player vs asteroid: the ship dies, the rock is unharmed
    scan_pairs(world, g.players, g.asteroids, |world, player, _| {
        kill_player(world, player, events);
        Ok(())
    })?;

    scan_pairs(world, g.players, g.ufos, |world, player, ufo| {
        kill_player(world, player, events);
        kill_ufo(world, ufo, false, events);
        Ok(())
    })?;

    scan_pairs(world, g.players, g.ufo_bullets, |world, player, bullet| {
        kill_player(world, player, events);
        world.destroy(bullet);
        Ok(())
    })?;

    scan_pairs(world, g.ufos, g.asteroids, |world, ufo, asteroid| {
        kill_ufo(world, ufo, false, events);
        shatter(world, asteroid, false, rng, events)
    })?;

    scan_pairs(world, g.player_bullets, g.asteroids, |world, bullet, asteroid| {
        world.destroy(bullet);
        shatter(world, asteroid, true, rng, events)
    })?;

    scan_pairs(world, g.player_bullets, g.ufos, |world, bullet, ufo| {
        world.destroy(bullet);
        kill_ufo(world, ufo, true, events);
        Ok(())
    })?;

    scan_pairs(world, g.ufo_bullets, g.asteroids, |world, bullet, asteroid| {
        world.destroy(bullet);
        shatter(world, asteroid, false, rng, events)
    })
}

/// First member of `group`, in group order, overlapping `circle`
fn first_overlap(
    registry: &Registry<Actor>,
    circle: &BoundingCircle,
    group: GroupId,
) -> Option<EntityId> {
    registry.group_members(group).iter().copied().find(|id| {
        registry
            .get(*id)
            .is_some_and(|actor| actor.collides_with(circle))
    })
}

/// Walk `outer` with its cursor and call `on_hit` with the first overlapping
/// member of `inner` for each outer member
fn scan_pairs<F>(world: &mut World, outer: GroupId, inner: GroupId, mut on_hit: F) -> Result<(), GameError>
where
    F: FnMut(&mut World, EntityId, EntityId) -> Result<(), GameError>,
{
    world.registry.group_begin(outer);
    let mut result = Ok(());
    while let Some(a) = world.registry.group_next(outer) {
        let Some(circle) = world.registry.get(a).map(|actor| actor.bounding_circle()) else {
            continue;
        };
        if let Some(b) = first_overlap(&world.registry, &circle, inner) {
            result = on_hit(world, a, b);
            if result.is_err() {
                break;
            }
        }
    }
    world.registry.group_end(outer);
    result
}

fn kill_player(world: &mut World, id: EntityId, events: &mut Vec<CollisionEvent>) {
    let Some(at) = world.registry.get(id).map(|actor| actor.collision_origin()) else {
        return;
    };
    if world.destroy(id) {
        events.push(CollisionEvent::PlayerDestroyed { at });
    }
}

fn kill_ufo(world: &mut World, id: EntityId, by_player: bool, events: &mut Vec<CollisionEvent>) {
    let Some(Actor::Ufo(ufo)) = world.registry.get(id) else {
        return;
    };
    let small = ufo.is_small();
    let at = ufo.collision_origin();
    if world.destroy(id) {
        events.push(CollisionEvent::UfoDestroyed { small, by_player, at });
    }
}

/// Replace an asteroid with its split children and a debris burst
fn shatter<R: Rng + ?Sized>(
    world: &mut World,
    id: EntityId,
    by_player: bool,
    rng: &mut R,
    events: &mut Vec<CollisionEvent>,
) -> Result<(), GameError> {
    let Some(Actor::Asteroid(asteroid)) = world.registry.get(id) else {
        return Ok(());
    };
    let tier = asteroid.tier();
    let at = asteroid.collision_origin();
    let children = asteroid.split(rng)?;

    world.destroy(id);
    for child in children {
        world.spawn_asteroid(child);
    }
    let emitter = world.spawn(Actor::Particles(Particles::burst(at, tier, rng)));
    events.push(CollisionEvent::AsteroidDestroyed {
        tier,
        by_player,
        at,
        emitter,
    });
    Ok(())
}
