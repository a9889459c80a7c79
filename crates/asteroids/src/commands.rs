//! Scheduled commands
//!
//! Deferred work is queued on the session's scheduler as plain values and
//! interpreted by the session when due.

use arcade_engine::ecs::EntityId;

/// A deferred action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spawn a wave of `count` asteroids
    SpawnWave {
        /// Asteroids in the wave
        count: u32,
    },
    /// The respawn delay has elapsed
    RespawnReady,
    /// Enter the game-over screen
    GameOver {
        /// Death that used up the last life
        death: u32,
    },
    /// Leave the game-over screen
    ReturnToMenu,
    /// Bring in a UFO
    SpawnUfo,
    /// Destroy an entity whose lifetime ran out; no-op if it is already gone
    Expire(EntityId),
}
