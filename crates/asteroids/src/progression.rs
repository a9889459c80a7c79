//! Phase, wave, score and lives
//!
//! ```text
//!   Menu --start--> Playing --player dies, lives left--> AwaitingRespawn
//!                     ^  |                                     |
//!                     |  +--last life lost, after delay--+     |
//!                     |                                  v     |
//!                     +----- delay elapsed and spawn ---- GameOver --hold--> Menu
//!                            point clear (from AwaitingRespawn)
//! ```
//!
//! Everything time-based goes through the session's scheduler as a
//! [`Command`]; this type only decides what to schedule and reacts when the
//! session reports what fired.

use crate::assets::sounds;
use crate::commands::Command;
use crate::config::{GameConfig, ScoringConfig, SpawningConfig};
use crate::error::GameError;
use crate::world::World;
use arcade_engine::audio::SoundQueue;
use arcade_engine::events::Scheduler;
use arcade_engine::physics::BoundingCircle;
use rand::Rng;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a start trigger
    Menu,
    /// A game is running with a live player
    Playing,
    /// The player died with lives left
    AwaitingRespawn {
        /// The respawn delay has elapsed; respawn once the spawn point is clear
        ready: bool,
    },
    /// Final score on screen
    GameOver,
}

impl GamePhase {
    /// A game is in progress (player alive or about to respawn)
    pub fn in_game(self) -> bool {
        matches!(self, Self::Playing | Self::AwaitingRespawn { .. })
    }
}

/// Progression state
#[derive(Debug, Clone)]
pub struct Progression {
    phase: GamePhase,
    wave: u32,
    lives: u32,
    score: u32,
    next_extra_life: u32,
    wave_pending: bool,
    ufo_pending: bool,
    game_over_pending: bool,
    deaths: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    /// Fresh state in the menu
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            wave: 0,
            lives: 0,
            score: 0,
            next_extra_life: 0,
            wave_pending: false,
            ufo_pending: false,
            game_over_pending: false,
            deaths: 0,
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current wave number, starting at 1
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Lives remaining
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// A wave spawn is scheduled but has not happened yet
    pub fn wave_pending(&self) -> bool {
        self.wave_pending
    }

    /// A UFO spawn is scheduled
    pub fn ufo_pending(&self) -> bool {
        self.ufo_pending
    }

    /// Start a new game: reset counters, spawn the player and queue wave one
    pub fn start(&mut self, world: &mut World, scheduler: &mut Scheduler<Command>, config: &GameConfig) {
        world.clear();
        scheduler.clear_all();

        *self = Self {
            phase: GamePhase::Playing,
            lives: config.gameplay.starting_lives,
            next_extra_life: config.scoring.extra_life_every,
            ..Self::new()
        };

        world.spawn_player(config.gameplay.spawn_point());
        log::info!("New game with {} lives", self.lives);
        self.next_wave(scheduler, &config.spawning);
    }

    /// Advance the wave counter and schedule its asteroids
    pub fn next_wave(&mut self, scheduler: &mut Scheduler<Command>, spawning: &SpawningConfig) {
        self.wave += 1;
        let count = spawning.wave_size(self.wave);
        scheduler.schedule(Command::SpawnWave { count }, spawning.wave_delay);
        self.wave_pending = true;
        log::info!("Wave {} scheduled: {} asteroids in {:.1}s", self.wave, count, spawning.wave_delay);
    }

    /// The scheduled wave has spawned
    pub fn wave_spawned(&mut self) {
        self.wave_pending = false;
    }

    /// Queue the next wave once asteroids and UFOs are all gone
    pub fn check_wave_cleared(
        &mut self,
        world: &World,
        scheduler: &mut Scheduler<Command>,
        spawning: &SpawningConfig,
    ) {
        if !self.phase.in_game() || self.wave_pending || self.game_over_pending {
            return;
        }
        if world.asteroid_count() == 0 && world.ufo_count() == 0 {
            log::debug!("Wave {} cleared", self.wave);
            self.next_wave(scheduler, spawning);
        }
    }

    /// React to the player ship being destroyed
    pub fn player_destroyed(
        &mut self,
        world: &mut World,
        scheduler: &mut Scheduler<Command>,
        config: &GameConfig,
    ) {
        self.lives = self.lives.saturating_sub(1);
        self.deaths += 1;

        if self.lives > 0 {
            log::info!("Player destroyed, {} lives left", self.lives);
            self.phase = GamePhase::AwaitingRespawn { ready: false };
            world.clear_ufos();
            scheduler.schedule(Command::RespawnReady, config.gameplay.respawn_delay);
        } else {
            log::info!("Last life lost");
            self.game_over_pending = true;
            scheduler.schedule(
                Command::GameOver { death: self.deaths },
                config.gameplay.game_over_delay,
            );
        }
    }

    /// Take back a pending game over once a bonus life has been earned after
    /// the last death. The player respawns as after any other death and the
    /// queued game over fires as a no-op. Returns whether it took effect.
    pub fn revive(
        &mut self,
        world: &mut World,
        scheduler: &mut Scheduler<Command>,
        config: &GameConfig,
    ) -> bool {
        if !self.game_over_pending || self.lives == 0 {
            return false;
        }
        log::info!("Bonus life after last death, {} lives", self.lives);
        self.game_over_pending = false;
        self.phase = GamePhase::AwaitingRespawn { ready: false };
        world.clear_ufos();
        scheduler.schedule(Command::RespawnReady, config.gameplay.respawn_delay);
        true
    }

    /// The respawn delay elapsed
    pub fn respawn_ready(&mut self) {
        if let GamePhase::AwaitingRespawn { ready } = &mut self.phase {
            *ready = true;
        }
    }

    /// Respawn the player if the delay has elapsed and no asteroid is within
    /// the safety radius of the spawn point. Returns whether it respawned.
    pub fn try_respawn(&mut self, world: &mut World, config: &GameConfig) -> bool {
        if self.phase != (GamePhase::AwaitingRespawn { ready: true }) {
            return false;
        }

        let spawn_point = config.gameplay.spawn_point();
        let zone = BoundingCircle::new(spawn_point, config.gameplay.spawn_safety_radius);
        if world.any_asteroid_within(&zone) {
            log::trace!("Respawn blocked, spawn point not clear");
            return false;
        }

        world.spawn_player(spawn_point);
        world.clear_ufos();
        self.phase = GamePhase::Playing;
        log::info!("Player respawned");
        true
    }

    /// Add points, awarding an extra life per threshold crossed
    pub fn award(&mut self, points: u32, scoring: &ScoringConfig, cues: &mut SoundQueue) {
        self.score = self.score.saturating_add(points);
        while scoring.extra_life_every > 0 && self.score >= self.next_extra_life {
            self.lives += 1;
            self.next_extra_life = self.next_extra_life.saturating_add(scoring.extra_life_every);
            cues.play(sounds::EXTRA_LIFE);
            log::info!("Extra life at {} points, {} lives", self.score, self.lives);
        }
    }

    /// Score an asteroid hit. Only player kills earn points.
    pub fn asteroid_destroyed(
        &mut self,
        tier: u8,
        by_player: bool,
        scoring: &ScoringConfig,
        cues: &mut SoundQueue,
    ) -> Result<(), GameError> {
        let points = usize::from(tier)
            .checked_sub(1)
            .and_then(|index| scoring.asteroid_points.get(index))
            .copied()
            .ok_or(GameError::InvalidAsteroidTier(tier))?;
        if by_player {
            self.award(points, scoring, cues);
        }
        Ok(())
    }

    /// Score a UFO kill. Only player kills earn points.
    pub fn ufo_destroyed(
        &mut self,
        small: bool,
        by_player: bool,
        scoring: &ScoringConfig,
        cues: &mut SoundQueue,
    ) {
        if by_player {
            let points = if small { scoring.small_ufo_points } else { scoring.big_ufo_points };
            self.award(points, scoring, cues);
        }
    }

    /// Schedule the next UFO if none is flying or pending and asteroids remain
    pub fn arm_ufo<R: Rng + ?Sized>(
        &mut self,
        world: &World,
        scheduler: &mut Scheduler<Command>,
        rng: &mut R,
        spawning: &SpawningConfig,
    ) {
        if self.phase != GamePhase::Playing || self.ufo_pending || self.game_over_pending {
            return;
        }
        if world.asteroid_count() == 0 || world.ufo_count() > 0 {
            return;
        }

        let range = if rng.gen_bool(spawning.ufo_common_chance) {
            spawning.ufo_delay_common
        } else {
            spawning.ufo_delay_rare
        };
        let delay = rng.gen_range(range.min..range.max);
        scheduler.schedule(Command::SpawnUfo, delay);
        self.ufo_pending = true;
        log::debug!("UFO armed in {:.1}s", delay);
    }

    /// The UFO timer fired. Returns whether a UFO should actually appear.
    pub fn ufo_spawn_due(&mut self) -> bool {
        self.ufo_pending = false;
        self.phase == GamePhase::Playing && !self.game_over_pending
    }

    /// Enter the game-over screen and schedule the return to the menu.
    ///
    /// `death` is the death the game over was queued for; anything else (or a
    /// game over taken back by [`Progression::revive`]) is ignored.
    pub fn enter_game_over(
        &mut self,
        death: u32,
        scheduler: &mut Scheduler<Command>,
        config: &GameConfig,
    ) -> bool {
        if !self.game_over_pending || death != self.deaths {
            log::trace!("Ignoring stale game over for death {}", death);
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.game_over_pending = false;
        scheduler.schedule(Command::ReturnToMenu, config.gameplay.game_over_hold);
        log::info!("Game over: score {} on wave {}", self.score, self.wave);
        true
    }

    /// Drop every entity and timer and wait in the menu
    pub fn return_to_menu(&mut self, world: &mut World, scheduler: &mut Scheduler<Command>) {
        world.clear();
        scheduler.clear_all();
        self.phase = GamePhase::Menu;
        self.wave_pending = false;
        self.ufo_pending = false;
        self.game_over_pending = false;
        log::info!("Back to menu");
    }
}
