//! Game configuration
//!
//! Every knob has a default, so a config file only needs the values it wants
//! to change. See `asteroids.toml` next to this crate's manifest.

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::foundation::math::{Point2, Vec2};
use arcade_engine::input::KeyCode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Wave and UFO spawning
    pub spawning: SpawningConfig,

    /// Points and extra lives
    pub scoring: ScoringConfig,

    /// Key bindings
    pub controls: ControlsConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded game config from {}", path.display());
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => return Err(err),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive a game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        let gameplay = &self.gameplay;
        let spawning = &self.spawning;

        if gameplay.screen_width <= 0.0 || gameplay.screen_height <= 0.0 {
            return invalid(format!(
                "screen size must be positive, got {}x{}",
                gameplay.screen_width, gameplay.screen_height
            ));
        }
        if gameplay.starting_lives == 0 {
            return invalid("starting_lives must be at least 1".into());
        }
        if gameplay.bullet_lifetime <= 0.0 || gameplay.bullet_speed <= 0.0 {
            return invalid("bullet lifetime and speed must be positive".into());
        }
        if gameplay.spawn_safety_radius < 0.0 {
            return invalid("spawn_safety_radius cannot be negative".into());
        }
        for (name, delay) in [
            ("respawn_delay", gameplay.respawn_delay),
            ("game_over_delay", gameplay.game_over_delay),
            ("game_over_hold", gameplay.game_over_hold),
            ("wave_delay", spawning.wave_delay),
        ] {
            if delay < 0.0 {
                return invalid(format!("{name} cannot be negative, got {delay}"));
            }
        }
        if spawning.wave_base > spawning.wave_cap {
            return invalid(format!(
                "wave_base ({}) exceeds wave_cap ({})",
                spawning.wave_base, spawning.wave_cap
            ));
        }
        for (name, range) in [
            ("ufo_delay_common", spawning.ufo_delay_common),
            ("ufo_delay_rare", spawning.ufo_delay_rare),
        ] {
            if range.min < 0.0 || range.min >= range.max {
                return invalid(format!("{name} must satisfy 0 <= min < max, got {range:?}"));
            }
        }
        for (name, p) in [
            ("ufo_common_chance", spawning.ufo_common_chance),
            ("small_ufo_chance", spawning.small_ufo_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{name} must lie in [0, 1], got {p}"));
            }
        }
        if self.scoring.extra_life_every == 0 {
            return invalid("extra_life_every must be positive".into());
        }
        Ok(())
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Playfield width
    pub screen_width: f32,

    /// Playfield height
    pub screen_height: f32,

    /// Starting lives
    pub starting_lives: u32,

    /// Seconds between death and the earliest respawn
    pub respawn_delay: f32,

    /// Seconds between losing the last life and the game-over screen
    pub game_over_delay: f32,

    /// Seconds the game-over screen stays up before returning to the menu
    pub game_over_hold: f32,

    /// No asteroid may be this close to the spawn point when respawning
    pub spawn_safety_radius: f32,

    /// Bullet lifetime (seconds)
    pub bullet_lifetime: f32,

    /// Bullet speed
    pub bullet_speed: f32,

    /// Start with debug drawing on
    pub debug_mode: bool,

    /// Fixed RNG seed for reproducible runs
    pub rng_seed: Option<u64>,
}

impl GameplayConfig {
    /// Playfield size
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Where the player (re)spawns
    pub fn spawn_point(&self) -> Point2 {
        Point2::new(self.screen_width * 0.5, self.screen_height * 0.5)
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            starting_lives: 3,
            respawn_delay: 2.0,
            game_over_delay: 2.0,
            game_over_hold: 3.0,
            spawn_safety_radius: 150.0,
            bullet_lifetime: 1.0,
            bullet_speed: 500.0,
            debug_mode: false,
            rng_seed: None,
        }
    }
}

/// Closed-open range of seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    /// Lower bound
    pub min: f32,
    /// Upper bound (exclusive)
    pub max: f32,
}

/// Wave and UFO spawning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawningConfig {
    /// Asteroids in a wave before the wave number is added
    pub wave_base: u32,

    /// Most asteroids a wave can hold
    pub wave_cap: u32,

    /// Seconds between a wave being cleared and the next one appearing
    pub wave_delay: f32,

    /// Usual delay before a UFO shows up
    pub ufo_delay_common: DelayRange,

    /// Occasional longer delay before a UFO shows up
    pub ufo_delay_rare: DelayRange,

    /// Probability of drawing from the common range
    pub ufo_common_chance: f64,

    /// Probability that a UFO is the small variant
    pub small_ufo_chance: f64,
}

impl SpawningConfig {
    /// Asteroid count for wave number `wave`
    pub fn wave_size(&self, wave: u32) -> u32 {
        self.wave_base.saturating_add(wave).min(self.wave_cap)
    }
}

impl Default for SpawningConfig {
    fn default() -> Self {
        Self {
            wave_base: 3,
            wave_cap: 10,
            wave_delay: 1.0,
            ufo_delay_common: DelayRange { min: 5.0, max: 10.0 },
            ufo_delay_rare: DelayRange { min: 15.0, max: 25.0 },
            ufo_common_chance: 0.75,
            small_ufo_chance: 0.3,
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per asteroid, indexed by tier 1..=3
    pub asteroid_points: [u32; 3],

    /// Points for a big UFO
    pub big_ufo_points: u32,

    /// Points for a small UFO
    pub small_ufo_points: u32,

    /// An extra life is awarded every time the score crosses a multiple of this
    pub extra_life_every: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            asteroid_points: [25, 50, 100],
            big_ufo_points: 200,
            small_ufo_points: 1000,
            extra_life_every: 10_000,
        }
    }
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Rotate counter-clockwise
    pub turn_left: KeyCode,

    /// Rotate clockwise
    pub turn_right: KeyCode,

    /// Thrust key
    pub thrust: KeyCode,

    /// Fire key
    pub fire: KeyCode,

    /// Toggle debug drawing
    pub toggle_debug: KeyCode,

    /// Quit the game
    pub exit: KeyCode,

    /// Start a game from the menu
    pub start: KeyCode,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            turn_left: KeyCode::A,
            turn_right: KeyCode::D,
            thrust: KeyCode::W,
            fire: KeyCode::Space,
            toggle_debug: KeyCode::Grave,
            exit: KeyCode::Escape,
            start: KeyCode::Enter,
        }
    }
}
