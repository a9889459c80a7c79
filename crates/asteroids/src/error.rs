//! Game errors

use arcade_engine::config::ConfigError;
use arcade_engine::ecs::RegistryError;
use arcade_engine::AppError;
use thiserror::Error;

/// Errors raised by the game layer
#[derive(Error, Debug)]
pub enum GameError {
    /// Asteroid tiers run from 1 (smallest) to 3
    #[error("invalid asteroid tier {0}, expected 1..=3")]
    InvalidAsteroidTier(u8),

    /// Bad configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry setup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Config(config) => Self::Config(config),
            other => Self::GameLogic(other.to_string()),
        }
    }
}
