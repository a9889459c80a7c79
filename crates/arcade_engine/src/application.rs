//! Application trait and lifecycle management

use crate::audio::SoundCue;
use crate::config::ConfigError;
use crate::engine::Engine;
use crate::render::DrawContext;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame.
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        Ok(())
    }

    /// Update the application
    ///
    /// Called every frame. Implement your game logic here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine (input state, timing)
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Draw the current state
    ///
    /// Called after update. Must not change game state.
    fn draw(&self, frame: &mut dyn DrawContext);

    /// Sound cues produced since the last call
    fn drain_sounds(&mut self) -> Vec<SoundCue> {
        Vec::new()
    }

    /// Whether the application asked to close
    fn should_exit(&self) -> bool {
        false
    }

    /// Cleanup the application
    ///
    /// Called when the main loop ends.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
