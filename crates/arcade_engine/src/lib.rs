//! # Arcade Engine
//!
//! The runtime core of a small 2D arcade game, with no graphics, window or
//! audio backend of its own.
//!
//! ## Features
//!
//! - **Entity Registry**: generational arena with update passes that survive
//!   adding and destroying entities mid-pass
//! - **Groups**: ordered sub-collections with their own mutation-safe scans
//! - **Scheduler**: deferred one-shot commands driven by frame time
//! - **Radius Colliders**: circle overlap tests behind a capability trait
//! - **Host Loop**: input edges, draw lists and sound cues handed to a host
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn draw(&self, frame: &mut dyn DrawContext) {
//!         // Describe the frame
//!     }
//! }
//!
//! struct NullHost;
//!
//! impl Host for NullHost {
//!     fn poll(&mut self, _input: &mut InputManager) -> bool { true }
//!     fn present(&mut self, _frame: &DrawList) {}
//!     fn play(&mut self, _cue: SoundCue) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Engine::run(EngineConfig::headless(600), &mut NullHost, &mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod events;
pub mod physics;
pub mod input;
pub mod render;
pub mod audio;
pub mod config;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineConfig, EngineError, Host};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineConfig, EngineError, Host,
        foundation::{
            math::{Point2, Rect, Vec2},
            time::Timer,
        },
        ecs::{EntityId, Group, GroupId, Registry},
        events::Scheduler,
        physics::{BoundingCircle, RadiusCollider},
        input::{InputManager, KeyCode},
        render::{Color, DrawContext, DrawList, VisualHandle},
        audio::{SoundCue, SoundId, SoundQueue},
        config::{Config, ConfigError},
    };
}
