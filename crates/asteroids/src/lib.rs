//! # Asteroids
//!
//! The game rules of a classic Asteroids clone, built on `arcade_engine`.
//!
//! A [`Session`] owns everything that changes during play: the entity
//! [`World`], the command scheduler, the [`Progression`] state machine and the
//! RNG. Hosts drive it through the engine's [`Application`] trait, tests drive
//! it directly with [`Session::advance`].
//!
//! [`Application`]: arcade_engine::Application

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod collisions;
pub mod commands;
pub mod components;
pub mod config;
pub mod controls;
pub mod error;
pub mod progression;
pub mod session;
pub mod world;

pub use commands::Command;
pub use config::GameConfig;
pub use controls::Actions;
pub use error::GameError;
pub use progression::{GamePhase, Progression};
pub use session::Session;
pub use world::World;
