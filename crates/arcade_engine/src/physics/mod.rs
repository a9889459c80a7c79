//! Physics module for collision detection
//!
//! Entities take part in collision resolution by exposing a circle through
//! the [`RadiusCollider`] capability.

pub mod collision;

pub use collision::{overlaps, BoundingCircle, RadiusCollider};
