//! Entity storage
//!
//! A [`Registry`] owns every live entity and drives the per-frame update and
//! draw passes. [`Group`]s are ordered sub-collections layered over it and can
//! be scanned with the same mutation-safe cursor discipline.

pub mod entity;
pub mod group;
pub mod registry;

pub use entity::EntityId;
pub use group::{Group, GroupId, GroupMask, MAX_GROUPS};
pub use registry::{Registry, RegistryError};
