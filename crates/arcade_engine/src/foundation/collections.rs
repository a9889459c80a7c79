//! Specialized collection types
//!
//! Generational slot maps back entity storage: a key stays unique for the
//! lifetime of the map, so a stale key never resolves to a newer value.

pub use slotmap::{DefaultKey, SecondaryMap, SlotMap};
