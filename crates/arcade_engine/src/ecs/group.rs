//! Groups: ordered sub-collections layered over the [`Registry`](super::Registry).
//!
//! A group keeps its own member sequence and records every member's position
//! in it. Positions are kept in sync with the sequence on every removal, and
//! the group's scan cursor is adjusted the same way the registry's update
//! cursor is, so a scan survives removal of the current or any other member.

use super::EntityId;
use bitflags::bitflags;
use crate::foundation::collections::{DefaultKey, SecondaryMap};

/// Maximum number of groups a single registry can hold
pub const MAX_GROUPS: usize = 32;

/// Identifier of a group inside one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) u8);

impl GroupId {
    /// Position of the group in its registry
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub(crate) fn mask(self) -> GroupMask {
        GroupMask::from_bits_retain(1 << self.0)
    }
}

bitflags! {
    /// Set of groups an entity belongs to, one bit per [`GroupId`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GroupMask: u32 {
        const _ = !0;
    }
}

/// Ordered membership list of one group
#[derive(Debug)]
pub struct Group {
    name: &'static str,
    members: Vec<EntityId>,
    positions: SecondaryMap<DefaultKey, usize>,
    cursor: Option<usize>,
}

impl Group {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            members: Vec::new(),
            positions: SecondaryMap::new(),
            cursor: None,
        }
    }

    /// Name the group was registered with
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order
    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    /// Whether `id` is a member
    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(id.0)
    }

    /// Recorded position of `id` within this group
    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.positions.get(id.0).copied()
    }

    pub(crate) fn insert(&mut self, id: EntityId) -> bool {
        if self.positions.contains_key(id.0) {
            return false;
        }
        self.positions.insert(id.0, self.members.len());
        self.members.push(id);
        true
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        let Some(index) = self.positions.remove(id.0) else {
            return false;
        };
        debug_assert_eq!(self.members[index], id, "group '{}' position out of sync", self.name);

        self.members.remove(index);
        for later in &self.members[index..] {
            if let Some(position) = self.positions.get_mut(later.0) {
                *position -= 1;
            }
        }

        if let Some(cursor) = self.cursor.as_mut() {
            if index < *cursor {
                *cursor -= 1;
            }
        }
        true
    }

    /// Drop every membership record, returning the former members
    pub(crate) fn clear(&mut self) -> Vec<EntityId> {
        self.positions.clear();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = 0;
        }
        std::mem::take(&mut self.members)
    }

    pub(crate) fn begin(&mut self) {
        self.cursor = Some(0);
    }

    pub(crate) fn advance(&mut self) -> Option<EntityId> {
        let cursor = self.cursor.as_mut()?;
        let id = *self.members.get(*cursor)?;
        *cursor += 1;
        Some(id)
    }

    pub(crate) fn end(&mut self) {
        self.cursor = None;
    }
}
