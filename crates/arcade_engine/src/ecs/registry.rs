//! Entity registry
//!
//! Owns every live entity in an arena of generational slots and keeps the
//! registration order in a separate live sequence. Update and draw passes walk
//! that sequence; the update pass uses a cursor so callbacks may add or destroy
//! entities (including the one being processed) without any entity being
//! skipped or processed twice:
//!
//! - entities appended during a pass are processed in the same pass
//! - destroying an entity at or before the cursor pulls the cursor back by one
//! - destroying an entity after the cursor leaves the cursor alone
//!
//! The same bookkeeping applies to each [`Group`] and its scan cursor.

use super::group::{Group, GroupId, GroupMask, MAX_GROUPS};
use super::EntityId;
use crate::foundation::collections::{DefaultKey, SlotMap};
use thiserror::Error;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Every group bit is already taken
    #[error("group capacity exhausted ({0} groups max)")]
    GroupCapacity(usize),
}

#[derive(Debug)]
struct Slot<T> {
    index: usize,
    groups: GroupMask,
    value: T,
}

/// Registry of live entities of payload type `T`
#[derive(Debug)]
pub struct Registry<T> {
    slots: SlotMap<DefaultKey, Slot<T>>,
    order: Vec<EntityId>,
    cursor: Option<usize>,
    groups: Vec<Group>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            slots: SlotMap::new(),
            order: Vec::new(),
            cursor: None,
            groups: Vec::new(),
        }
    }

    /// Register a new group
    pub fn register_group(&mut self, name: &'static str) -> Result<GroupId, RegistryError> {
        let index = self.groups.len();
        if index >= MAX_GROUPS {
            return Err(RegistryError::GroupCapacity(MAX_GROUPS));
        }
        self.groups.push(Group::new(name));
        // MAX_GROUPS fits in a u8
        Ok(GroupId(index as u8))
    }

    // ----- membership of the live sequence -----

    /// Append an entity to the live sequence
    pub fn add(&mut self, value: T) -> EntityId {
        let index = self.order.len();
        let key = self.slots.insert(Slot {
            index,
            groups: GroupMask::empty(),
            value,
        });
        let id = EntityId(key);
        self.order.push(id);
        id
    }

    /// Append an entity and make it a member of `group`
    pub fn add_to_group(&mut self, value: T, group: GroupId) -> EntityId {
        let id = self.add(value);
        self.join(id, group);
        id
    }

    /// Destroy an entity.
    ///
    /// Detaches it from every group it belongs to, then removes it from the
    /// live sequence. Returns `None` when the entity is already gone, so
    /// calling this twice is the same as calling it once.
    pub fn destroy(&mut self, id: EntityId) -> Option<T> {
        let slot = self.slots.remove(id.0)?;

        for (index, group) in self.groups.iter_mut().enumerate() {
            if slot.groups.intersects(GroupId(index as u8).mask()) {
                group.remove(id);
            }
        }

        let index = slot.index;
        debug_assert_eq!(self.order[index], id, "registry index out of sync");
        self.order.remove(index);
        for later in &self.order[index..] {
            if let Some(other) = self.slots.get_mut(later.0) {
                other.index -= 1;
            }
        }

        if let Some(cursor) = self.cursor.as_mut() {
            if index < *cursor {
                *cursor -= 1;
            }
        }

        Some(slot.value)
    }

    /// Destroy every entity and empty every group
    pub fn remove_all(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
        self.slots.clear();
        self.order.clear();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = 0;
        }
    }

    /// Whether `id` refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(id.0)
    }

    /// Borrow a live entity
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.value)
    }

    /// Mutably borrow a live entity
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.value)
    }

    /// Position of `id` in the live sequence
    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.slots.get(id.0).map(|slot| slot.index)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live entity ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    /// Live entities in registration order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.slots.get(id.0).map(|slot| (*id, &slot.value)))
    }

    // ----- update / draw passes -----

    /// Start an update pass at the head of the live sequence
    pub fn begin_pass(&mut self) {
        self.cursor = Some(0);
    }

    /// Next entity to process in the current pass
    pub fn next_in_pass(&mut self) -> Option<EntityId> {
        let cursor = self.cursor.as_mut()?;
        let id = *self.order.get(*cursor)?;
        *cursor += 1;
        Some(id)
    }

    /// Finish the current update pass
    pub fn end_pass(&mut self) {
        self.cursor = None;
    }

    /// Run `update` once for every entity, in registration order.
    ///
    /// `update` receives the registry itself and may add or destroy entities.
    pub fn update_all<F>(&mut self, mut update: F)
    where
        F: FnMut(&mut Self, EntityId),
    {
        self.begin_pass();
        while let Some(id) = self.next_in_pass() {
            update(self, id);
        }
        self.end_pass();
    }

    /// Fallible variant of [`Registry::update_all`]; stops at the first error
    pub fn try_update_all<F, E>(&mut self, mut update: F) -> Result<(), E>
    where
        F: FnMut(&mut Self, EntityId) -> Result<(), E>,
    {
        self.begin_pass();
        while let Some(id) = self.next_in_pass() {
            if let Err(err) = update(self, id) {
                self.end_pass();
                return Err(err);
            }
        }
        self.end_pass();
        Ok(())
    }

    /// Single forward pass over live entities
    pub fn draw_all<F>(&self, mut draw: F)
    where
        F: FnMut(EntityId, &T),
    {
        for (id, value) in self.iter() {
            draw(id, value);
        }
    }

    // ----- groups -----

    /// Borrow a group
    pub fn group(&self, group: GroupId) -> Option<&Group> {
        self.groups.get(group.index())
    }

    /// Number of members in `group`
    pub fn group_len(&self, group: GroupId) -> usize {
        self.group(group).map_or(0, Group::len)
    }

    /// Members of `group` in insertion order
    pub fn group_members(&self, group: GroupId) -> &[EntityId] {
        self.group(group).map_or(&[], Group::members)
    }

    /// First member of `group`
    pub fn first_in_group(&self, group: GroupId) -> Option<EntityId> {
        self.group_members(group).first().copied()
    }

    /// Whether `id` is a member of `group`
    pub fn is_member(&self, id: EntityId, group: GroupId) -> bool {
        self.group(group).is_some_and(|g| g.contains(id))
    }

    /// Make a live entity a member of `group`
    pub fn join(&mut self, id: EntityId, group: GroupId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0) else {
            return false;
        };
        let Some(target) = self.groups.get_mut(group.index()) else {
            log::warn!("join: unknown group {:?}", group);
            return false;
        };
        if target.insert(id) {
            slot.groups.insert(group.mask());
            true
        } else {
            false
        }
    }

    /// Remove an entity from `group` without destroying it
    pub fn leave(&mut self, id: EntityId, group: GroupId) -> bool {
        let Some(target) = self.groups.get_mut(group.index()) else {
            return false;
        };
        if !target.remove(id) {
            return false;
        }
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.groups.remove(group.mask());
        }
        true
    }

    /// Drop every membership record of `group`; members stay alive
    pub fn clear_group(&mut self, group: GroupId) {
        let Some(target) = self.groups.get_mut(group.index()) else {
            return;
        };
        for id in target.clear() {
            if let Some(slot) = self.slots.get_mut(id.0) {
                slot.groups.remove(group.mask());
            }
        }
    }

    /// Destroy every member of `group`, returning how many were destroyed
    pub fn destroy_group(&mut self, group: GroupId) -> usize {
        let members: Vec<EntityId> = self.group_members(group).to_vec();
        members
            .into_iter()
            .filter(|id| self.destroy(*id).is_some())
            .count()
    }

    /// Start a cursor scan of `group`
    pub fn group_begin(&mut self, group: GroupId) {
        if let Some(target) = self.groups.get_mut(group.index()) {
            target.begin();
        }
    }

    /// Next member of the running scan of `group`
    pub fn group_next(&mut self, group: GroupId) -> Option<EntityId> {
        self.groups.get_mut(group.index())?.advance()
    }

    /// Finish the scan of `group`
    pub fn group_end(&mut self, group: GroupId) {
        if let Some(target) = self.groups.get_mut(group.index()) {
            target.end();
        }
    }

    /// Visit every member of `group` with a cursor scan.
    ///
    /// `visit` may destroy the current member or any other entity.
    pub fn iterate_group<F>(&mut self, group: GroupId, mut visit: F)
    where
        F: FnMut(&mut Self, EntityId),
    {
        self.group_begin(group);
        while let Some(id) = self.group_next(group) {
            visit(self, id);
        }
        self.group_end(group);
    }
}
