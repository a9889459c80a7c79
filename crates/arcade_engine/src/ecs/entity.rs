//! Entity implementation

use crate::foundation::collections::DefaultKey;

/// Entity identifier.
///
/// Wraps a generational slot-map key: once an entity is destroyed its id
/// never resolves again, even if the underlying slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) DefaultKey);

impl EntityId {
    /// Get the underlying slot-map key
    pub fn key(&self) -> DefaultKey {
        self.0
    }
}
