//! Participant and network identities.

use std::fmt;

use bevy::prelude::*;

/// A participant in the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user#{}", self.0)
    }
}

/// The participant running this app. Every dispatched action is stamped with it.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalUser(pub UserId);

/// Network identity of a shared object.
///
/// Serials are allocated per owner, so two peers never mint the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId {
    pub owner: UserId,
    pub serial: u32,
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_bubble_{}", self.owner.0, self.serial)
    }
}

/// Hands out fresh [`NetworkId`]s for the local user. Ids are never reused.
#[derive(Resource, Debug, Default)]
pub struct NetworkIdAllocator {
    next_serial: u32,
}

impl NetworkIdAllocator {
    pub fn allocate(&mut self, owner: UserId) -> NetworkId {
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        NetworkId { owner, serial }
    }
}

/// Network presence of a shared entity.
///
/// `Absent` has no variant: an absent object has no entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Present,
    /// A destroy action was dispatched but has not been delivered yet.
    PendingDestroy,
}

/// Marks an entity as a networked object with an identity peers agree on.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkObject {
    pub id: NetworkId,
    pub presence: Presence,
}

impl NetworkObject {
    pub fn new(id: NetworkId) -> Self {
        Self { id, presence: Presence::Present }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.presence == Presence::Present
    }
}
