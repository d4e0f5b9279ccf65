//! The closed set of actions carried by the transport.
//!
//! Detection systems never touch the ledger or despawn networked entities themselves.
//! They dispatch an [`Action`]; receptors apply it on a later scheduler turn.
//!
//! ```text
//!   dispatch (tick N)            deliver (PreUpdate, tick N+1)
//!   pop pipeline ──┐             ┌── record_actions        -> ActionLog
//!   emitter ───────┼─ Action ────┼── receive_pop_actions   -> ScoreLedger
//!   teardown ──────┘             └── apply_presence_actions -> despawn / materialise
//! ```

use bevy::prelude::*;

use crate::common::identity::{NetworkId, UserId};

/// Physical state of the body responsible for a pop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopHit {
    pub velocity: Vec3,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopBubble {
    pub subject: NetworkId,
    /// `false` when the bubble escaped past the travel limit.
    pub player_popped: bool,
    pub hit: Option<PopHit>,
}

impl PopBubble {
    pub fn by_player(subject: NetworkId, velocity: Vec3, position: Vec3) -> Self {
        Self {
            subject,
            player_popped: true,
            hit: Some(PopHit { velocity, position }),
        }
    }

    pub fn escaped(subject: NetworkId) -> Self {
        Self {
            subject,
            player_popped: false,
            hit: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActionKind {
    PopBubble(PopBubble),
    DestroyObject { subject: NetworkId },
    SpawnBubble { subject: NetworkId, position: Vec3 },
}

impl ActionKind {
    /// The networked object this action is about.
    pub fn subject(&self) -> NetworkId {
        match self {
            ActionKind::PopBubble(pop) => pop.subject,
            ActionKind::DestroyObject { subject } | ActionKind::SpawnBubble { subject, .. } => *subject,
        }
    }
}

/// A timestamped action from one participant.
///
/// Delivery is reliable and in dispatch order. It is not idempotent: receptors must
/// tolerate re-delivery and actions about objects that are already gone.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct Action {
    /// Seconds of virtual time at dispatch.
    pub time: f64,
    pub from: UserId,
    pub kind: ActionKind,
}
