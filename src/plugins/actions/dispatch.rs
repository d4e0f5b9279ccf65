//! Producer side of the action transport.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::identity::{LocalUser, NetworkId, UserId};

use super::messages::{Action, ActionKind, PopBubble};

/// Stamps actions with the local user and the current time, then enqueues them.
///
/// Producers only write intent here. Nothing dispatched is visible to receptors until
/// the next `PreUpdate`.
#[derive(SystemParam)]
pub struct Dispatcher<'w> {
    time: Res<'w, Time<Virtual>>,
    local: Res<'w, LocalUser>,
    writer: MessageWriter<'w, Action>,
}

impl Dispatcher<'_> {
    #[inline]
    pub fn local_user(&self) -> UserId {
        self.local.0
    }

    pub fn dispatch(&mut self, kind: ActionKind) {
        self.writer.write(Action {
            time: self.time.elapsed_secs_f64(),
            from: self.local.0,
            kind,
        });
    }

    /// A pop is always followed by the destroy of its subject.
    pub fn pop_and_destroy(&mut self, pop: PopBubble) {
        let subject = pop.subject;
        self.dispatch(ActionKind::PopBubble(pop));
        self.destroy(subject);
    }

    #[inline]
    pub fn destroy(&mut self, subject: NetworkId) {
        self.dispatch(ActionKind::DestroyObject { subject });
    }
}
