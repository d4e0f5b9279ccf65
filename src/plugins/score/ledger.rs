//! Event-sourced score ledger.
//!
//! The ledger is derived state. It only ever changes through [`ScoreLedger::apply`],
//! one delivered action at a time, so replaying a recorded log rebuilds it exactly.

use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

use crate::common::identity::{NetworkId, UserId};
use crate::plugins::actions::{Action, ActionKind};

/// One scored pop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopRecord {
    pub time: f64,
    pub velocity: Vec3,
    pub position: Vec3,
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ScoreLedger {
    histories: HashMap<UserId, Vec<PopRecord>>,
    /// Users in the order their first pop arrived.
    users: Vec<UserId>,
    /// Subjects destroyed earlier in the stream. Later pops about them are stale.
    retired: HashSet<NetworkId>,
}

impl ScoreLedger {
    /// Rebuild a ledger from an ordered action log.
    pub fn replay<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Self {
        let mut ledger = Self::default();
        for action in actions {
            ledger.apply(action);
        }
        ledger
    }

    /// Fold one action in. Returns the record appended, if any.
    ///
    /// Only player pops score, attributed to the dispatching user. A pop about a subject
    /// that was already destroyed is ignored.
    pub fn apply(&mut self, action: &Action) -> Option<PopRecord> {
        match action.kind {
            ActionKind::PopBubble(pop) => {
                if !pop.player_popped || self.retired.contains(&pop.subject) {
                    return None;
                }
                let hit = pop.hit?;
                let record = PopRecord {
                    time: action.time,
                    velocity: hit.velocity,
                    position: hit.position,
                };
                self.append(action.from, record);
                Some(record)
            }
            ActionKind::DestroyObject { subject } => {
                self.retired.insert(subject);
                None
            }
            ActionKind::SpawnBubble { .. } => None,
        }
    }

    fn append(&mut self, user: UserId, record: PopRecord) {
        let history = self.histories.entry(user).or_insert_with(|| {
            self.users.push(user);
            Vec::new()
        });
        history.push(record);
    }

    pub fn history(&self, user: UserId) -> &[PopRecord] {
        self.histories.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn latest(&self, user: UserId) -> Option<&PopRecord> {
        self.history(user).last()
    }

    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn first_user(&self) -> Option<UserId> {
        self.users.first().copied()
    }

    pub fn total_pops(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }

    pub fn is_retired(&self, subject: NetworkId) -> bool {
        self.retired.contains(&subject)
    }
}
