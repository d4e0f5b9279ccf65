//! Network presence receptor.
//!
//! Drives the presence machine `Present -> PendingDestroy -> Absent` from the action
//! stream. `PendingDestroy` is set by whoever dispatched the destroy; this receptor
//! performs the final transition by despawning the entity.

use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

use crate::common::identity::{NetworkId, NetworkObject};
use crate::common::tunables::Tunables;
use crate::plugins::emitter::components::BubbleEmitter;
use crate::plugins::emitter::spawn::spawn_free_bubble;

use super::messages::{Action, ActionKind};

fn find_object(q: &Query<(Entity, &NetworkObject)>, id: NetworkId) -> Option<Entity> {
    q.iter().find(|(_, net)| net.id == id).map(|(e, _)| e)
}

/// Apply spawn and destroy actions to the world.
///
/// A spawn materialises a free bubble on every participant, the sender included, unless
/// its subject already exists (a queue refill) or was spawned before. Subjects are never
/// reused, so a re-delivered spawn after the bubble is gone does not bring it back.
pub fn apply_presence_actions(
    mut commands: Commands,
    mut reader: MessageReader<Action>,
    tunables: Res<Tunables>,
    q_objects: Query<(Entity, &NetworkObject)>,
    mut q_emitters: Query<&mut BubbleEmitter>,
    mut known: Local<HashSet<NetworkId>>,
    mut materialised: Local<HashMap<NetworkId, Entity>>,
    mut removed: Local<HashSet<Entity>>,
) {
    removed.clear();
    materialised.clear();

    for action in reader.read() {
        match action.kind {
            ActionKind::SpawnBubble { subject, position } => {
                if !known.insert(subject) || find_object(&q_objects, subject).is_some() {
                    continue;
                }
                let e = spawn_free_bubble(
                    &mut commands,
                    &tunables,
                    position,
                    NetworkObject::new(subject),
                );
                materialised.insert(subject, e);
            }
            ActionKind::DestroyObject { subject } => {
                known.insert(subject);
                // Spawned earlier in this batch: not visible to the query yet.
                let Some(entity) = materialised
                    .remove(&subject)
                    .or_else(|| find_object(&q_objects, subject))
                else {
                    debug!("destroy for absent {subject} ignored");
                    continue;
                };
                if !removed.insert(entity) {
                    continue;
                }
                for mut emitter in &mut q_emitters {
                    emitter.remove_bubble(entity);
                }
                commands.entity(entity).try_despawn();
            }
            ActionKind::PopBubble(_) => {}
        }
    }
}
