//! Hand contact -> player pop.

use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::identity::{NetworkObject, Presence};
use crate::plugins::actions::{Dispatcher, PopBubble};

use super::hands::{Hand, HandRig};

/// Dispatch a player pop plus a destroy for every networked body a hand is touching.
///
/// Reads the hands' current contacts rather than contact starts, so a touch that began
/// while the rig was missing still pops once the rig is back. A subject is popped once
/// per tick, and never again while its destroy is pending. Bodies without a network
/// identity are not scorable and are skipped.
pub fn pop_touched_bubbles(
    rig: Option<Res<HandRig>>,
    q_hands: Query<(&CollidingEntities, &LinearVelocity, &Position), With<Hand>>,
    q_bodies: Query<&ColliderOf>,
    mut q_objects: Query<&mut NetworkObject>,
    mut dispatcher: Dispatcher,
    mut seen: Local<HashSet<Entity>>,
    mut touching: Local<Vec<Entity>>,
) {
    if rig.is_none() {
        // No rig yet: hand poses are meaningless this tick.
        return;
    }
    seen.clear();

    for (colliding, velocity, position) in &q_hands {
        touching.clear();
        touching.extend(colliding.0.iter().copied());
        touching.sort_unstable();

        for collider in touching.iter().copied() {
            let subject = q_bodies.get(collider).map_or(collider, |of| of.body);
            if !seen.insert(subject) {
                continue;
            }

            let Ok(mut network) = q_objects.get_mut(subject) else {
                continue;
            };
            if !network.is_present() {
                continue;
            }

            network.presence = Presence::PendingDestroy;
            dispatcher.pop_and_destroy(PopBubble::by_player(network.id, velocity.0, position.0));
        }
    }
}
