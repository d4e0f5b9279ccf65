//! Bubble drift and escape.

use bevy::prelude::*;

use crate::common::identity::{NetworkObject, Presence};
use crate::common::tunables::Tunables;
use crate::plugins::actions::{Dispatcher, PopBubble};
use crate::plugins::emitter::Bubble;
use crate::plugins::physics::KinematicTarget;

/// Point on the wobble path at forward distance `z`.
#[inline]
pub fn wobble_position(start: Vec2, z: f32, amplitude: f32, frequency: f32) -> Vec3 {
    let phase = z * frequency;
    Vec3::new(
        start.x + phase.cos() * amplitude,
        start.y + phase.sin() * amplitude,
        z,
    )
}

/// Advance bubbles along +z, or pop them once they are past the travel limit.
///
/// An escaping bubble gets an unscored pop and a destroy, and does not move this tick.
/// Bubbles held behind an emitter head, or whose destroy is already pending, are left
/// alone.
pub fn drift_bubbles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(
        &Bubble,
        &mut Transform,
        &mut KinematicTarget,
        Option<&mut NetworkObject>,
    )>,
    mut dispatcher: Dispatcher,
) {
    let dt = time.delta_secs();

    for (bubble, mut tf, mut target, network) in &mut q {
        if bubble.held || network.as_ref().is_some_and(|n| !n.is_present()) {
            continue;
        }

        if tf.translation.z > tunables.max_travel {
            if let Some(mut network) = network {
                network.presence = Presence::PendingDestroy;
                dispatcher.pop_and_destroy(PopBubble::escaped(network.id));
            }
            continue;
        }

        tf.translation = wobble_position(
            bubble.start_offset,
            tf.translation.z + dt,
            tunables.wobble_amplitude,
            tunables.wobble_frequency,
        );
        target.position = tf.translation;
    }
}
