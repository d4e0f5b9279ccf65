//! Bubble bodies.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::identity::NetworkObject;
use crate::common::layers::{armed_bubble_layers, dormant_bubble_layers};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::KinematicTarget;

use super::components::Bubble;

fn spawn_bubble_body(
    commands: &mut Commands,
    tunables: &Tunables,
    position: Vec3,
    network: NetworkObject,
    bubble: Bubble,
    layers: CollisionLayers,
) -> Entity {
    commands
        .spawn((
            Name::new(network.id.to_string()),
            bubble,
            network,
            Transform::from_translation(position),
            RigidBody::Kinematic,
            Collider::sphere(tunables.bubble_radius),
            Mass(tunables.bubble_mass),
            layers,
            KinematicTarget::teleport(position),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// A queued bubble. Starts dimmed, held in place, and collides with nothing until it
/// becomes the head.
pub fn spawn_queued_bubble(
    commands: &mut Commands,
    tunables: &Tunables,
    position: Vec3,
    network: NetworkObject,
) -> Entity {
    spawn_bubble_body(
        commands,
        tunables,
        position,
        network,
        Bubble::queued(position.truncate(), tunables.dimmed_opacity),
        dormant_bubble_layers(),
    )
}

/// A bubble owned by no emitter queue (a timed or peer spawn). Always drifting and poppable.
pub fn spawn_free_bubble(
    commands: &mut Commands,
    tunables: &Tunables,
    position: Vec3,
    network: NetworkObject,
) -> Entity {
    spawn_bubble_body(
        commands,
        tunables,
        position,
        network,
        Bubble::new(position.truncate(), tunables.active_opacity),
        armed_bubble_layers(),
    )
}
