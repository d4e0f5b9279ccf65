//! Hand proxies.
//!
//! Each hand is a kinematic anchor that chases the rig pose plus a dynamic collider
//! welded to it. Only the dynamic body tracks its contacts.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::hand_layers;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::KinematicTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub const BOTH: [Handedness; 2] = [Handedness::Left, Handedness::Right];
}

/// Kinematic body that follows the tracked hand.
#[derive(Component, Debug, Clone, Copy)]
pub struct HandAnchor(pub Handedness);

/// Dynamic collider body that pops bubbles.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hand(pub Handedness);

/// World-space hand poses, written by whatever tracks the player's hands.
///
/// Absent until the avatar rig is available. Pop detection is off while it is missing.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct HandRig {
    pub left: Vec3,
    pub right: Vec3,
}

impl HandRig {
    #[inline]
    pub fn pose(&self, hand: Handedness) -> Vec3 {
        match hand {
            Handedness::Left => self.left,
            Handedness::Right => self.right,
        }
    }
}

pub fn spawn_hands(mut commands: Commands, tunables: Res<Tunables>) {
    for hand in Handedness::BOTH {
        let anchor = commands
            .spawn((
                Name::new(format!("{hand:?}Hand Kinematic")),
                HandAnchor(hand),
                Transform::default(),
                RigidBody::Kinematic,
                KinematicTarget::lerped(Vec3::ZERO, tunables.hand_lerp_multiplier),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        let body = commands
            .spawn((
                Name::new(format!("{hand:?}Hand Dynamic")),
                Hand(hand),
                Transform::default(),
                RigidBody::Dynamic,
                Collider::sphere(tunables.hand_radius),
                Mass(tunables.hand_mass),
                hand_layers(),
                SweptCcd::default(),
                // Avian only tracks current contacts for bodies that carry this.
                CollidingEntities::default(),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        commands.spawn((
            Name::new(format!("{hand:?}Hand Joint")),
            FixedJoint::new(anchor, body),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn sync_hand_targets(
    rig: Option<Res<HandRig>>,
    mut q_anchors: Query<(&HandAnchor, &mut KinematicTarget)>,
) {
    let Some(rig) = rig else {
        return;
    };
    for (anchor, mut target) in &mut q_anchors {
        target.position = rig.pose(anchor.0);
    }
}
