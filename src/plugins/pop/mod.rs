//! Pop pipeline: physical state -> authoritative pop actions.
//!
//! ```text
//! OnEnter(InGame)   spawn_hands: anchor (kinematic) + collider (dynamic) + fixed joint
//!
//! FixedUpdate
//!   sync_hand_targets        HandRig -> anchor KinematicTarget
//!   drift_bubbles            z > max_travel ? escape pop + destroy : wobble along +z
//!   drive_kinematic_targets  (physics plugin)
//!
//! FixedPostUpdate, after avian contact bookkeeping
//!   pop_touched_bubbles      hand CollidingEntities (networked, present) -> player pop + destroy
//! ```
//!
//! Nothing here despawns or scores. The pipeline marks subjects `PendingDestroy` and
//! dispatches; presence and ledger receptors apply the result next frame.

pub mod collision;
pub mod drift;
pub mod hands;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::physics::drive_kinematic_targets;

pub use hands::{Hand, HandAnchor, HandRig, Handedness};

pub struct PopPipelinePlugin;

impl Plugin for PopPipelinePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), hands::spawn_hands);

        app.add_systems(
            FixedUpdate,
            (hands::sync_hand_targets, drift::drift_bubbles)
                .before(drive_kinematic_targets)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::pop_touched_bubbles
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
