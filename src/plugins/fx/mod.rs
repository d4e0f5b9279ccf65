//! Reactive bridges.
//!
//! These own no lifecycle state. Each one reacts to a message and writes presentation:
//! - `ActiveBubbleChanged` -> `arm_active_bubble` (collision filters)
//! - `LedgerAppended`      -> `trigger_pop_particles`, `refresh_score_counter`

pub mod arming;
pub mod counter;
pub mod particles;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use counter::ScoreCounter;
pub use particles::{ParticleBurst, PopParticles};

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), particles::spawn_pop_particles)
        .add_systems(OnExit(GameState::InGame), particles::release_pop_particles);

    app.add_systems(
        PostUpdate,
        (
            arming::arm_active_bubble,
            counter::attach_score_counter,
            particles::trigger_pop_particles,
            counter::refresh_score_counter,
        )
            .run_if(in_state(GameState::InGame)),
    );
}
