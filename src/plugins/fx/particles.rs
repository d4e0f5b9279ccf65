//! Shared pop particle emitter.
//!
//! The burst is rendered elsewhere. This module owns where it is and when it restarts.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::score::LedgerAppended;

/// Burst settings read by the particle renderer.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    pub duration: f32,
    pub looping: bool,
    pub start_life: (f32, f32),
    pub start_speed: (f32, f32),
    pub start_size: f32,
    pub burst_count: u32,
    pub sphere_radius: f32,
    /// Bumped every time the burst restarts.
    pub restarts: u32,
}

impl Default for ParticleBurst {
    fn default() -> Self {
        Self {
            duration: 5.0,
            looping: false,
            start_life: (0.5, 1.0),
            start_speed: (1.0, 3.0),
            start_size: 0.075,
            burst_count: 50,
            sphere_radius: 0.125,
            restarts: 0,
        }
    }
}

impl ParticleBurst {
    #[inline]
    pub fn restart(&mut self) {
        self.restarts = self.restarts.wrapping_add(1);
    }
}

/// Handle to the session's shared particle emitter.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PopParticles(pub Entity);

pub fn spawn_pop_particles(mut commands: Commands) {
    let e = commands
        .spawn((
            Name::new("Bubble Pop Particles"),
            ParticleBurst::default(),
            Transform::default(),
            Visibility::Visible,
            DespawnOnExit(GameState::InGame),
        ))
        .id();
    commands.insert_resource(PopParticles(e));
}

pub fn release_pop_particles(mut commands: Commands) {
    commands.remove_resource::<PopParticles>();
}

/// Move the burst to each newly scored pop and restart it.
pub fn trigger_pop_particles(
    mut appended: MessageReader<LedgerAppended>,
    particles: Option<Res<PopParticles>>,
    mut q: Query<(&mut Transform, &mut ParticleBurst)>,
) {
    let Some(particles) = particles else {
        appended.clear();
        return;
    };
    let Ok((mut tf, mut burst)) = q.get_mut(particles.0) else {
        appended.clear();
        return;
    };

    for ev in appended.read() {
        tf.translation = ev.record.position;
        burst.restart();
    }
}
