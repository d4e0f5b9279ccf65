//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Head bubbles at or past this age are evicted silently.
    pub max_bubble_age: f32,
    /// Forward (z) distance past which a bubble escapes.
    pub max_travel: f32,
    pub wobble_amplitude: f32,
    pub wobble_frequency: f32,
    pub bubble_radius: f32,
    pub bubble_mass: f32,
    pub hand_radius: f32,
    pub hand_mass: f32,
    pub hand_lerp_multiplier: f32,
    pub active_opacity: f32,
    pub dimmed_opacity: f32,
    pub emitter_position: Vec3,
    pub min_queue_len: usize,
    /// Seconds between timed spawns.
    pub spawn_interval: f32,
    /// Radius of the ball around the emitter that timed spawns land in.
    pub spawn_jitter: f32,
    pub counter_height: f32,
    pub counter_scale: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            max_bubble_age: 5.0,
            max_travel: 1.5,
            wobble_amplitude: 0.1,
            wobble_frequency: 2.0,
            bubble_radius: 0.1,
            bubble_mass: 0.001,
            hand_radius: 0.1,
            hand_mass: 0.5,
            hand_lerp_multiplier: 50.0,
            active_opacity: 1.0,
            dimmed_opacity: 0.5,
            emitter_position: Vec3::new(0.0, 1.2, 0.0),
            min_queue_len: 1,
            spawn_interval: 3.0,
            spawn_jitter: 0.5,
            counter_height: 1.5,
            counter_scale: 15.0,
        }
    }
}
