//! Physics: avian3d, no gravity, kinematic pose targets.

use avian3d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec3::ZERO));
    app.add_systems(FixedUpdate, drive_kinematic_targets);
}

/// Target pose for a kinematic body.
///
/// With `lerp_multiplier == 0` the body snaps to the target. Otherwise it is moved by
/// velocity so that it closes `1 - exp(-lerp_multiplier * dt)` of the gap each step,
/// which lets joints and contacts see the motion.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KinematicTarget {
    pub position: Vec3,
    pub lerp_multiplier: f32,
}

impl KinematicTarget {
    pub fn teleport(position: Vec3) -> Self {
        Self {
            position,
            lerp_multiplier: 0.0,
        }
    }

    pub fn lerped(position: Vec3, lerp_multiplier: f32) -> Self {
        Self {
            position,
            lerp_multiplier,
        }
    }

    /// Where the body should be after a step of `dt` seconds from `current`.
    pub fn step_from(&self, current: Vec3, dt: f32) -> Vec3 {
        if self.lerp_multiplier <= 0.0 {
            return self.position;
        }
        let alpha = 1.0 - (-self.lerp_multiplier * dt).exp();
        current + (self.position - current) * alpha
    }
}

pub fn drive_kinematic_targets(
    time: Res<Time>,
    mut q: Query<(&KinematicTarget, &mut Transform, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();

    for (target, mut tf, mut vel) in &mut q {
        if target.lerp_multiplier <= 0.0 || dt <= 0.0 {
            tf.translation = target.position;
            vel.0 = Vec3::ZERO;
            continue;
        }
        let next = target.step_from(tf.translation, dt);
        vel.0 = (next - tf.translation) / dt;
    }
}

#[cfg(test)]
mod tests;
