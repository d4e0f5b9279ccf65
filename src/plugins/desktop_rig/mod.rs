//! Keyboard stand-in for the XR hand rig (render-only).
//!
//! WASD moves the right hand in the x/z plane, Q/E lowers and raises it. The left hand
//! rests beside the emitter.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::pop::HandRig;

const HAND_SPEED: f32 = 1.2;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, insert_rig)
        .add_systems(Update, move_right_hand);
}

fn insert_rig(mut commands: Commands, tunables: Res<Tunables>) {
    let center = tunables.emitter_position;
    commands.insert_resource(HandRig {
        left: center + Vec3::new(0.4, -0.2, 0.0),
        right: center + Vec3::new(-0.4, 0.0, 0.3),
    });
}

fn move_right_hand(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut rig: ResMut<HandRig>,
) {
    let mut axis = Vec3::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyQ) {
        axis.y -= 1.0;
    }

    if axis.length_squared() > 0.0 {
        rig.right += axis.normalize() * HAND_SPEED * time.delta_secs();
    }
}
