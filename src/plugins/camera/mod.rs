//! Camera and debug view (render-only).
//!
//! The XR renderer is not part of this crate. On desktop we look at the play space from
//! behind the player and draw bubbles and hands as gizmo spheres.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::emitter::Bubble;
use crate::plugins::pop::Hand;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            (draw_bubbles, draw_hands).run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let focus = tunables.emitter_position + Vec3::Z * tunables.max_travel * 0.5;

    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        Transform::from_xyz(1.2, 1.8, -1.4).looking_at(focus, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight::default(),
        Transform::from_xyz(2.0, 4.0, -2.0).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}

fn draw_bubbles(mut gizmos: Gizmos, tunables: Res<Tunables>, q: Query<(&Transform, &Bubble)>) {
    for (tf, bubble) in &q {
        gizmos.sphere(
            Isometry3d::from_translation(tf.translation),
            tunables.bubble_radius,
            Color::srgba(0.55, 0.85, 1.0, bubble.opacity),
        );
    }
}

fn draw_hands(mut gizmos: Gizmos, tunables: Res<Tunables>, q: Query<&Transform, With<Hand>>) {
    for tf in &q {
        gizmos.sphere(
            Isometry3d::from_translation(tf.translation),
            tunables.hand_radius,
            Color::srgb(1.0, 0.75, 0.3),
        );
    }
}
