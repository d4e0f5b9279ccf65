use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, time_with_delta};

use super::KinematicTarget;

#[test]
fn teleport_target_snaps_transform() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.1));
    let e = world
        .spawn((
            KinematicTarget::teleport(Vec3::new(1.0, 2.0, 3.0)),
            Transform::default(),
            LinearVelocity(Vec3::X),
        ))
        .id();

    run_system_once(&mut world, super::drive_kinematic_targets);

    assert_eq!(world.get::<Transform>(e).unwrap().translation, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec3::ZERO);
}

#[test]
fn lerped_target_moves_by_velocity_toward_target() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.02));
    let e = world
        .spawn((
            KinematicTarget::lerped(Vec3::new(1.0, 0.0, 0.0), 50.0),
            Transform::default(),
            LinearVelocity(Vec3::ZERO),
        ))
        .id();

    run_system_once(&mut world, super::drive_kinematic_targets);

    // Transform is left to the solver.
    assert_eq!(world.get::<Transform>(e).unwrap().translation, Vec3::ZERO);

    let vel = world.get::<LinearVelocity>(e).unwrap().0;
    let expected = (1.0 - (-50.0f32 * 0.02).exp()) / 0.02;
    assert!((vel.x - expected).abs() < 1e-3, "vel {vel:?}");
    assert_eq!(vel.y, 0.0);
}

#[test]
fn step_from_never_overshoots() {
    let target = KinematicTarget::lerped(Vec3::splat(2.0), 50.0);
    for dt in [0.001, 0.016, 0.1, 1.0] {
        let next = target.step_from(Vec3::ZERO, dt);
        assert!(next.x > 0.0 && next.x <= 2.0);
    }
}
