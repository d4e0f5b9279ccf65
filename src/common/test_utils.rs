//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) runs a system in tests without
//! building a full schedule. Systems that use `Commands` enqueue structural changes, so we
//! call `world.flush()` after running to apply them before assertions.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::identity::{LocalUser, UserId};
use crate::plugins::actions::messages::Action;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A `Time` clock that has advanced by `dt` seconds once.
pub fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// Minimum resources a dispatching system needs.
pub fn insert_dispatch_resources(world: &mut World, user: UserId) {
    world.insert_resource(LocalUser(user));
    world.insert_resource(Time::<()>::default());
    world.insert_resource(Time::<Virtual>::default());
    if world.get_resource::<Messages<Action>>().is_none() {
        world.init_resource::<Messages<Action>>();
    }
}

/// Drain every `Action` written so far, in dispatch order.
pub fn drain_actions(world: &mut World) -> Vec<Action> {
    world.resource_mut::<Messages<Action>>().drain().collect()
}
