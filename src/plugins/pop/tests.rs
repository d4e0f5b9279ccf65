//! Pop pipeline tests.
//!
//! Contacts are not produced by the solver here. We fill the hands' `CollidingEntities`
//! directly and run the pop system once, then fold the dispatched actions into a ledger.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::identity::{NetworkId, NetworkObject, Presence, UserId};
use crate::common::test_utils::{
    drain_actions, insert_dispatch_resources, run_system_once, time_with_delta,
};
use crate::common::tunables::Tunables;
use crate::plugins::actions::{ActionKind, PopBubble};
use crate::plugins::emitter::Bubble;
use crate::plugins::physics::KinematicTarget;
use crate::plugins::score::ScoreLedger;

use super::collision::pop_touched_bubbles;
use super::drift::{drift_bubbles, wobble_position};
use super::hands::{Hand, HandAnchor, HandRig, Handedness, spawn_hands, sync_hand_targets};

const LOCAL: UserId = UserId(1);
const HAND_VELOCITY: Vec3 = Vec3::new(0.5, -0.25, 2.0);
const HAND_POSITION: Vec3 = Vec3::new(0.1, 1.2, 0.4);

fn id(serial: u32) -> NetworkId {
    NetworkId { owner: LOCAL, serial }
}

fn pop_world(with_rig: bool) -> World {
    let mut world = World::new();
    insert_dispatch_resources(&mut world, LOCAL);
    if with_rig {
        world.insert_resource(HandRig::default());
    }
    world
}

fn spawn_hand(world: &mut World, hand: Handedness) -> Entity {
    world
        .spawn((
            Hand(hand),
            CollidingEntities::default(),
            LinearVelocity(HAND_VELOCITY),
            Position(HAND_POSITION),
        ))
        .id()
}

fn touch(world: &mut World, hand: Entity, other: Entity) {
    world
        .get_mut::<CollidingEntities>(hand)
        .expect("hand tracks contacts")
        .0
        .insert(other);
}

fn pop_count(world: &mut World) -> usize {
    drain_actions(world)
        .into_iter()
        .filter(|a| matches!(a.kind, ActionKind::PopBubble(_)))
        .count()
}

// --------------------------------------------------------------------------------------
// Hand contact
// --------------------------------------------------------------------------------------

#[test]
fn hand_contact_pops_and_destroys_with_hand_state() {
    let mut world = pop_world(true);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let bubble = world.spawn(NetworkObject::new(id(0))).id();
    touch(&mut world, hand, bubble);

    run_system_once(&mut world, pop_touched_bubbles);

    let actions = drain_actions(&mut world);
    assert_eq!(actions.len(), 2);
    assert_eq!(
        actions[0].kind,
        ActionKind::PopBubble(PopBubble::by_player(id(0), HAND_VELOCITY, HAND_POSITION))
    );
    assert_eq!(actions[1].kind, ActionKind::DestroyObject { subject: id(0) });
    assert_eq!(
        world.get::<NetworkObject>(bubble).unwrap().presence,
        Presence::PendingDestroy
    );

    let ledger = ScoreLedger::replay(&actions);
    let history = ledger.history(LOCAL);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].time, actions[0].time);
    assert_eq!(history[0].velocity, HAND_VELOCITY);
    assert_eq!(history[0].position, HAND_POSITION);
}

#[test]
fn missing_rig_skips_detection() {
    let mut world = pop_world(false);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let bubble = world.spawn(NetworkObject::new(id(0))).id();
    touch(&mut world, hand, bubble);

    run_system_once(&mut world, pop_touched_bubbles);

    assert!(drain_actions(&mut world).is_empty());
    assert!(world.get::<NetworkObject>(bubble).unwrap().is_present());
}

#[test]
fn contact_held_while_rig_was_missing_pops_once_rig_appears() {
    let mut world = pop_world(false);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let bubble = world.spawn(NetworkObject::new(id(0))).id();
    touch(&mut world, hand, bubble);

    run_system_once(&mut world, pop_touched_bubbles);
    assert_eq!(pop_count(&mut world), 0);

    world.insert_resource(HandRig::default());
    run_system_once(&mut world, pop_touched_bubbles);
    assert_eq!(pop_count(&mut world), 1);

    // The contact persists, but the destroy is already pending.
    run_system_once(&mut world, pop_touched_bubbles);
    assert_eq!(pop_count(&mut world), 0);
    assert_eq!(
        world.get::<NetworkObject>(bubble).unwrap().presence,
        Presence::PendingDestroy
    );
}

#[test]
fn body_without_network_identity_is_skipped() {
    let mut world = pop_world(true);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let prop = world.spawn(Transform::default()).id();
    touch(&mut world, hand, prop);

    run_system_once(&mut world, pop_touched_bubbles);

    assert!(drain_actions(&mut world).is_empty());
}

#[test]
fn contacts_of_non_hands_are_ignored() {
    let mut world = pop_world(true);
    let mut contacts = CollidingEntities::default();
    let b = world.spawn(NetworkObject::new(id(1))).id();
    contacts.0.insert(b);
    world.spawn((NetworkObject::new(id(0)), contacts, LinearVelocity(Vec3::X), Position(Vec3::ZERO)));

    run_system_once(&mut world, pop_touched_bubbles);

    assert!(drain_actions(&mut world).is_empty());
}

#[test]
fn both_hands_on_one_bubble_pop_it_once() {
    let mut world = pop_world(true);
    let left = spawn_hand(&mut world, Handedness::Left);
    let right = spawn_hand(&mut world, Handedness::Right);
    let bubble = world.spawn(NetworkObject::new(id(0))).id();
    touch(&mut world, left, bubble);
    touch(&mut world, right, bubble);

    run_system_once(&mut world, pop_touched_bubbles);

    assert_eq!(pop_count(&mut world), 1);
}

#[test]
fn one_hand_on_two_bubbles_pops_both() {
    let mut world = pop_world(true);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let a = world.spawn(NetworkObject::new(id(0))).id();
    let b = world.spawn(NetworkObject::new(id(1))).id();
    touch(&mut world, hand, a);
    touch(&mut world, hand, b);

    run_system_once(&mut world, pop_touched_bubbles);

    assert_eq!(pop_count(&mut world), 2);
}

#[test]
fn pending_bubble_is_not_popped_again() {
    let mut world = pop_world(true);
    let hand = spawn_hand(&mut world, Handedness::Right);
    let mut net = NetworkObject::new(id(0));
    net.presence = Presence::PendingDestroy;
    let bubble = world.spawn(net).id();
    touch(&mut world, hand, bubble);

    run_system_once(&mut world, pop_touched_bubbles);

    assert!(drain_actions(&mut world).is_empty());
}

// --------------------------------------------------------------------------------------
// Drift and escape
// --------------------------------------------------------------------------------------

fn drift_world(dt: f32) -> World {
    let mut world = World::new();
    insert_dispatch_resources(&mut world, LOCAL);
    world.insert_resource(time_with_delta(dt));
    world.insert_resource(Tunables::default());
    world
}

fn spawn_drifting(world: &mut World, position: Vec3, network: NetworkObject) -> Entity {
    world
        .spawn((
            Bubble::new(position.truncate(), 1.0),
            network,
            Transform::from_translation(position),
            KinematicTarget::teleport(position),
        ))
        .id()
}

#[test]
fn wobble_path_starts_off_anchor() {
    let p = wobble_position(Vec2::new(0.0, 1.2), 0.0, 0.1, 2.0);
    assert!((p - Vec3::new(0.1, 1.2, 0.0)).length() < 1e-6);
}

#[test]
fn bubble_drifts_forward_along_wobble() {
    let mut world = drift_world(0.1);
    let start = Vec3::new(0.0, 1.2, 0.0);
    let e = spawn_drifting(&mut world, start, NetworkObject::new(id(0)));

    run_system_once(&mut world, drift_bubbles);

    let expected = wobble_position(start.truncate(), 0.1, 0.1, 2.0);
    let tf = world.get::<Transform>(e).unwrap();
    assert!((tf.translation - expected).length() < 1e-6);
    assert_eq!(world.get::<KinematicTarget>(e).unwrap().position, tf.translation);
    assert!(drain_actions(&mut world).is_empty());
}

#[test]
fn bubble_past_travel_limit_escapes_unscored() {
    let mut world = drift_world(0.1);
    let at = Vec3::new(0.0, 1.2, 1.51);
    let e = spawn_drifting(&mut world, at, NetworkObject::new(id(3)));

    run_system_once(&mut world, drift_bubbles);

    let actions = drain_actions(&mut world);
    assert_eq!(actions.len(), 2);
    let ActionKind::PopBubble(pop) = actions[0].kind else {
        panic!("expected a pop first, got {:?}", actions[0].kind);
    };
    assert!(!pop.player_popped);
    assert!(pop.hit.is_none());
    assert_eq!(actions[1].kind, ActionKind::DestroyObject { subject: id(3) });

    // Escaping bubbles do not move.
    assert_eq!(world.get::<Transform>(e).unwrap().translation, at);
    assert_eq!(
        world.get::<NetworkObject>(e).unwrap().presence,
        Presence::PendingDestroy
    );
    assert_eq!(ScoreLedger::replay(&actions).total_pops(), 0);

    // Nothing more while the destroy is in flight.
    run_system_once(&mut world, drift_bubbles);
    assert!(drain_actions(&mut world).is_empty());
}

#[test]
fn bubbles_waiting_behind_the_head_do_not_move() {
    let mut world = drift_world(0.1);
    let at = Vec3::new(0.0, 1.2, 0.0);
    let e = world
        .spawn((
            Bubble::queued(at.truncate(), 0.5),
            NetworkObject::new(id(0)),
            Transform::from_translation(at),
            KinematicTarget::teleport(at),
        ))
        .id();

    run_system_once(&mut world, drift_bubbles);

    assert_eq!(world.get::<Transform>(e).unwrap().translation, at);
}

#[test]
fn bubble_exactly_at_limit_keeps_drifting() {
    let mut world = drift_world(0.1);
    spawn_drifting(&mut world, Vec3::new(0.0, 1.2, 1.5), NetworkObject::new(id(0)));

    run_system_once(&mut world, drift_bubbles);

    assert!(drain_actions(&mut world).is_empty());
}

// --------------------------------------------------------------------------------------
// Hands
// --------------------------------------------------------------------------------------

#[test]
fn spawn_hands_creates_anchor_and_collider_per_hand() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    run_system_once(&mut world, spawn_hands);

    assert_eq!(world.query::<&HandAnchor>().iter(&world).count(), 2);
    let mut q = world.query::<(&Hand, &CollisionLayers)>();
    let hands: Vec<_> = q.iter(&world).collect();
    assert_eq!(hands.len(), 2);
    for (_, layers) in hands {
        assert!(layers.filters.has_all(crate::common::layers::Layer::Bubble));
    }
}

#[test]
fn anchors_follow_the_rig() {
    let mut world = World::new();
    world.insert_resource(HandRig {
        left: Vec3::new(-0.3, 1.0, 0.2),
        right: Vec3::new(0.3, 1.1, 0.2),
    });
    let left = world
        .spawn((HandAnchor(Handedness::Left), KinematicTarget::lerped(Vec3::ZERO, 50.0)))
        .id();
    let right = world
        .spawn((HandAnchor(Handedness::Right), KinematicTarget::lerped(Vec3::ZERO, 50.0)))
        .id();

    run_system_once(&mut world, sync_hand_targets);

    assert_eq!(world.get::<KinematicTarget>(left).unwrap().position, Vec3::new(-0.3, 1.0, 0.2));
    assert_eq!(world.get::<KinematicTarget>(right).unwrap().position, Vec3::new(0.3, 1.1, 0.2));
}

#[test]
fn anchors_stay_put_without_rig() {
    let mut world = World::new();
    let e = world
        .spawn((HandAnchor(Handedness::Left), KinematicTarget::lerped(Vec3::ONE, 50.0)))
        .id();

    run_system_once(&mut world, sync_hand_targets);

    assert_eq!(world.get::<KinematicTarget>(e).unwrap().position, Vec3::ONE);
}
