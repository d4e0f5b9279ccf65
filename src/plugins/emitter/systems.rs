use bevy::prelude::*;
use rand::Rng;

use crate::common::identity::{NetworkIdAllocator, NetworkObject};
use crate::common::tunables::Tunables;
use crate::plugins::actions::{ActionKind, Dispatcher};

use super::components::{Bubble, BubbleEmitter, SpawnRng, TimedSpawner};
use super::messages::{ActiveBubbleChanged, SetComplete};
use super::spawn::spawn_queued_bubble;

/// Per emitter: prune, age, evict an expired head, refill.
///
/// Eviction is silent: the bubble is despawned locally and nothing is dispatched.
pub fn tick_emitters(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut ids: ResMut<NetworkIdAllocator>,
    mut dispatcher: Dispatcher,
    mut q_emitters: Query<(&mut BubbleEmitter, &Transform)>,
    mut q_bubbles: Query<&mut Bubble>,
) {
    let dt = time.delta_secs();

    for (mut emitter, tf) in &mut q_emitters {
        emitter.retain(|e| q_bubbles.contains(e));

        for e in emitter.queue() {
            if let Ok(mut bubble) = q_bubbles.get_mut(e) {
                bubble.age += dt;
            }
        }

        if let Some(head) = emitter.active_bubble() {
            let expired = q_bubbles
                .get(head)
                .is_ok_and(|b| b.age >= tunables.max_bubble_age);
            if expired && emitter.remove_bubble(head) {
                debug!("bubble {head} expired");
                commands.entity(head).try_despawn();
            }
        }

        let anchor = tf.translation;
        let min_len = emitter.min_queue_len;
        let mut minted = None;
        emitter.ensure_minimum_queue_length(min_len, || {
            let id = ids.allocate(dispatcher.local_user());
            minted = Some(id);
            spawn_queued_bubble(&mut commands, &tunables, anchor, NetworkObject::new(id))
        });
        if let Some(subject) = minted {
            dispatcher.dispatch(ActionKind::SpawnBubble {
                subject,
                position: anchor,
            });
        }
    }
}

/// Uniform point in a ball of `radius` around the origin.
pub fn offset_in_ball(rng: &mut impl Rng, radius: f32) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        if p.length_squared() <= 1.0 {
            return p * radius;
        }
    }
}

/// Dispatch a free bubble near each emitter whose countdown elapsed.
///
/// Only the spawn action is written here. Every participant, this one included,
/// materialises the bubble when the action is delivered.
pub fn spawn_timed_bubbles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut rng: ResMut<SpawnRng>,
    mut ids: ResMut<NetworkIdAllocator>,
    mut dispatcher: Dispatcher,
    mut q_spawners: Query<(&mut TimedSpawner, &Transform), With<BubbleEmitter>>,
) {
    for (mut spawner, tf) in &mut q_spawners {
        spawner.timer.tick(time.delta());

        for _ in 0..spawner.timer.times_finished_this_tick() {
            let offset = offset_in_ball(&mut rng.0, tunables.spawn_jitter);
            let subject = ids.allocate(dispatcher.local_user());
            dispatcher.dispatch(ActionKind::SpawnBubble {
                subject,
                position: tf.translation + tf.rotation * offset,
            });
        }
    }
}

/// Recompute opacities whenever an emitter's head changed, and release the new head to
/// drift.
///
/// Opacity is a pure function of queue position, so a head that was replaced within the
/// same tick is never observed.
pub fn refresh_active_bubbles(
    tunables: Res<Tunables>,
    mut q_emitters: Query<(Entity, &mut BubbleEmitter)>,
    mut q_bubbles: Query<&mut Bubble>,
    mut writer: MessageWriter<ActiveBubbleChanged>,
) {
    for (emitter_e, mut emitter) in &mut q_emitters {
        let Some(change) = emitter.take_head_change() else {
            continue;
        };

        for (index, e) in emitter.queue().enumerate() {
            let Ok(mut bubble) = q_bubbles.get_mut(e) else {
                continue;
            };
            let is_head = index == 0;
            bubble.held = !is_head;
            bubble.opacity = if is_head {
                tunables.active_opacity
            } else {
                tunables.dimmed_opacity
            };
        }

        writer.write(ActiveBubbleChanged {
            emitter: emitter_e,
            previous: change.previous,
            active: change.active,
        });
    }
}

/// Remove emitters whose queue is empty for good.
pub fn complete_finished_sets(
    mut commands: Commands,
    q_emitters: Query<(Entity, &BubbleEmitter)>,
    mut writer: MessageWriter<SetComplete>,
) {
    for (e, emitter) in &q_emitters {
        if !emitter.is_set_complete() {
            continue;
        }
        info!("emitter {e} finished its set after {} bubbles", emitter.spawned());
        writer.write(SetComplete {
            emitter: e,
            spawned: emitter.spawned(),
        });
        commands.entity(e).try_despawn();
    }
}

/// Removing an emitter cancels its queue immediately.
///
/// Each cancelled networked bubble gets a destroy action so the stream records it as
/// gone, and any pop still in flight for it is ignored by the ledger.
pub fn cancel_queued_bubbles(
    remove: On<Remove, BubbleEmitter>,
    mut commands: Commands,
    q_emitters: Query<&BubbleEmitter>,
    q_network: Query<&NetworkObject>,
    mut dispatcher: Dispatcher,
) {
    let Ok(emitter) = q_emitters.get(remove.entity) else {
        return;
    };
    if emitter.is_empty() {
        return;
    }

    info!("emitter {} torn down, cancelling {} bubbles", remove.entity, emitter.len());
    for e in emitter.queue() {
        if let Ok(network) = q_network.get(e) {
            dispatcher.destroy(network.id);
        }
        if let Ok(mut bubble) = commands.get_entity(e) {
            bubble.try_despawn();
        }
    }
}
