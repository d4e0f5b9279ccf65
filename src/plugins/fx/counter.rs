//! Floating score counter.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::identity::UserId;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::emitter::BubbleEmitter;
use crate::plugins::score::{LedgerAppended, ScoreLedger};

/// What the counter view shows. The XR UI renders [`ScoreCounter::lines`].
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ScoreCounter {
    /// Show this user. Otherwise the first user who scored.
    pub pinned: Option<UserId>,
    pub shown: Option<UserId>,
    pub count: usize,
    pub last_speed: f32,
    pub last_distance: f32,
}

impl ScoreCounter {
    pub fn lines(&self) -> [String; 4] {
        [
            self.count.to_string(),
            "last pop stats:".to_string(),
            format!("velocity length: {:.2}", self.last_speed),
            format!("distance: {:.2}", self.last_distance),
        ]
    }

    fn refresh_from(&mut self, ledger: &ScoreLedger, user: UserId) {
        let history = ledger.history(user);
        self.shown = Some(user);
        self.count = history.len();
        let (speed, distance) = history
            .last()
            .map(|r| (r.velocity.length(), r.position.z))
            .unwrap_or_default();
        self.last_speed = speed;
        self.last_distance = distance;
    }
}

/// Anchor one counter above the first emitter that appears.
pub fn attach_score_counter(
    mut commands: Commands,
    tunables: Res<Tunables>,
    q_new_emitters: Query<&Transform, Added<BubbleEmitter>>,
    q_counters: Query<(), With<ScoreCounter>>,
) {
    if !q_counters.is_empty() {
        return;
    }
    let Some(emitter_tf) = q_new_emitters.iter().next() else {
        return;
    };

    let mut tf = Transform::from_translation(
        emitter_tf.translation + Vec3::Y * tunables.counter_height,
    );
    tf.scale *= tunables.counter_scale;

    commands.spawn((
        Name::new("Counter XRUI"),
        ScoreCounter::default(),
        tf,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Recompute the counter when the ledger of the shown user grows.
pub fn refresh_score_counter(
    mut appended: MessageReader<LedgerAppended>,
    ledger: Option<Res<ScoreLedger>>,
    mut q: Query<&mut ScoreCounter>,
) {
    let grown: Vec<UserId> = appended.read().map(|ev| ev.user).collect();
    if grown.is_empty() {
        return;
    }
    let Some(ledger) = ledger else {
        return;
    };

    for mut counter in &mut q {
        let Some(user) = counter.pinned.or_else(|| ledger.first_user()) else {
            continue;
        };
        if counter.shown == Some(user) && !grown.contains(&user) {
            continue;
        }
        counter.refresh_from(&ledger, user);
    }
}
