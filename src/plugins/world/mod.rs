//! World plugin: scene setup.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::emitter::{BubbleEmitter, TimedSpawner};

pub const BUBBLE_EMITTER_NAME: &str = "Bubble Emitter";

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_emitter);
}

fn spawn_emitter(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new(BUBBLE_EMITTER_NAME),
        BubbleEmitter::new(tunables.min_queue_len),
        TimedSpawner::every(tunables.spawn_interval),
        Transform::from_translation(tunables.emitter_position),
        DespawnOnExit(GameState::InGame),
    ));
}
