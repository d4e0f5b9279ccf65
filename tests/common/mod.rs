//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bubble_pop::game::configure_headless` to install gameplay plugins.
#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use bubble_pop::plugins::emitter::BubbleEmitter;

/// Wall time advanced per `app.update()`. Longer than one fixed step.
pub const FRAME: Duration = Duration::from_millis(20);

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists; avian's collider backend
    // also expects mesh assets to be registered.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    bubble_pop::game::configure_headless(&mut app);
    // `App::run` would do this; plugins (e.g. avian) register resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// The single emitter's queue, head first.
pub fn emitter_queue(app: &mut App) -> Vec<Entity> {
    app.world_mut()
        .query::<&BubbleEmitter>()
        .single(app.world())
        .map(|emitter| emitter.queue().collect())
        .unwrap_or_default()
}
