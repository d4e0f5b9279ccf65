//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::pop::PopPipelinePlugin;

pub mod actions;
pub mod core;
pub mod emitter;
pub mod fx;
pub mod physics;
pub mod pop;
pub mod score;
pub mod world;

// Render-only
pub mod camera;
pub mod desktop_rig;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    actions::plugin(app);
    emitter::plugin(app);
    score::plugin(app);
    fx::plugin(app);
    world::plugin(app);
    app.add_plugins(PopPipelinePlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    desktop_rig::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
