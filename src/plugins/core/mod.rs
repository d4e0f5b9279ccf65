//! Core plugin: session-wide resources.
//!
//! Uses `init_resource` so an app can insert its own `Tunables` or `LocalUser` first.

use bevy::prelude::*;

use crate::common::identity::{LocalUser, NetworkIdAllocator};
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>()
        .init_resource::<LocalUser>()
        .init_resource::<NetworkIdAllocator>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}
