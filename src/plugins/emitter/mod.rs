//! Bubble emitter: queue, aging, eviction, refill.
//!
//! ```text
//! Update (frame dt), per emitter, chained:
//!   spawn_timed_bubbles     countdown elapsed -> SpawnBubble near the emitter (free bubble)
//!   tick_emitters           prune -> age -> evict head >= max age -> refill + SpawnBubble
//!   refresh_active_bubbles  head changed? -> opacities -> ActiveBubbleChanged
//!   complete_finished_sets  empty for good -> SetComplete + despawn emitter
//!
//! On<Remove, BubbleEmitter>: despawn queued bubbles, dispatch DestroyObject for each
//! ```

pub mod components;
pub mod messages;
pub mod spawn;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{Bubble, BubbleEmitter, SpawnRng, TimedSpawner};
pub use messages::{ActiveBubbleChanged, SetComplete};

pub fn plugin(app: &mut App) {
    app.init_resource::<SpawnRng>();

    app.add_message::<ActiveBubbleChanged>()
        .add_message::<SetComplete>()
        .add_observer(systems::cancel_queued_bubbles);

    app.add_systems(
        Update,
        (
            systems::spawn_timed_bubbles,
            systems::tick_emitters,
            systems::refresh_active_bubbles,
            systems::complete_finished_sets,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}
