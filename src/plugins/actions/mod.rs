//! Action transport: dispatch now, deliver next tick.
//!
//! Every receptor runs in [`ActionDelivery`] during `PreUpdate`, so anything dispatched
//! during a frame's simulation or emitter phase is applied at the start of the following
//! frame, in global dispatch order.

pub mod dispatch;
pub mod log;
pub mod messages;
pub mod presence;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use dispatch::Dispatcher;
pub use messages::{Action, ActionKind, PopBubble, PopHit};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionDelivery;

pub fn plugin(app: &mut App) {
    app.add_message::<Action>();

    app.add_systems(OnEnter(GameState::InGame), log::start_action_log)
        .add_systems(OnExit(GameState::InGame), log::end_action_log);

    app.add_systems(
        PreUpdate,
        (log::record_actions, presence::apply_presence_actions)
            .in_set(ActionDelivery)
            .run_if(in_state(GameState::InGame)),
    );
}
