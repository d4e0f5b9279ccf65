//! Score ledger: per-user pop history, driven only by the action stream.

pub mod ledger;
pub mod receptor;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::actions::ActionDelivery;

pub use ledger::{PopRecord, ScoreLedger};
pub use receptor::LedgerAppended;

pub fn plugin(app: &mut App) {
    app.add_message::<LedgerAppended>();

    app.add_systems(OnEnter(GameState::InGame), receptor::start_session_ledger)
        .add_systems(OnExit(GameState::InGame), receptor::end_session_ledger);

    app.add_systems(
        PreUpdate,
        receptor::receive_pop_actions
            .in_set(ActionDelivery)
            .run_if(in_state(GameState::InGame)),
    );
}
