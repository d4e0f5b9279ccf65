use bevy::prelude::*;

use crate::common::identity::UserId;
use crate::plugins::actions::Action;

use super::ledger::{PopRecord, ScoreLedger};

/// A user's history grew by one record.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct LedgerAppended {
    pub user: UserId,
    pub record: PopRecord,
    /// History length after the append.
    pub count: usize,
}

pub fn start_session_ledger(mut commands: Commands) {
    commands.insert_resource(ScoreLedger::default());
}

pub fn end_session_ledger(mut commands: Commands) {
    commands.remove_resource::<ScoreLedger>();
}

/// Single writer of the ledger.
pub fn receive_pop_actions(
    mut reader: MessageReader<Action>,
    ledger: Option<ResMut<ScoreLedger>>,
    mut appended: MessageWriter<LedgerAppended>,
) {
    let Some(mut ledger) = ledger else {
        reader.clear();
        return;
    };

    for action in reader.read() {
        let Some(record) = ledger.apply(action) else {
            continue;
        };
        appended.write(LedgerAppended {
            user: action.from,
            record,
            count: ledger.history(action.from).len(),
        });
    }
}
