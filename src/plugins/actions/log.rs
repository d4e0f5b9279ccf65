//! Recorded action stream, in delivery order.

use bevy::prelude::*;

use super::messages::Action;

#[derive(Resource, Debug, Default, Clone)]
pub struct ActionLog {
    entries: Vec<Action>,
}

impl ActionLog {
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, action: Action) {
        self.entries.push(action);
    }
}

pub fn start_action_log(mut commands: Commands) {
    commands.insert_resource(ActionLog::default());
}

pub fn end_action_log(mut commands: Commands) {
    commands.remove_resource::<ActionLog>();
}

pub fn record_actions(mut reader: MessageReader<Action>, log: Option<ResMut<ActionLog>>) {
    let Some(mut log) = log else {
        reader.clear();
        return;
    };
    for action in reader.read() {
        log.push(*action);
    }
}
