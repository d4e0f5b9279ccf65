use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::{armed_bubble_layers, dormant_bubble_layers};
use crate::plugins::emitter::{ActiveBubbleChanged, Bubble};

/// Only an emitter's head bubble can be popped by hand.
pub fn arm_active_bubble(
    mut changes: MessageReader<ActiveBubbleChanged>,
    mut q_layers: Query<&mut CollisionLayers, With<Bubble>>,
) {
    for change in changes.read() {
        if let Some(mut layers) = change.previous.and_then(|e| q_layers.get_mut(e).ok()) {
            *layers = dormant_bubble_layers();
        }
        if let Some(mut layers) = change.active.and_then(|e| q_layers.get_mut(e).ok()) {
            *layers = armed_bubble_layers();
        }
    }
}
