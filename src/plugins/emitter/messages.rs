use bevy::prelude::*;

/// The head of an emitter queue changed. Written after opacities were refreshed.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBubbleChanged {
    pub emitter: Entity,
    pub previous: Option<Entity>,
    pub active: Option<Entity>,
}

/// An emitter ran out of bubbles for good and is being removed.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetComplete {
    pub emitter: Entity,
    pub spawned: u32,
}
