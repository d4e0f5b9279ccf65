//! Collision layers.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Bubble,
    Hand,
}

/// Bubble that hands can pop.
#[inline]
pub fn armed_bubble_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Bubble, [Layer::Hand])
}

/// Queued but not active: keeps its membership, collides with nothing.
#[inline]
pub fn dormant_bubble_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Bubble, [] as [Layer; 0])
}

#[inline]
pub fn hand_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Hand, [Layer::Bubble])
}
