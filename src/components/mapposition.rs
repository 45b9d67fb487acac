//! Arena-space position component.
//!
//! The [`MapPosition`] component stores a fish's position in arena-local
//! pixel coordinates. It is written once per frame by the
//! [`swim_system`](crate::systems::swim::swim_system) and read by hit testing
//! and hosts. Positions are never clamped to the arena: the walls only steer.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Arena-local position (pivot) of a fish.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    /// 2D coordinates in arena pixels.
    pub pos: Vec2,
}

impl MapPosition {
    /// Create a MapPosition from an existing Vec2.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Advance the position by one frame of `velocity`.
    pub fn translate(&mut self, velocity: Vec2) {
        self.pos += velocity;
    }
}
