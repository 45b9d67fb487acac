//! Arena bounds resource.
//!
//! Tracks the size of the aquarium container in pixels. The host measures its
//! container on mount and on every resize and publishes the result through
//! [`ArenaResizedEvent`](crate::events::arena::ArenaResizedEvent); fish only
//! ever read a copy of it.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Current arena size in pixels.
///
/// `(0, 0)` means "not measured yet". Fish spawned before the first
/// measurement start at the origin and hold still until the arena has a size.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ArenaBounds {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ArenaBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once the container has a usable, non-empty size.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}
