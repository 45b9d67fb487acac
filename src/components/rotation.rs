use bevy_ecs::prelude::Component;

/// Heading of a fish in degrees, as last written by the swim system.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}
