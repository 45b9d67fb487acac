use bevy_ecs::prelude::Component;

/// Uniform display scale of a fish: `1.0` while swimming, the configured
/// hover scale while the pointer rests on it.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: f32,
}
impl Scale {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0)
    }
}
