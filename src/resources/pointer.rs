//! Pointer tracking resource for hit-tested hover.
//!
//! Hosts that cannot attach enter/leave handlers to individual fish (a raw
//! window, a terminal) report the pointer position instead. The
//! [`pointer_hover_system`](crate::systems::hover::pointer_hover_system) turns
//! the position into enter/leave events and remembers which fish it entered.
use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Pointer position in arena pixels; `None` when outside the arena.
    pub position: Option<Vec2>,
    /// The fish this resource's hit testing has put into the hovered state.
    pub hovered: Option<Entity>,
}
