//! Pointer events targeting a single fish.
//!
//! Hosts with per-element hover (a DOM, a widget toolkit) trigger these
//! directly through [`Aquarium::pointer_enter`](crate::aquarium::Aquarium::pointer_enter)
//! and [`Aquarium::pointer_leave`](crate::aquarium::Aquarium::pointer_leave).
//! Hosts that only know the cursor position get them from the
//! [`pointer_hover_system`](crate::systems::hover::pointer_hover_system).

use bevy_ecs::prelude::*;

/// The pointer entered the fish's hit area.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEnterEvent {
    pub entity: Entity,
}

/// The pointer left the fish's hit area.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLeaveEvent {
    pub entity: Entity,
}
