//! Two-state interaction gate of a fish.
//!
//! A fish is [`HoverState::Swimming`] until the pointer enters its hit area,
//! then [`HoverState::Hovered`] until the pointer leaves. The swim system reads
//! the state to decide between integrating and holding still; the transitions
//! themselves are driven by the pointer observers in
//! [`crate::systems::interaction`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Swimming,
    Hovered,
}

impl HoverState {
    pub fn is_hovered(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }

    /// Pointer entered. Returns true when this caused `Swimming → Hovered`.
    pub fn enter(&mut self) -> bool {
        match self {
            HoverState::Swimming => {
                *self = HoverState::Hovered;
                true
            }
            HoverState::Hovered => false,
        }
    }

    /// Pointer left. Returns true when this caused `Hovered → Swimming`.
    pub fn leave(&mut self) -> bool {
        match self {
            HoverState::Hovered => {
                *self = HoverState::Swimming;
                true
            }
            HoverState::Swimming => false,
        }
    }
}
