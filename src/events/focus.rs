//! Focus notifications raised by the interaction gate.
//!
//! When a fish goes `Swimming → Hovered` the gate triggers
//! [`FishFocusedEvent`] with the fish's full diary entry; the reverse
//! transition triggers [`FishUnfocusedEvent`]. The
//! [`forward_focus_observer`](crate::systems::interaction::forward_focus_observer)
//! and [`forward_unfocus_observer`](crate::systems::interaction::forward_unfocus_observer)
//! relay both to the host as [`FocusChange`] values.

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::diaryentry::DiaryEntry;

/// A fish was hovered; carries the whole entry for the detail panel.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FishFocusedEvent {
    pub entity: Entity,
    pub entry: DiaryEntry,
}

/// The hovered fish was left (or cancelled while hovered).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishUnfocusedEvent {
    pub entity: Entity,
}

/// What the host's detail panel receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entry", rename_all = "snake_case")]
pub enum FocusChange {
    /// Show this entry.
    Focused(DiaryEntry),
    /// Nothing is focused any more.
    Unfocused,
}
