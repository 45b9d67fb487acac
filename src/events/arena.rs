//! Arena measurement events.
//!
//! The host triggers [`ArenaResizedEvent`] once on mount and again on every
//! container resize. [`arena_resized_observer`] stores the new bounds in the
//! [`ArenaBounds`] resource, which every fish reads by value on the next frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::arena::ArenaBounds;

/// New container size in pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ArenaResizedEvent {
    pub width: f32,
    pub height: f32,
}

/// Publish the measured size to the [`ArenaBounds`] resource.
///
/// Negative or non-finite measurements are stored as zero, which keeps fish
/// still until a usable size arrives.
pub fn arena_resized_observer(trigger: On<ArenaResizedEvent>, mut arena: ResMut<ArenaBounds>) {
    let event = trigger.event();
    let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let next = ArenaBounds::new(sanitize(event.width), sanitize(event.height));
    if *arena != next {
        info!(
            "Arena resized: {}x{} -> {}x{}",
            arena.width, arena.height, next.width, next.height
        );
        *arena = next;
    }
}
