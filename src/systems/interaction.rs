//! Interaction gate observers.
//!
//! - [`pointer_enter_observer`] flips a fish `Swimming → Hovered` and
//!   triggers [`FishFocusedEvent`] with its entry.
//! - [`pointer_leave_observer`] flips it back and triggers
//!   [`FishUnfocusedEvent`].
//! - [`forward_focus_observer`] / [`forward_unfocus_observer`] relay those to
//!   the host through the [`FocusBridge`].
//!
//! A pointer event that does not change the state (enter while hovered,
//! leave while swimming) is ignored, so each real transition notifies exactly
//! once. `Unfocused` goes out only when the focused fish is released. The
//! gate never touches position or velocity.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::diaryentry::DiaryEntry;
use crate::components::hoverstate::HoverState;
use crate::events::focus::{FishFocusedEvent, FishUnfocusedEvent, FocusChange};
use crate::events::pointer::{PointerEnterEvent, PointerLeaveEvent};
use crate::resources::focusbridge::FocusBridge;

pub fn pointer_enter_observer(
    trigger: On<PointerEnterEvent>,
    mut fish: Query<(&mut HoverState, &DiaryEntry)>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok((mut state, entry)) = fish.get_mut(entity) else {
        warn!("pointer entered {:?}, which is not a fish", entity);
        return;
    };
    if state.enter() {
        debug!("fish '{}' hovered", entry.id);
        commands.trigger(FishFocusedEvent {
            entity,
            entry: entry.clone(),
        });
    }
}

pub fn pointer_leave_observer(
    trigger: On<PointerLeaveEvent>,
    mut fish: Query<(&mut HoverState, &DiaryEntry)>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok((mut state, entry)) = fish.get_mut(entity) else {
        // Fish despawned while hovered; removal already released focus.
        debug!("pointer left {:?}, which is no longer a fish", entity);
        return;
    };
    if state.leave() {
        debug!("fish '{}' released", entry.id);
        commands.trigger(FishUnfocusedEvent { entity });
    }
}

pub fn forward_focus_observer(trigger: On<FishFocusedEvent>, mut bridge: ResMut<FocusBridge>) {
    let event = trigger.event();
    bridge.focused = Some((event.entity, event.entry.clone()));
    bridge.publish(FocusChange::Focused(event.entry.clone()));
}

/// Releases the focus only if it belongs to the released fish. Another fish
/// leaving (possible when direct and hit-tested hover mix) says nothing, so
/// the host never sees `Unfocused` while [`FocusBridge::focused`] is set.
pub fn forward_unfocus_observer(trigger: On<FishUnfocusedEvent>, mut bridge: ResMut<FocusBridge>) {
    let entity = trigger.event().entity;
    if bridge
        .focused
        .as_ref()
        .is_some_and(|(focused, _)| *focused == entity)
    {
        bridge.focused = None;
        bridge.publish(FocusChange::Unfocused);
    } else {
        debug!("{:?} released without holding focus", entity);
    }
}
