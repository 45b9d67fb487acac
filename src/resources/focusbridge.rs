//! Bridge carrying focus notifications out of the ECS world.
//!
//! The detail panel of the journal lives outside the simulation. Every
//! `Swimming → Hovered` and `Hovered → Swimming` transition is forwarded as a
//! [`FocusChange`] on a `crossbeam-channel`, so the panel can drain it on its
//! own schedule. The bridge also remembers the currently focused entry.

use crate::components::diaryentry::DiaryEntry;
use crate::events::focus::FocusChange;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

/// Notifications kept for a host that is not draining the queue. Only the
/// latest one matters to a detail panel; older ones are dropped first.
pub const FOCUS_QUEUE_CAPACITY: usize = 32;

#[derive(Resource)]
pub struct FocusBridge {
    /// Sender for [`FocusChange`] notifications (ECS -> host).
    pub tx: Sender<FocusChange>,
    /// Receiver handed out to hosts; clones share the same queue.
    pub rx: Receiver<FocusChange>,
    /// Fish whose entry is currently shown, if any.
    pub focused: Option<(Entity, DiaryEntry)>,
}

impl Default for FocusBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusBridge {
    pub fn new() -> Self {
        let (tx, rx) = bounded::<FocusChange>(FOCUS_QUEUE_CAPACITY);
        Self {
            tx,
            rx,
            focused: None,
        }
    }

    /// Queue a notification for the host, evicting the oldest one when the
    /// queue is full. The bridge owns a receiver, so the channel never
    /// disconnects while the bridge exists.
    pub fn publish(&self, mut change: FocusChange) {
        loop {
            match self.tx.try_send(change) {
                Ok(()) => return,
                Err(TrySendError::Full(rejected)) => {
                    let _ = self.rx.try_recv();
                    change = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }
}
