//! Z-index component for stacking order.
//!
//! The [`ZIndex`] component records the order in which fish were spawned.
//! Later fish are painted on top and win pointer hit tests, like elements
//! appended later to a page.

use bevy_ecs::prelude::Component;

/// Stacking order hint for 2D drawing and hit testing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub u64);
