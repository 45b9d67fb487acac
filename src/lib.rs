//! moodtank library.
//!
//! The motion engine behind the mood-journal aquarium: every visible diary
//! entry swims as an independent fish inside a bounded 2D arena, holds still
//! while the pointer rests on it, and reports hover focus to the host.
//!
//! Hosts embed an [`aquarium::Aquarium`]; the ECS components, resources,
//! systems, and events are exposed for integration tests and custom hosts.

pub mod aquarium;
pub mod components;
pub mod entries;
pub mod error;
pub mod events;
pub mod resources;
pub mod steering;
pub mod systems;
