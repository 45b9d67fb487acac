//! ECS components for fish entities.
//!
//! Every fish is one entity carrying the components below. Components hold
//! data only; behaviour lives in [`crate::systems`] and [`crate::steering`].
//!
//! Submodules overview:
//! - [`diaryentry`] – the diary entry the fish stands for, plus moods
//! - [`fishtraits`] – per-fish constants drawn once at spawn
//! - [`hoverstate`] – the two-state interaction gate
//! - [`mapposition`] – arena-space position (pivot)
//! - [`rigidbody`] – per-frame velocity
//! - [`rotation`] – heading in degrees
//! - [`scale`] – uniform display scale
//! - [`visualbinding`] – side channel that receives per-frame transforms
//! - [`zindex`] – stacking order for drawing and hit testing

pub mod diaryentry;
pub mod fishtraits;
pub mod hoverstate;
pub mod mapposition;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod visualbinding;
pub mod zindex;
