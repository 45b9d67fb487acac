//! Event types and observers used by the aquarium.
//!
//! Events decouple the host-facing API from the systems that react to it.
//!
//! Submodules:
//! - [`arena`] – container measurements and the observer that publishes them
//! - [`focus`] – focus/unfocus notifications raised by the interaction gate
//! - [`pointer`] – pointer enter/leave on a single fish
pub mod arena;
pub mod focus;
pub mod pointer;
