//! Aquarium systems.
//!
//! Submodules overview
//! - [`hover`] – hit test the tracked pointer and raise enter/leave events
//! - [`interaction`] – the hover gate observers and focus forwarding
//! - [`swim`] – the per-frame driver: steer, integrate, emit transforms
//! - [`time`] – advance the frame clock

pub mod hover;
pub mod interaction;
pub mod swim;
pub mod time;
