//! ECS resources made available to systems.
//!
//! Overview
//! - `aquariumconfig` – tunables of the motion engine, loaded from INI
//! - `arena` – container bounds shared read-only by every fish
//! - `focusbridge` – channel carrying focus changes to the host
//! - `frameclock` – frame count and wall-clock time
//! - `pointer` – tracked cursor position for hit-tested hover
//! - `random` – pluggable random source
//! - `registry` – entry id → fish entity, the identity authority
pub mod aquariumconfig;
pub mod arena;
pub mod focusbridge;
pub mod frameclock;
pub mod pointer;
pub mod random;
pub mod registry;
