//! Kinematic body component holding a fish's velocity.
//!
//! The [`RigidBody`] component stores the velocity in arena pixels per frame.
//! Only the steering model writes it, and only while the fish is swimming. A
//! hovered fish keeps its last velocity so its heading survives the pause.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing the per-frame velocity of a fish.
///
/// # Example
/// ```ignore
/// let rb = RigidBody::with_velocity(Vec2::new(-1.0, 0.0));
/// assert_eq!(rb.heading_degrees(), 180.0);
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in arena pixels per frame.
    pub velocity: Vec2,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody with an initial velocity.
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self { velocity }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Heading of the velocity in degrees, `atan2(vy, vx)`.
    ///
    /// A zero velocity yields `0.0`.
    pub fn heading_degrees(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(approx_eq(rb.speed(), 0.0));
    }

    #[test]
    fn test_speed_is_magnitude() {
        let rb = RigidBody::with_velocity(Vec2::new(3.0, 4.0));
        assert!(approx_eq(rb.speed(), 5.0));
    }

    #[test]
    fn test_heading_degrees() {
        assert!(approx_eq(
            RigidBody::with_velocity(Vec2::new(1.0, 0.0)).heading_degrees(),
            0.0
        ));
        assert!(approx_eq(
            RigidBody::with_velocity(Vec2::new(0.0, 1.0)).heading_degrees(),
            90.0
        ));
        assert!(approx_eq(
            RigidBody::with_velocity(Vec2::new(-1.0, 0.0)).heading_degrees(),
            180.0
        ));
        assert!(approx_eq(
            RigidBody::with_velocity(Vec2::new(0.0, -2.0)).heading_degrees(),
            -90.0
        ));
    }

    #[test]
    fn test_heading_of_zero_velocity_is_zero() {
        assert!(approx_eq(RigidBody::new().heading_degrees(), 0.0));
    }
}
