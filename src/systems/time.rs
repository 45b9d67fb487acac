//! Frame clock update.
//!
//! Updates the shared [`FrameClock`](crate::resources::frameclock::FrameClock)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::frameclock::FrameClock;

/// Update elapsed and delta seconds and count the frame.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Negative or
/// non-finite deltas count as zero.
pub fn update_frame_clock(world: &mut World, dt: f32) {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    let mut clock = world.resource_mut::<FrameClock>();
    let scaled_dt = dt * clock.time_scale;
    clock.elapsed += scaled_dt;
    clock.delta = scaled_dt;
    clock.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_applies_time_scale() {
        let mut world = World::new();
        world.insert_resource(FrameClock::default().with_time_scale(0.5));
        update_frame_clock(&mut world, 0.1);
        update_frame_clock(&mut world, 0.1);
        let clock = world.resource::<FrameClock>();
        assert_eq!(clock.frame_count, 2);
        assert!((clock.delta - 0.05).abs() < 1e-6);
        assert!((clock.elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bad_delta_still_counts_frame() {
        let mut world = World::new();
        world.insert_resource(FrameClock::default());
        update_frame_clock(&mut world, f32::NAN);
        update_frame_clock(&mut world, -1.0);
        let clock = world.resource::<FrameClock>();
        assert_eq!(clock.frame_count, 2);
        assert_eq!(clock.elapsed, 0.0);
    }
}
