//! Frame driver: advances every fish by one frame.
//!
//! One run of [`swim_system`] is one display frame. For each fish:
//!
//! - **No visual attached** – nothing happens this frame, not even
//!   integration; the fish is picked up again next frame.
//! - **Swimming** – steer (see [`crate::steering`]), move by the new velocity,
//!   and emit the transform at scale `1.0`.
//! - **Hovered** – hold position and velocity, emit the transform at the
//!   configured hover scale. The heading comes from the kept velocity, so the
//!   fish keeps facing where it was going.
//! - **Arena not measured** – swim in place: no steering, no movement.
//!
//! A fish stops being driven the moment its entity is despawned; there is no
//! per-fish timer to leak.

use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::diaryentry::DiaryEntry;
use crate::components::fishtraits::FishTraits;
use crate::components::hoverstate::HoverState;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visualbinding::{FishTransform, VisualBinding};
use crate::resources::aquariumconfig::AquariumConfig;
use crate::resources::arena::ArenaBounds;
use crate::resources::frameclock::FrameClock;
use crate::resources::random::SimRng;
use crate::steering::{SteeringParams, steer};

/// Peak tail swing either side of the body axis.
pub const TAIL_SWING_DEGREES: f32 = 12.0;

/// Tail swing at `elapsed` seconds for a beat of `period` seconds.
///
/// Starts centred, reaches `+12°` a quarter period later and `-12°` at three
/// quarters.
pub fn tail_angle(elapsed: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    TAIL_SWING_DEGREES * (TAU * elapsed / period).sin()
}

pub fn swim_system(
    mut query: Query<(
        &DiaryEntry,
        &FishTraits,
        &HoverState,
        &mut RigidBody,
        &mut MapPosition,
        &mut Rotation,
        &mut Scale,
        &mut VisualBinding,
    )>,
    arena: Res<ArenaBounds>,
    config: Res<AquariumConfig>,
    clock: Res<FrameClock>,
    mut rng: ResMut<SimRng>,
) {
    let arena = *arena;
    let params = SteeringParams::from_config(&config);

    for (entry, traits, hover, mut body, mut position, mut rotation, mut scale, mut binding) in
        query.iter_mut()
    {
        let Some(handle) = binding.handle.clone() else {
            if binding.skipped_frames == 0 {
                debug!("fish '{}' has no visual yet, skipping its frames", entry.id);
            }
            binding.skipped_frames += 1;
            continue;
        };
        if binding.skipped_frames != 0 {
            binding.skipped_frames = 0;
        }

        if hover.is_hovered() {
            scale.scale = config.hover_scale;
        } else {
            if arena.is_measured() {
                body.velocity = steer(
                    body.velocity,
                    position.pos,
                    traits,
                    arena,
                    &params,
                    rng.source(),
                );
                let velocity = body.velocity;
                position.translate(velocity);
            }
            scale.scale = 1.0;
        }
        rotation.degrees = body.heading_degrees();

        handle.apply_transform(&FishTransform {
            x: position.pos.x,
            y: position.pos.y,
            rotation: rotation.degrees,
            scale: scale.scale,
            tail_angle: tail_angle(clock.elapsed, traits.tail_period),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_tail_angle_cycle() {
        assert!(tail_angle(0.0, 0.4).abs() < EPSILON);
        assert!((tail_angle(0.1, 0.4) - 12.0).abs() < EPSILON);
        assert!(tail_angle(0.2, 0.4).abs() < EPSILON);
        assert!((tail_angle(0.3, 0.4) + 12.0).abs() < EPSILON);
        assert!((tail_angle(0.05, 0.2) - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_tail_angle_degenerate_period() {
        assert_eq!(tail_angle(1.0, 0.0), 0.0);
    }
}
