use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::fishtraits::FishTraits;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::zindex::ZIndex;
use crate::events::pointer::{PointerEnterEvent, PointerLeaveEvent};
use crate::resources::pointer::PointerState;

/// True when `point` falls inside the fish's body box.
///
/// The box is `2*visual_size × visual_size`, centred on the fish, turned by
/// its rotation and grown by its scale, i.e. the footprint it is drawn with.
pub fn hit_test(
    point: Vec2,
    position: Vec2,
    rotation_degrees: f32,
    scale: f32,
    traits: &FishTraits,
) -> bool {
    if scale <= 0.0 {
        return false;
    }
    let d = point - position;
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    // Rotate by -rotation into the fish's own frame.
    let local = Vec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
    let half = traits.footprint(scale) * 0.5;
    local.x.abs() <= half.x && local.y.abs() <= half.y
}

/// Turn the tracked pointer position into enter/leave events for the topmost
/// fish under it.
///
/// Runs every frame, so a fish swimming under a resting pointer gets hovered
/// too. Only fish entered through this system are left by it.
pub fn pointer_hover_system(
    mut pointer: ResMut<PointerState>,
    fish: Query<(Entity, &MapPosition, &Rotation, &Scale, &FishTraits, &ZIndex)>,
    mut commands: Commands,
) {
    let target = pointer.position.and_then(|point| {
        fish.iter()
            .filter(|(_, pos, rot, scale, traits, _)| {
                hit_test(point, pos.pos, rot.degrees, scale.scale, traits)
            })
            .max_by_key(|(_, _, _, _, _, z)| **z)
            .map(|(entity, ..)| entity)
    });

    if target == pointer.hovered {
        return;
    }
    if let Some(previous) = pointer.hovered.take() {
        commands.trigger(PointerLeaveEvent { entity: previous });
    }
    if let Some(next) = target {
        commands.trigger(PointerEnterEvent { entity: next });
    }
    pointer.hovered = target;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits() -> FishTraits {
        FishTraits {
            max_speed: 1.0,
            turn_speed: 0.03,
            visual_size: 40.0,
            tail_period: 0.4,
        }
    }

    #[test]
    fn test_hit_inside_unrotated_box() {
        let t = traits();
        let at = Vec2::new(100.0, 100.0);
        assert!(hit_test(Vec2::new(139.0, 119.0), at, 0.0, 1.0, &t));
        assert!(!hit_test(Vec2::new(141.0, 100.0), at, 0.0, 1.0, &t));
        assert!(!hit_test(Vec2::new(100.0, 121.0), at, 0.0, 1.0, &t));
    }

    #[test]
    fn test_hit_follows_rotation() {
        let t = traits();
        let at = Vec2::new(0.0, 0.0);
        // Facing down: the long axis is vertical.
        assert!(hit_test(Vec2::new(0.0, 35.0), at, 90.0, 1.0, &t));
        assert!(!hit_test(Vec2::new(35.0, 0.0), at, 90.0, 1.0, &t));
    }

    #[test]
    fn test_hit_grows_with_scale() {
        let t = traits();
        let at = Vec2::ZERO;
        let point = Vec2::new(45.0, 0.0);
        assert!(!hit_test(point, at, 0.0, 1.0, &t));
        assert!(hit_test(point, at, 0.0, 1.3, &t));
    }

    #[test]
    fn test_zero_scale_never_hits() {
        assert!(!hit_test(Vec2::ZERO, Vec2::ZERO, 0.0, 0.0, &traits()));
    }

    #[test]
    fn test_hit_box_is_the_drawn_footprint() {
        let t = traits();
        let at = Vec2::new(200.0, 100.0);
        for scale in [1.0, 1.3] {
            let half = t.footprint(scale) * 0.5;
            assert!(hit_test(at + half * 0.999, at, 0.0, scale, &t));
            assert!(hit_test(at - half * 0.999, at, 0.0, scale, &t));
            assert!(!hit_test(at + Vec2::new(half.x + 0.5, 0.0), at, 0.0, scale, &t));
            assert!(!hit_test(at + Vec2::new(0.0, half.y + 0.5), at, 0.0, scale, &t));
        }
    }
}
