//! Steering model: how a swimming fish updates its velocity each frame.
//!
//! Three additive adjustments, always in this order:
//!
//! 1. **Wall avoidance** – inside the `margin` band along any wall, push the
//!    velocity back toward the interior by `turn_speed`. The four walls are
//!    checked independently, so a fish in a corner is pushed on both axes.
//! 2. **Wander** – add an independent draw in
//!    `[-wander_strength / 2, wander_strength / 2)` to each component.
//! 3. **Speed governance** – rescale the velocity into
//!    `[min_speed_ratio * max_speed, max_speed]`, keeping its direction. A
//!    zero velocity has no direction, so a random one is picked first.
//!
//! Everything here is a plain function of its arguments plus draws from the
//! supplied [`RandomSource`]; there is no hidden state.

use std::f32::consts::TAU;

use glam::Vec2;
use log::trace;

use crate::components::fishtraits::FishTraits;
use crate::resources::aquariumconfig::AquariumConfig;
use crate::resources::arena::ArenaBounds;
use crate::resources::random::RandomSource;

/// The shared knobs of the steering model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    pub margin: f32,
    pub wander_strength: f32,
    pub min_speed_ratio: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self::from_config(&AquariumConfig::new())
    }
}

impl SteeringParams {
    pub fn from_config(config: &AquariumConfig) -> Self {
        Self {
            margin: config.margin,
            wander_strength: config.wander_strength,
            min_speed_ratio: config.min_speed_ratio,
        }
    }
}

/// Push the velocity away from any wall closer than `margin`.
pub fn avoid_walls(
    velocity: Vec2,
    position: Vec2,
    arena: ArenaBounds,
    margin: f32,
    turn_speed: f32,
) -> Vec2 {
    let mut v = velocity;
    if position.x < margin {
        v.x += turn_speed;
    }
    if position.x > arena.width - margin {
        v.x -= turn_speed;
    }
    if position.y < margin {
        v.y += turn_speed;
    }
    if position.y > arena.height - margin {
        v.y -= turn_speed;
    }
    v
}

/// Add a small centred random nudge to each component.
pub fn wander(velocity: Vec2, strength: f32, rng: &mut dyn RandomSource) -> Vec2 {
    let dx = rng.centered() * strength;
    let dy = rng.centered() * strength;
    velocity + Vec2::new(dx, dy)
}

/// Rescale `velocity` into `[min_ratio * max_speed, max_speed]`.
///
/// Speeds already inside the band are returned unchanged. A zero (or
/// non-finite) velocity is replaced by a random direction at the minimum
/// speed.
pub fn govern_speed(
    velocity: Vec2,
    max_speed: f32,
    min_ratio: f32,
    rng: &mut dyn RandomSource,
) -> Vec2 {
    let min_speed = max_speed * min_ratio;
    let speed = velocity.length();
    if !speed.is_finite() || speed <= f32::MIN_POSITIVE {
        trace!("zero-length velocity, picking a random heading");
        return random_unit(rng) * min_speed;
    }
    if speed > max_speed {
        velocity / speed * max_speed
    } else if speed < min_speed {
        velocity / speed * min_speed
    } else {
        velocity
    }
}

/// A uniformly distributed direction.
pub fn random_unit(rng: &mut dyn RandomSource) -> Vec2 {
    let angle = rng.unit() * TAU;
    Vec2::new(angle.cos(), angle.sin())
}

/// One full steering step: walls, wander, then speed governance.
pub fn steer(
    velocity: Vec2,
    position: Vec2,
    traits: &FishTraits,
    arena: ArenaBounds,
    params: &SteeringParams,
    rng: &mut dyn RandomSource,
) -> Vec2 {
    let v = avoid_walls(velocity, position, arena, params.margin, traits.turn_speed);
    let v = wander(v, params.wander_strength, rng);
    govern_speed(v, traits.max_speed, params.min_speed_ratio, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::random::{ScriptedRandom, SimRng};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn traits(max_speed: f32, turn_speed: f32) -> FishTraits {
        FishTraits {
            max_speed,
            turn_speed,
            visual_size: 40.0,
            tail_period: 0.4,
        }
    }

    const ARENA: ArenaBounds = ArenaBounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_no_wall_push_in_open_water() {
        let v = avoid_walls(Vec2::new(0.3, -0.2), Vec2::new(400.0, 300.0), ARENA, 100.0, 0.03);
        assert_eq!(v, Vec2::new(0.3, -0.2));
    }

    #[test]
    fn test_left_wall_pushes_right() {
        let v = avoid_walls(Vec2::new(-1.0, 0.0), Vec2::new(50.0, 300.0), ARENA, 100.0, 0.03);
        assert!(approx_eq(v.x, -0.97));
        assert!(approx_eq(v.y, 0.0));
    }

    #[test]
    fn test_right_and_bottom_walls_push_back() {
        let v = avoid_walls(Vec2::ZERO, Vec2::new(750.0, 550.0), ARENA, 100.0, 0.03);
        assert!(approx_eq(v.x, -0.03));
        assert!(approx_eq(v.y, -0.03));
    }

    #[test]
    fn test_corner_fires_both_axes() {
        let v = avoid_walls(Vec2::ZERO, Vec2::new(10.0, 10.0), ARENA, 100.0, 0.02);
        assert!(approx_eq(v.x, 0.02));
        assert!(approx_eq(v.y, 0.02));
    }

    #[test]
    fn test_narrow_arena_fires_opposite_walls_together() {
        // Both margins overlap: x < margin and x > width - margin cancel out.
        let narrow = ArenaBounds::new(150.0, 600.0);
        let v = avoid_walls(Vec2::ZERO, Vec2::new(75.0, 300.0), narrow, 100.0, 0.03);
        assert!(approx_eq(v.x, 0.0));
    }

    #[test]
    fn test_margin_boundaries_are_strict() {
        let v = avoid_walls(Vec2::ZERO, Vec2::new(100.0, 500.0), ARENA, 100.0, 0.03);
        assert_eq!(v, Vec2::ZERO);
        let v = avoid_walls(Vec2::ZERO, Vec2::new(700.0, 100.0), ARENA, 100.0, 0.03);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_wander_is_zero_with_centred_draws() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(wander(Vec2::new(1.0, 2.0), 0.05, &mut rng), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_wander_extremes() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);
        let v = wander(Vec2::ZERO, 0.05, &mut rng);
        assert!(approx_eq(v.x, -0.025));
        assert!(approx_eq(v.y, -0.025));
    }

    #[test]
    fn test_wander_stays_within_half_strength() {
        let mut rng = SimRng::seeded(3);
        for _ in 0..1000 {
            let v = wander(Vec2::ZERO, 0.05, rng.source());
            assert!(v.x >= -0.025 && v.x <= 0.025);
            assert!(v.y >= -0.025 && v.y <= 0.025);
        }
    }

    #[test]
    fn test_govern_caps_fast_velocity() {
        let mut rng = ScriptedRandom::constant(0.5);
        let v = govern_speed(Vec2::new(3.0, 4.0), 1.0, 0.5, &mut rng);
        assert!(approx_eq(v.length(), 1.0));
        assert!(approx_eq(v.x, 0.6));
        assert!(approx_eq(v.y, 0.8));
    }

    #[test]
    fn test_govern_lifts_slow_velocity() {
        let mut rng = ScriptedRandom::constant(0.5);
        let v = govern_speed(Vec2::new(0.1, 0.0), 1.2, 0.5, &mut rng);
        assert!(approx_eq(v.x, 0.6));
        assert!(approx_eq(v.y, 0.0));
    }

    #[test]
    fn test_govern_keeps_speed_inside_band() {
        let mut rng = ScriptedRandom::constant(0.5);
        let v = govern_speed(Vec2::new(0.0, -0.9), 1.2, 0.5, &mut rng);
        assert_eq!(v, Vec2::new(0.0, -0.9));
    }

    #[test]
    fn test_govern_rescues_zero_velocity() {
        let mut rng = ScriptedRandom::constant(0.25);
        let v = govern_speed(Vec2::ZERO, 1.0, 0.5, &mut rng);
        assert!(v.is_finite());
        assert!(approx_eq(v.length(), 0.5));
        // 0.25 of a turn points straight down the y axis.
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 0.5));
    }

    #[test]
    fn test_govern_rescues_nan_velocity() {
        let mut rng = ScriptedRandom::constant(0.0);
        let v = govern_speed(Vec2::new(f32::NAN, 1.0), 1.0, 0.5, &mut rng);
        assert!(v.is_finite());
        assert!(approx_eq(v.length(), 0.5));
    }

    #[test]
    fn test_steer_scenario_left_wall() {
        // 800x600 arena, fish at (50, 300) heading left; wander pinned to zero.
        let mut rng = ScriptedRandom::constant(0.5);
        let t = traits(1.6, 0.03);
        let v = steer(
            Vec2::new(-1.0, 0.0),
            Vec2::new(50.0, 300.0),
            &t,
            ARENA,
            &SteeringParams::default(),
            &mut rng,
        );
        // -0.97 is inside [0.8, 1.6] in magnitude, so the clamp leaves it.
        assert!(approx_eq(v.x, -0.97));
        assert!(approx_eq(v.y, 0.0));
    }

    #[test]
    fn test_steer_scenario_left_wall_with_low_max_speed() {
        let mut rng = ScriptedRandom::constant(0.5);
        let t = traits(0.9, 0.03);
        let v = steer(
            Vec2::new(-1.0, 0.0),
            Vec2::new(50.0, 300.0),
            &t,
            ARENA,
            &SteeringParams::default(),
            &mut rng,
        );
        assert!(approx_eq(v.x, -0.9));
    }

    #[test]
    fn test_steer_keeps_speed_band_over_many_steps() {
        let mut rng = SimRng::seeded(11);
        let t = traits(1.1, 0.035);
        let params = SteeringParams::default();
        let mut v = Vec2::new(0.2, -0.1);
        let mut p = Vec2::new(400.0, 300.0);
        for _ in 0..5000 {
            v = steer(v, p, &t, ARENA, &params, rng.source());
            p += v;
            let speed = v.length();
            assert!(speed <= t.max_speed + EPSILON);
            assert!(speed >= t.max_speed * 0.5 - EPSILON);
        }
    }
}
