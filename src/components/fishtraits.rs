//! Per-fish constants drawn once at spawn.
//!
//! Every fish gets its own top speed, turning strength, body size and tail
//! beat from independent uniform draws. They are fixed for the fish's whole
//! life; a fish that leaves the view and comes back is a new fish with new
//! traits.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::aquariumconfig::AquariumConfig;
use crate::resources::random::RandomSource;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FishTraits {
    /// Upper speed bound in pixels per frame.
    pub max_speed: f32,
    /// Velocity push applied per frame while inside a wall margin.
    pub turn_speed: f32,
    /// Body height in pixels; the body is twice as long. Rendering and hit
    /// testing only, never physics.
    pub visual_size: f32,
    /// Seconds per full tail beat.
    pub tail_period: f32,
}

impl FishTraits {
    /// Draw a fresh set of traits from the configured ranges.
    ///
    /// Draw order: max speed, size, turn speed, tail period.
    pub fn roll(rng: &mut dyn RandomSource, config: &AquariumConfig) -> Self {
        let (speed_min, speed_max) = config.max_speed_range;
        let (size_min, size_max) = config.size_range;
        let (turn_min, turn_max) = config.turn_speed_range;
        let (tail_min, tail_max) = config.tail_period_range;
        Self {
            max_speed: rng.range(speed_min, speed_max),
            visual_size: rng.range(size_min, size_max),
            turn_speed: rng.range(turn_min, turn_max),
            tail_period: rng.range(tail_min, tail_max),
        }
    }

    /// Lower speed bound for a given ratio of `max_speed`.
    pub fn min_speed(&self, ratio: f32) -> f32 {
        self.max_speed * ratio
    }

    /// Half extents of the unscaled, unrotated hit box (`2*size × size`).
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.visual_size, self.visual_size * 0.5)
    }

    /// Full body box at `scale`, unrotated: what renderers draw and what
    /// pointer hit testing checks.
    pub fn footprint(&self, scale: f32) -> Vec2 {
        self.half_extents() * 2.0 * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::random::{ScriptedRandom, SimRng};

    #[test]
    fn test_roll_lower_bounds() {
        let mut rng = ScriptedRandom::constant(0.0);
        let traits = FishTraits::roll(&mut rng, &AquariumConfig::new());
        assert_eq!(traits.max_speed, 0.8);
        assert_eq!(traits.visual_size, 35.0);
        assert_eq!(traits.turn_speed, 0.02);
        assert_eq!(traits.tail_period, 0.2);
    }

    #[test]
    fn test_roll_stays_within_ranges() {
        let config = AquariumConfig::new();
        let mut rng = SimRng::seeded(99);
        for _ in 0..500 {
            let t = FishTraits::roll(rng.source(), &config);
            assert!((0.8..=1.6).contains(&t.max_speed));
            assert!((35.0..=55.0).contains(&t.visual_size));
            assert!((0.02..=0.04).contains(&t.turn_speed));
            assert!((0.2..=0.6).contains(&t.tail_period));
        }
    }

    #[test]
    fn test_min_speed_and_extents() {
        let traits = FishTraits {
            max_speed: 1.2,
            turn_speed: 0.03,
            visual_size: 40.0,
            tail_period: 0.4,
        };
        assert!((traits.min_speed(0.5) - 0.6).abs() < 1e-6);
        assert_eq!(traits.half_extents(), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn test_footprint_is_twice_as_long_as_tall() {
        let traits = FishTraits {
            max_speed: 1.0,
            turn_speed: 0.03,
            visual_size: 40.0,
            tail_period: 0.4,
        };
        assert_eq!(traits.footprint(1.0), Vec2::new(80.0, 40.0));
        assert_eq!(traits.footprint(1.5), Vec2::new(120.0, 60.0));
    }
}
