//! Pluggable random source for the simulation.
//!
//! Everything random in the engine (initial placement, traits, wander, the
//! zero-speed rescue) draws from the [`SimRng`] resource through the
//! [`RandomSource`] trait. Production uses `fastrand`; tests swap in a
//! [`ScriptedRandom`] to pin every draw without touching the steering code.

use bevy_ecs::prelude::Resource;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource: Send + Sync + 'static {
    /// Next uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform value in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// Uniform value in `[-0.5, 0.5)`.
    fn centered(&mut self) -> f32 {
        self.unit() - 0.5
    }
}

impl RandomSource for fastrand::Rng {
    fn unit(&mut self) -> f32 {
        self.f32()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// `ScriptedRandom::constant(0.5)` makes every centred draw zero, which turns
/// wander off and places fish in the middle of every range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values outside `[0, 1)` are clamped into it.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values: Vec<f32> = values.into();
        if values.is_empty() {
            values.push(0.5);
        }
        for v in values.iter_mut() {
            *v = v.clamp(0.0, 1.0 - f32::EPSILON);
        }
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// The simulation's random source.
#[derive(Resource)]
pub struct SimRng(Box<dyn RandomSource>);

impl SimRng {
    pub fn new(source: impl RandomSource) -> Self {
        Self(Box::new(source))
    }

    /// Reproducible `fastrand` generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    /// Unseeded `fastrand` generator; fish differ on every run.
    pub fn from_entropy() -> Self {
        Self::new(fastrand::Rng::new())
    }

    pub fn source(&mut self) -> &mut dyn RandomSource {
        self.0.as_mut()
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
