//! Presentation side channel for per-frame transforms.
//!
//! Drawing a fish's body (shape, gradient, label) is the host's business and
//! happens rarely. Moving it happens every frame, so the swim system pushes a
//! [`FishTransform`] straight into a [`VisualHandle`] instead of asking the
//! host to re-render anything.
//!
//! A fish whose [`VisualBinding`] has no handle yet (its visual has not been
//! created, or was torn down for a moment) is skipped for that frame and
//! picked up again on the next one.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Screen transform of one fish for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FishTransform {
    /// Translation in arena pixels.
    pub x: f32,
    pub y: f32,
    /// Heading in degrees, `atan2(vy, vx)`.
    pub rotation: f32,
    /// Uniform scale: 1.0 swimming, hover scale when hovered.
    pub scale: f32,
    /// Tail swing in degrees for renderers that animate it.
    pub tail_angle: f32,
}

impl FishTransform {
    /// CSS form: `translate3d(..px, ..px, 0) rotate(..deg) scale(..)`.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            self.x, self.y, self.rotation, self.scale
        )
    }
}

/// Something that can display a fish at a transform.
///
/// Called from the frame loop, once per fish per frame; keep it cheap.
pub trait VisualHandle: Send + Sync + 'static {
    fn apply_transform(&self, transform: &FishTransform);
}

/// Optional link from a fish to its visual.
#[derive(Component, Clone, Default)]
pub struct VisualBinding {
    pub handle: Option<Arc<dyn VisualHandle>>,
    /// Frames skipped in a row because no handle was attached.
    pub skipped_frames: u64,
}

impl VisualBinding {
    pub fn attached(handle: Arc<dyn VisualHandle>) -> Self {
        Self {
            handle: Some(handle),
            skipped_frames: 0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }
}

impl std::fmt::Debug for VisualBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualBinding")
            .field("attached", &self.is_attached())
            .field("skipped_frames", &self.skipped_frames)
            .finish()
    }
}

/// A [`VisualHandle`] that keeps the latest transform for the host to read.
///
/// Also counts writes, which makes "nothing is written after cancellation"
/// observable.
#[derive(Debug, Default)]
pub struct TransformSlot {
    latest: Mutex<Option<FishTransform>>,
    writes: AtomicU64,
}

impl TransformSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Most recent transform, if any frame has been written yet.
    pub fn latest(&self) -> Option<FishTransform> {
        match self.latest.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Total number of transforms written so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl VisualHandle for TransformSlot {
    fn apply_transform(&self, transform: &FishTransform) {
        match self.latest.lock() {
            Ok(mut guard) => *guard = Some(*transform),
            Err(poisoned) => *poisoned.into_inner() = Some(*transform),
        }
        self.writes.fetch_add(1, Ordering::Relaxed);
    }
}
