use bevy_ecs::prelude::Resource;

/// Wall-clock bookkeeping for the frame loop.
///
/// Steering works in pixels per frame, so `delta` never scales motion; the
/// clock only counts frames and feeds time-based presentation such as the
/// tail beat.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FrameClock {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl FrameClock {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
