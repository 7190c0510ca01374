//! Fundamental geometric and timing types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Placement of a scene node. Heading is a rotation about +Y in radians;
/// heading 0 faces +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub heading: f32,
}

impl Pose {
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }
}

/// Frame clock as seen by the scene.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of polls performed so far.
    pub frame: u64,
    /// Timestamp of the latest poll (ms, monotonic).
    pub now_ms: f64,
    /// Time since the previous poll (ms). Zero on the first poll.
    pub delta_ms: f64,
}

impl FrameTime {
    /// Advance to a new timestamp. Timestamps that go backwards are clamped
    /// to the current one so the clock never runs in reverse.
    pub fn advance(&mut self, now_ms: f64) {
        let now_ms = if self.frame == 0 {
            now_ms
        } else {
            now_ms.max(self.now_ms)
        };
        self.delta_ms = if self.frame == 0 {
            0.0
        } else {
            now_ms - self.now_ms
        };
        self.now_ms = now_ms;
        self.frame += 1;
    }

    /// Latest timestamp in seconds.
    pub fn now_secs(&self) -> f64 {
        self.now_ms / crate::constants::MS_PER_SEC
    }
}

/// Convert a `[x, y, z]` constant into a vector.
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}
