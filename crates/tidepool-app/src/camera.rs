//! Camera that keeps an eye on the actor.

use glam::Vec3;

use tidepool_core::config::CameraConfig;

/// Fixed-position camera whose look-at point eases toward the actor.
#[derive(Debug, Clone)]
pub struct CameraTracker {
    position: Vec3,
    look_at: Vec3,
    ease: f32,
    fov_deg: f32,
    near: f32,
    far: f32,
}

impl CameraTracker {
    /// Camera looking at the origin. `far` is the far clip distance.
    pub fn new(config: &CameraConfig, far: f32) -> Self {
        Self {
            position: config.position,
            look_at: Vec3::ZERO,
            ease: config.look_ease,
            fov_deg: config.fov_deg,
            near: config.near,
            far,
        }
    }

    /// Move the look-at point a fixed fraction of the way to `target`. With
    /// no target the camera keeps looking where it was.
    pub fn update(&mut self, target: Option<Vec3>) -> Vec3 {
        if let Some(target) = target {
            self.look_at = self.look_at.lerp(target, self.ease);
        }
        self.look_at
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// `(fov_deg, near, far)`.
    pub fn projection(&self) -> (f32, f32, f32) {
        (self.fov_deg, self.near, self.far)
    }
}
