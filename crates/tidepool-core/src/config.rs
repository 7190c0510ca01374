//! Session configuration.
//!
//! Every field defaults to the matching constant in [`crate::constants`],
//! so a JSON file only needs the values it overrides. The config is fixed
//! once a scene engine has been created from it.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::vec3;

/// Why a config was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Configuration for a whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed. Same seed and same timestamps give the same scene.
    pub seed: u64,
    pub motion: MotionConfig,
    pub flora: FloraConfig,
    pub camera: CameraConfig,
}

/// Tuning for the actor's wander cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub asset_id: String,
    pub spawn_position: Vec3,
    pub scale: f32,
    pub rest_heading: f32,
    pub rotation_duration_ms: f64,
    pub translation_duration_ms: f64,
    /// Largest turn away from the rest heading per cycle (radians).
    pub max_turn_rad: f32,
    pub idle_wait_min_ms: f64,
    pub idle_wait_max_ms: f64,
    pub regions: Vec<Vec3>,
    pub start_region: usize,
}

/// Tuning for the flora field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloraConfig {
    pub spawn_interval_ms: f64,
    pub drift_per_poll: f32,
    pub far_limit: f32,
    pub wave_amplitude: f32,
    pub wave_speed: f32,
    pub wave_phase_per_height: f32,
    pub segment_count: usize,
    pub lateral_range: f32,
    pub base_y: f32,
    pub height_min: f32,
    pub height_max: f32,
    pub spawn_z: f32,
}

/// Camera placement and look-at easing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub look_ease: f32,
    pub fov_deg: f32,
    pub near: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            motion: MotionConfig::default(),
            flora: FloraConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            asset_id: ACTOR_ASSET_ID.to_string(),
            spawn_position: vec3(ACTOR_SPAWN_POSITION),
            scale: ACTOR_SCALE,
            rest_heading: REST_HEADING,
            rotation_duration_ms: ROTATION_DURATION_MS,
            translation_duration_ms: TRANSLATION_DURATION_MS,
            max_turn_rad: MAX_TURN_RAD,
            idle_wait_min_ms: IDLE_WAIT_MIN_MS,
            idle_wait_max_ms: IDLE_WAIT_MAX_MS,
            regions: REGION_POSITIONS.iter().copied().map(vec3).collect(),
            start_region: START_REGION,
        }
    }
}

impl Default for FloraConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: FLORA_SPAWN_INTERVAL_MS,
            drift_per_poll: FLORA_DRIFT_PER_POLL,
            far_limit: FAR_LIMIT,
            wave_amplitude: WAVE_AMPLITUDE,
            wave_speed: WAVE_SPEED,
            wave_phase_per_height: WAVE_PHASE_PER_HEIGHT,
            segment_count: SEGMENT_COUNT,
            lateral_range: FLORA_LATERAL_RANGE,
            base_y: FLORA_BASE_Y,
            height_min: FLORA_HEIGHT_MIN,
            height_max: FLORA_HEIGHT_MAX,
            spawn_z: FLORA_SPAWN_Z,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: vec3(CAMERA_POSITION),
            look_ease: CAMERA_LOOK_EASE,
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.validate()?;
        self.flora.validate()?;
        self.camera.validate()
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive"))
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("motion.rotation_duration_ms", self.rotation_duration_ms)?;
        positive("motion.translation_duration_ms", self.translation_duration_ms)?;
        positive("motion.scale", self.scale as f64)?;
        finite("motion.rest_heading", self.rest_heading as f64)?;
        finite("motion.max_turn_rad", self.max_turn_rad as f64)?;
        // A cap at or past pi would let the heading tween take the long way round.
        if !(0.0..std::f32::consts::PI).contains(&self.max_turn_rad) {
            return Err(invalid("motion.max_turn_rad", "must be in [0, pi)"));
        }
        finite("motion.idle_wait_min_ms", self.idle_wait_min_ms)?;
        finite("motion.idle_wait_max_ms", self.idle_wait_max_ms)?;
        if self.idle_wait_min_ms < 0.0 || self.idle_wait_max_ms < self.idle_wait_min_ms {
            return Err(invalid("motion.idle_wait", "must satisfy 0 <= min <= max"));
        }
        if self.regions.len() < 2 {
            return Err(invalid("motion.regions", "needs at least two regions"));
        }
        if !self.regions.iter().all(|r| r.is_finite()) || !self.spawn_position.is_finite() {
            return Err(invalid("motion.regions", "must be finite"));
        }
        if self.start_region >= self.regions.len() {
            return Err(invalid("motion.start_region", "is out of range"));
        }
        Ok(())
    }
}

impl FloraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("flora.spawn_interval_ms", self.spawn_interval_ms)?;
        positive("flora.far_limit", self.far_limit as f64)?;
        finite("flora.drift_per_poll", self.drift_per_poll as f64)?;
        finite("flora.wave_amplitude", self.wave_amplitude as f64)?;
        finite("flora.wave_speed", self.wave_speed as f64)?;
        finite("flora.wave_phase_per_height", self.wave_phase_per_height as f64)?;
        finite("flora.lateral_range", self.lateral_range as f64)?;
        finite("flora.base_y", self.base_y as f64)?;
        finite("flora.spawn_z", self.spawn_z as f64)?;
        if self.segment_count == 0 {
            return Err(invalid("flora.segment_count", "must be at least 1"));
        }
        // Flora only ever moves away from its spawn depth.
        if self.drift_per_poll < 0.0 {
            return Err(invalid("flora.drift_per_poll", "must not be negative"));
        }
        if self.lateral_range < 0.0 {
            return Err(invalid("flora.lateral_range", "must not be negative"));
        }
        if !(self.height_min.is_finite() && self.height_max.is_finite())
            || self.height_min < 0.0
            || self.height_max < self.height_min
        {
            return Err(invalid("flora.height", "must satisfy 0 <= min <= max"));
        }
        if self.spawn_z < -self.far_limit {
            return Err(invalid("flora.spawn_z", "is beyond the far limit"));
        }
        Ok(())
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.is_finite() {
            return Err(invalid("camera.position", "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.look_ease) {
            return Err(invalid("camera.look_ease", "must be in [0, 1]"));
        }
        positive("camera.fov_deg", self.fov_deg as f64)?;
        positive("camera.near", self.near as f64)
    }
}
