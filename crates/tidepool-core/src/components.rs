//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Root node transform of anything placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about +Y (radians).
    pub heading: f32,
    pub scale: f32,
}

/// Marks the wandering actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor;

/// Marks a flora line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flora;

/// One looping animation clip of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub duration_ms: f64,
}

/// Plays every clip of the actor asset on a loop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationPlayer {
    pub clips: Vec<AnimationClip>,
    /// Playhead per clip (ms), same order as `clips`.
    pub playheads: Vec<f64>,
}

/// Line geometry of a flora entity, in the entity's local frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloraGeometry {
    /// Fixed height of every vertex, bottom to top. Set once at spawn.
    pub segment_heights: Vec<f32>,
    /// Current vertices. Only `x` changes after spawn.
    pub vertices: Vec<Vec3>,
    /// Set when `vertices` changed since the renderer last read them.
    pub dirty: bool,
}
