//! Scene snapshot: the complete visible state handed to the renderer each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ActorStatus, MotionState};
use crate::events::SceneEvent;
use crate::types::FrameTime;

/// Complete scene state produced after each poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: FrameTime,
    pub actor: ActorView,
    pub flora: Vec<FloraView>,
    pub events: Vec<SceneEvent>,
}

/// The wandering actor, if it is in the scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorView {
    pub status: ActorStatus,
    pub position: Option<Vec3>,
    /// Rotation about +Y (radians).
    pub heading: Option<f32>,
    pub motion: MotionState,
    /// Region the actor is heading to or resting at.
    pub region: Option<usize>,
}

/// A live flora line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloraView {
    pub position: Vec3,
    /// Line vertices in the flora's local frame.
    pub vertices: Vec<Vec3>,
    /// Whether the vertices changed since the previous snapshot.
    pub changed: bool,
}
