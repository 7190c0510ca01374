//! Events emitted by the scene for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::MotionState;

/// Something observable happened during a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Actor asset arrived and the actor was added to the scene.
    ActorLoaded { clip_count: usize },
    /// Actor asset failed to load; the actor will never appear.
    ActorUnavailable { reason: String },
    /// A new destination region was chosen.
    RegionSelected { index: usize },
    /// The actor's wander cycle changed phase.
    MotionChanged { from: MotionState, to: MotionState },
    /// A flora line was added at lateral position `x`.
    FloraSpawned { x: f32, height: f32 },
    /// A flora line passed the far boundary and was removed.
    FloraRetired,
}
