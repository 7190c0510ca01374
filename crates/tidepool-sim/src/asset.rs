//! Actor asset acquisition.
//!
//! Loading is asynchronous: the scene hands an [`AssetCompletion`] to an
//! [`AssetLoader`] and keeps the matching [`AssetTicket`]. The loader
//! completes whenever it likes (same thread or another one); the scene
//! checks the ticket once per poll and never blocks on it.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tidepool_core::components::AnimationClip;

/// What the scene needs from a loaded actor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorAsset {
    /// Scale baked into the model, multiplied with the configured scale.
    #[serde(default = "unit_scale")]
    pub scale: f32,
    #[serde(default)]
    pub clips: Vec<AnimationClip>,
}

fn unit_scale() -> f32 {
    1.0
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read asset {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset {id}: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("asset {id} is invalid: {reason}")]
    Invalid { id: String, reason: String },
    #[error("loader dropped the request for {0}")]
    Disconnected(String),
}

pub type AssetResult = Result<ActorAsset, AssetError>;

/// Source of actor assets.
pub trait AssetLoader {
    /// Start loading `completion.id()`. Must eventually call
    /// [`AssetCompletion::complete`] or drop the completion.
    fn load(&self, completion: AssetCompletion);
}

/// Write half of a pending load.
#[derive(Debug)]
pub struct AssetCompletion {
    id: String,
    tx: mpsc::Sender<AssetResult>,
}

impl AssetCompletion {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Deliver the result. A scene that has gone away is not an error.
    pub fn complete(self, result: AssetResult) {
        let _ = self.tx.send(result);
    }
}

/// Read half of a pending load.
#[derive(Debug)]
pub struct AssetTicket {
    id: String,
    rx: mpsc::Receiver<AssetResult>,
}

impl AssetTicket {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Take the result if the loader has finished. A loader that dropped its
    /// completion counts as a failed load.
    pub fn try_take(&self) -> Option<AssetResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Some(Err(AssetError::Disconnected(self.id.clone())))
            }
        }
    }
}

/// Create the two halves of a load for `id`.
pub fn request(id: &str) -> (AssetTicket, AssetCompletion) {
    let (tx, rx) = mpsc::channel();
    (
        AssetTicket {
            id: id.to_string(),
            rx,
        },
        AssetCompletion {
            id: id.to_string(),
            tx,
        },
    )
}

/// Parse a JSON asset manifest: `{ "scale": 1.0, "clips": [{ "name": .., "duration_ms": .. }] }`.
pub fn parse_manifest(id: &str, json: &str) -> AssetResult {
    let asset: ActorAsset = serde_json::from_str(json).map_err(|source| AssetError::Malformed {
        id: id.to_string(),
        source,
    })?;
    if !(asset.scale.is_finite() && asset.scale > 0.0) {
        return Err(AssetError::Invalid {
            id: id.to_string(),
            reason: format!("scale {} must be positive", asset.scale),
        });
    }
    if let Some(clip) = asset
        .clips
        .iter()
        .find(|c| !(c.duration_ms.is_finite() && c.duration_ms >= 0.0))
    {
        return Err(AssetError::Invalid {
            id: id.to_string(),
            reason: format!("clip {} has duration {}", clip.name, clip.duration_ms),
        });
    }
    Ok(asset)
}
