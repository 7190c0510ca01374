//! Entity spawn factories for the scene.
//!
//! Creates the actor and flora entities with their component bundles.

use glam::Vec3;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tidepool_core::components::*;
use tidepool_core::config::{FloraConfig, MotionConfig};
use tidepool_core::types::Pose;

use crate::asset::ActorAsset;
use crate::scene::Scene;

/// Add the actor to the scene at `pose`, playing every clip of its asset.
pub fn spawn_actor(
    scene: &mut Scene,
    config: &MotionConfig,
    asset: &ActorAsset,
    pose: Pose,
) -> Entity {
    let player = AnimationPlayer {
        playheads: vec![0.0; asset.clips.len()],
        clips: asset.clips.clone(),
    };
    scene.add((
        Actor,
        Transform {
            position: pose.position,
            heading: pose.heading,
            scale: config.scale * asset.scale,
        },
        player,
    ))
}

/// Fixed vertex heights of a flora line: `segment_count + 1` evenly spaced
/// points from `base_y` up to `base_y + height`.
pub fn segment_heights(config: &FloraConfig, height: f32) -> Vec<f32> {
    let step = height / config.segment_count as f32;
    (0..=config.segment_count)
        .map(|i| config.base_y + step * i as f32)
        .collect()
}

/// A freshly spawned flora line.
#[derive(Debug, Clone, Copy)]
pub struct SpawnedFlora {
    pub entity: Entity,
    pub x: f32,
    pub height: f32,
}

/// Add one flora line at a random lateral position and height, at the
/// configured spawn depth.
pub fn spawn_flora(scene: &mut Scene, rng: &mut ChaCha8Rng, config: &FloraConfig) -> SpawnedFlora {
    let x = (rng.gen::<f32>() - 0.5) * config.lateral_range;
    let height = config.height_min + rng.gen::<f32>() * (config.height_max - config.height_min);

    let heights = segment_heights(config, height);
    let vertices = heights.iter().map(|&y| Vec3::new(0.0, y, 0.0)).collect();
    let geometry = FloraGeometry {
        segment_heights: heights,
        vertices,
        dirty: true,
    };

    let entity = scene.add((
        Flora,
        Transform {
            position: Vec3::new(x, 0.0, config.spawn_z),
            heading: 0.0,
            scale: 1.0,
        },
        geometry,
    ));
    SpawnedFlora { entity, x, height }
}
