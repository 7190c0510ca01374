//! Snapshot system: queries the scene and builds a complete SceneSnapshot.
//!
//! Reading flora geometry clears its dirty flag, the same way a renderer
//! would after uploading the vertices.

use hecs::World;

use tidepool_core::components::{Flora, FloraGeometry, Transform};
use tidepool_core::events::SceneEvent;
use tidepool_core::state::{ActorView, FloraView, SceneSnapshot};
use tidepool_core::types::FrameTime;

/// Build a complete SceneSnapshot from the current scene.
pub fn build_snapshot(
    world: &mut World,
    time: &FrameTime,
    actor: ActorView,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        actor,
        flora: build_flora(world),
        events,
    }
}

fn build_flora(world: &mut World) -> Vec<FloraView> {
    world
        .query_mut::<(&Flora, &Transform, &mut FloraGeometry)>()
        .into_iter()
        .map(|(_, (_, transform, geometry))| FloraView {
            position: transform.position,
            vertices: geometry.vertices.clone(),
            changed: std::mem::replace(&mut geometry.dirty, false),
        })
        .collect()
}
