//! Cleanup system: retires flora that has passed the far boundary.

use hecs::Entity;

use tidepool_core::components::Transform;
use tidepool_core::events::SceneEvent;

use crate::scene::Scene;

/// Remove every live flora line with `z < -far_limit` from the scene and from
/// `live`. Uses a pre-allocated buffer to avoid per-poll allocation.
pub fn run(
    scene: &mut Scene,
    far_limit: f32,
    live: &mut Vec<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SceneEvent>,
) {
    despawn_buffer.clear();

    for &entity in live.iter() {
        match scene.world().get::<&Transform>(entity) {
            Ok(transform) if transform.position.z < -far_limit => despawn_buffer.push(entity),
            Ok(_) => {}
            // Removed from the scene behind our back; just forget it.
            Err(_) => despawn_buffer.push(entity),
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }

    for &entity in despawn_buffer.iter() {
        if scene.remove(entity) {
            events.push(SceneEvent::FloraRetired);
        }
    }
    live.retain(|entity| !despawn_buffer.contains(entity));
    log::trace!("retired {} flora ({} live)", despawn_buffer.len(), live.len());
}
