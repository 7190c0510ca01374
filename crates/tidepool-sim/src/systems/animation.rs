//! Animation system: loops every clip of every animated entity.

use hecs::World;

use tidepool_core::components::AnimationPlayer;

/// Advance all playheads by `delta_ms`, wrapping at each clip's duration.
pub fn run(world: &mut World, delta_ms: f64) {
    for (_entity, player) in world.query_mut::<&mut AnimationPlayer>() {
        for (playhead, clip) in player.playheads.iter_mut().zip(&player.clips) {
            *playhead = if clip.duration_ms > 0.0 {
                (*playhead + delta_ms).rem_euclid(clip.duration_ms)
            } else {
                0.0
            };
        }
    }
}
