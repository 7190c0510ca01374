//! Flora motion system.
//!
//! Drifts every live flora line by a fixed step per poll and re-derives the
//! lateral offset of each vertex from a sine wave whose phase depends on the
//! vertex height, so a line sways as a travelling wave.

use hecs::{Entity, World};

use tidepool_core::components::{FloraGeometry, Transform};
use tidepool_core::config::FloraConfig;

/// Lateral offset of a vertex at `height` after `elapsed_secs`.
pub fn wave_offset(config: &FloraConfig, elapsed_secs: f64, height: f32) -> f32 {
    let phase = f64::from(height * config.wave_phase_per_height);
    let angle = f64::from(config.wave_speed) * elapsed_secs + phase;
    config.wave_amplitude * angle.sin() as f32
}

/// Advance the flora in `live`.
pub fn run(world: &mut World, config: &FloraConfig, live: &[Entity], elapsed_secs: f64) {
    for &entity in live {
        let Ok((transform, geometry)) =
            world.query_one_mut::<(&mut Transform, &mut FloraGeometry)>(entity)
        else {
            continue;
        };

        transform.position.z -= config.drift_per_poll;

        for (vertex, &height) in geometry.vertices.iter_mut().zip(&geometry.segment_heights) {
            vertex.x = wave_offset(config, elapsed_secs, height);
        }
        geometry.dirty = true;
    }
}
