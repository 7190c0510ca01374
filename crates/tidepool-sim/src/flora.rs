//! The flora field: a stream of swaying lines that drift toward the viewer.
//!
//! New lines appear at a fixed cadence behind the visible range, drift a
//! fixed step every poll, and are removed once they pass the far boundary.
//! The field exposes no queries; everything it does shows up in the scene.

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use tidepool_core::config::FloraConfig;
use tidepool_core::events::SceneEvent;
use tidepool_core::types::FrameTime;

use crate::scene::Scene;
use crate::systems;
use crate::systems::flora_spawner::SpawnTimer;

pub struct FloraField {
    config: FloraConfig,
    rng: ChaCha8Rng,
    timer: SpawnTimer,
    live: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    initialized: bool,
}

impl FloraField {
    pub fn new(config: &FloraConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config: config.clone(),
            rng,
            timer: SpawnTimer::new(config.spawn_interval_ms),
            live: Vec::new(),
            despawn_buffer: Vec::new(),
            initialized: false,
        }
    }

    /// Start from an empty field. The next poll spawns immediately.
    pub fn initialize(&mut self, scene: &mut Scene) {
        for entity in self.live.drain(..) {
            scene.remove(entity);
        }
        self.timer.reset();
        self.initialized = true;
        log::debug!(
            "flora field ready: one line every {} ms, far limit {}",
            self.config.spawn_interval_ms,
            self.config.far_limit
        );
    }

    /// Spawn if due, then move and wave every live line and retire the ones
    /// past the far boundary.
    pub fn poll(&mut self, scene: &mut Scene, time: &FrameTime, events: &mut Vec<SceneEvent>) {
        if !self.initialized {
            return;
        }

        systems::flora_spawner::run(
            scene,
            &mut self.rng,
            &self.config,
            &mut self.timer,
            &mut self.live,
            time.now_ms,
            events,
        );
        systems::flora_motion::run(scene.world_mut(), &self.config, &self.live, time.now_secs());
        systems::cleanup::run(
            scene,
            self.config.far_limit,
            &mut self.live,
            &mut self.despawn_buffer,
            events,
        );
    }
}
