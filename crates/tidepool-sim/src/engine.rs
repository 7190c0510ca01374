//! Scene engine for one tidepool scene.
//!
//! `SceneEngine` owns the scene container, the actor controller and the
//! flora field, polls both once per frame with the driver's timestamp, and
//! produces `SceneSnapshot`s. Completely headless, so tests can drive it
//! with synthetic timestamps.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tidepool_core::config::{ConfigError, SceneConfig};
use tidepool_core::events::SceneEvent;
use tidepool_core::state::SceneSnapshot;
use tidepool_core::types::FrameTime;

use crate::actor::ActorController;
use crate::asset::AssetLoader;
use crate::flora::FloraField;
use crate::scene::Scene;
use crate::systems;

/// RNG stream used by the flora field; the actor uses the default stream.
const FLORA_RNG_STREAM: u64 = 1;

pub struct SceneEngine {
    config: SceneConfig,
    scene: Scene,
    time: FrameTime,
    actor: ActorController,
    flora: FloraField,
    events: Vec<SceneEvent>,
}

impl SceneEngine {
    /// Create an engine for a validated config. Nothing is in the scene until
    /// [`SceneEngine::initialize`] is called.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let actor_rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut flora_rng = ChaCha8Rng::seed_from_u64(config.seed);
        flora_rng.set_stream(FLORA_RNG_STREAM);

        Ok(Self {
            actor: ActorController::new(&config.motion, actor_rng),
            flora: FloraField::new(&config.flora, flora_rng),
            scene: Scene::new(),
            time: FrameTime::default(),
            events: Vec::new(),
            config,
        })
    }

    /// Start the flora field and request the actor asset from `loader`.
    pub fn initialize(&mut self, loader: &dyn AssetLoader) {
        log::info!("initializing scene (seed {})", self.config.seed);
        self.flora.initialize(&mut self.scene);
        self.actor.initialize(loader);
    }

    /// Poll every component at `now_ms` and return the resulting snapshot.
    pub fn tick(&mut self, now_ms: f64) -> SceneSnapshot {
        self.time.advance(now_ms);

        self.flora.poll(&mut self.scene, &self.time, &mut self.events);
        self.actor.poll(&mut self.scene, &self.time, &mut self.events);
        systems::animation::run(self.scene.world_mut(), self.time.delta_ms);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.scene.world_mut(),
            &self.time,
            self.actor.view(),
            events,
        )
    }

    /// Actor position for the camera, or `None` while the actor is absent.
    pub fn actor_position(&self) -> Option<Vec3> {
        self.actor.current_position()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }
}
