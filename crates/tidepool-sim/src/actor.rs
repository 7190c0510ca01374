//! The wandering actor.
//!
//! `ActorController` owns the actor's pose and wander state machine. It asks
//! an [`AssetLoader`] for the model once, and does nothing until the load
//! completes. A failed load is logged and leaves the actor permanently
//! absent; the rest of the scene carries on.

use glam::Vec3;
use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use tidepool_core::components::Transform;
use tidepool_core::config::MotionConfig;
use tidepool_core::enums::ActorStatus;
use tidepool_core::events::SceneEvent;
use tidepool_core::state::ActorView;
use tidepool_core::types::{FrameTime, Pose};
use tidepool_motion::fsm::MotionMachine;

use crate::asset::{self, AssetLoader, AssetTicket};
use crate::scene::Scene;
use crate::world_setup;

enum LoadState {
    Uninitialized,
    Loading(AssetTicket),
    Active(Entity),
    Unavailable,
}

pub struct ActorController {
    config: MotionConfig,
    machine: MotionMachine,
    pose: Pose,
    rng: ChaCha8Rng,
    load: LoadState,
}

impl ActorController {
    pub fn new(config: &MotionConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config: config.clone(),
            machine: MotionMachine::from_config(config),
            pose: Pose::new(config.spawn_position, config.rest_heading),
            rng,
            load: LoadState::Uninitialized,
        }
    }

    /// Request the actor asset. Calling this more than once has no effect.
    pub fn initialize(&mut self, loader: &dyn AssetLoader) {
        if !matches!(self.load, LoadState::Uninitialized) {
            log::warn!("actor already initialized, ignoring");
            return;
        }
        let (ticket, completion) = asset::request(&self.config.asset_id);
        log::debug!("requesting actor asset {}", ticket.id());
        self.load = LoadState::Loading(ticket);
        loader.load(completion);
    }

    /// Pick up a finished load, then advance the wander cycle to `time.now_ms`.
    /// A no-op until the actor is in the scene.
    pub fn poll(&mut self, scene: &mut Scene, time: &FrameTime, events: &mut Vec<SceneEvent>) {
        if let LoadState::Loading(ticket) = &self.load {
            match ticket.try_take() {
                None => return,
                Some(Ok(asset)) => {
                    let entity = world_setup::spawn_actor(scene, &self.config, &asset, self.pose);
                    log::info!(
                        "actor loaded from {} with {} animation clip(s)",
                        ticket.id(),
                        asset.clips.len()
                    );
                    events.push(SceneEvent::ActorLoaded {
                        clip_count: asset.clips.len(),
                    });
                    self.load = LoadState::Active(entity);
                }
                Some(Err(err)) => {
                    log::error!("error loading actor model: {err}");
                    events.push(SceneEvent::ActorUnavailable {
                        reason: err.to_string(),
                    });
                    self.load = LoadState::Unavailable;
                    return;
                }
            }
        }

        let LoadState::Active(entity) = self.load else {
            return;
        };

        if let Some(transition) = self.machine.poll(time.now_ms, &mut self.pose, &mut self.rng) {
            if let Some(index) = transition.region {
                log::debug!("actor heading for region {index}");
                events.push(SceneEvent::RegionSelected { index });
            }
            log::trace!("actor {:?} -> {:?}", transition.from, transition.to);
            if let Some(target) = self.machine.heading_target() {
                log::trace!("actor turning to {target:.3} rad");
            }
            if let Some(wait) = self.machine.idle_wait_ms() {
                log::debug!("actor resting for {wait:.0} ms");
            }
            events.push(SceneEvent::MotionChanged {
                from: transition.from,
                to: transition.to,
            });
        }

        match scene.world().get::<&mut Transform>(entity) {
            Ok(mut transform) => {
                transform.position = self.pose.position;
                transform.heading = self.pose.heading;
            }
            Err(_) => log::warn!("actor node is missing from the scene"),
        }
    }

    /// Actor position, or `None` while it is not in the scene.
    pub fn current_position(&self) -> Option<Vec3> {
        match self.load {
            LoadState::Active(_) => Some(self.pose.position),
            _ => None,
        }
    }

    pub fn status(&self) -> ActorStatus {
        match self.load {
            LoadState::Uninitialized => ActorStatus::Uninitialized,
            LoadState::Loading(_) => ActorStatus::Loading,
            LoadState::Active(_) => ActorStatus::Active,
            LoadState::Unavailable => ActorStatus::Unavailable,
        }
    }

    pub fn view(&self) -> ActorView {
        let active = matches!(self.load, LoadState::Active(_));
        ActorView {
            status: self.status(),
            position: active.then_some(self.pose.position),
            heading: active.then_some(self.pose.heading),
            motion: self.machine.state(),
            region: self.machine.current_region(),
        }
    }
}
