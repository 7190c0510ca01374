//! Frame loop driving the scene engine at a fixed frame rate.
//!
//! Each frame the loop hands the engine a timestamp, then lets the camera
//! follow the actor. Timestamps are synthetic (`frame * frame_ms`) unless
//! `realtime` is set, in which case the loop sleeps to hold the frame rate
//! and feeds the engine wall-clock time.

use std::time::{Duration, Instant};

use tidepool_core::enums::ActorStatus;
use tidepool_core::events::SceneEvent;
use tidepool_core::state::SceneSnapshot;
use tidepool_sim::engine::SceneEngine;

use crate::camera::CameraTracker;

/// How long and how fast to run.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub frames: u64,
    pub frame_ms: f64,
    pub realtime: bool,
}

/// Running totals over a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopStats {
    pub frames: u64,
    pub flora_spawned: u64,
    pub flora_retired: u64,
    pub regions_visited: u64,
    pub peak_flora: usize,
}

impl LoopStats {
    fn record(&mut self, snapshot: &SceneSnapshot) {
        self.frames += 1;
        self.peak_flora = self.peak_flora.max(snapshot.flora.len());
        for event in &snapshot.events {
            match event {
                SceneEvent::FloraSpawned { .. } => self.flora_spawned += 1,
                SceneEvent::FloraRetired => self.flora_retired += 1,
                SceneEvent::RegionSelected { .. } => self.regions_visited += 1,
                _ => {}
            }
        }
    }
}

/// Result of a finished session.
pub struct LoopOutcome {
    pub stats: LoopStats,
    pub last_snapshot: Option<SceneSnapshot>,
}

/// Run `config.frames` frames against an initialized engine.
pub fn run(engine: &mut SceneEngine, camera: &mut CameraTracker, config: &LoopConfig) -> LoopOutcome {
    let frame_duration = Duration::from_secs_f64(config.frame_ms.max(0.0) / 1000.0);
    let started = Instant::now();
    let mut next_frame_time = started;
    let mut stats = LoopStats::default();
    let mut last_snapshot = None;
    let report_every = (1000.0 / config.frame_ms).round().max(1.0) as u64;

    for frame in 0..config.frames {
        let now_ms = if config.realtime {
            started.elapsed().as_secs_f64() * 1000.0
        } else {
            frame as f64 * config.frame_ms
        };

        let snapshot = engine.tick(now_ms);
        camera.update(engine.actor_position());
        stats.record(&snapshot);

        if frame % report_every == 0 {
            log::debug!(
                "frame {frame} at {now_ms:.0} ms: {} flora, {} scene nodes, actor {:?}/{:?}",
                snapshot.flora.len(),
                engine.scene().len(),
                snapshot.actor.status,
                snapshot.actor.motion
            );
        }
        last_snapshot = Some(snapshot);

        if config.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind; drop the backlog instead of catching up.
                next_frame_time = now;
            }
        }
    }

    let status = last_snapshot
        .as_ref()
        .map_or(ActorStatus::Uninitialized, |s| s.actor.status);
    log::info!(
        "ran {} frames: {} flora spawned, {} retired (peak {}), {} regions visited, actor {:?}",
        stats.frames,
        stats.flora_spawned,
        stats.flora_retired,
        stats.peak_flora,
        stats.regions_visited,
        status
    );

    LoopOutcome {
        stats,
        last_snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidepool_core::config::SceneConfig;
    use tidepool_core::constants::FRAME_MS;
    use tidepool_sim::asset::{AssetCompletion, AssetError, AssetLoader};

    struct NoAssets;

    impl AssetLoader for NoAssets {
        fn load(&self, completion: AssetCompletion) {
            let id = completion.id().to_string();
            completion.complete(Err(AssetError::NotFound(id)));
        }
    }

    fn session(config: SceneConfig) -> (SceneEngine, CameraTracker) {
        let camera = CameraTracker::new(&config.camera, config.flora.far_limit);
        let mut engine = SceneEngine::new(config).unwrap();
        engine.initialize(&NoAssets);
        (engine, camera)
    }

    #[test]
    fn test_synthetic_clock_runs_all_frames() {
        let (mut engine, mut camera) = session(SceneConfig::default());
        let config = LoopConfig {
            frames: 120,
            frame_ms: FRAME_MS,
            realtime: false,
        };

        let outcome = run(&mut engine, &mut camera, &config);
        assert_eq!(outcome.stats.frames, 120);
        assert_eq!(engine.time().frame, 120);
        // 119 frames at 16.67 ms is just under 2 s: spawns at 0, ~0.5, ~1, ~1.5 s.
        assert_eq!(outcome.stats.flora_spawned, 4);
        assert_eq!(outcome.stats.regions_visited, 0);

        let last = outcome.last_snapshot.unwrap();
        assert_eq!(last.actor.status, ActorStatus::Unavailable);
        assert_eq!(last.flora.len(), 4);
    }

    #[test]
    fn test_camera_holds_when_actor_missing() {
        let (mut engine, mut camera) = session(SceneConfig::default());
        let config = LoopConfig {
            frames: 30,
            frame_ms: FRAME_MS,
            realtime: false,
        };

        run(&mut engine, &mut camera, &config);
        assert_eq!(camera.look_at(), glam::Vec3::ZERO);
    }

    #[test]
    fn test_realtime_holds_frame_rate() {
        let (mut engine, mut camera) = session(SceneConfig::default());
        let config = LoopConfig {
            frames: 6,
            frame_ms: 10.0,
            realtime: true,
        };

        let start = Instant::now();
        run(&mut engine, &mut camera, &config);
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(engine.time().now_ms > 0.0);
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60 Hz = 16.667 ms per frame
        assert!((FRAME_MS - 1000.0 / 60.0).abs() < 1e-12);
    }
}
