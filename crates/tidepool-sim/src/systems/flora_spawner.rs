//! Flora spawning system. Adds a flora line whenever the spawn interval has passed.

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use tidepool_core::config::FloraConfig;
use tidepool_core::events::SceneEvent;

use crate::scene::Scene;
use crate::world_setup;

/// Spawn cadence.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    /// Start of the current interval. `None` until the first spawn.
    last_spawn_ms: Option<f64>,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: None,
        }
    }

    /// Forget every spawn, so the next check is due immediately.
    pub fn reset(&mut self) {
        self.last_spawn_ms = None;
    }

    /// True once more than one interval has passed since the last spawn.
    pub fn is_due(&self, now_ms: f64) -> bool {
        self.last_spawn_ms
            .map_or(true, |last| now_ms - last > self.interval_ms)
    }

    /// Record a spawn at `now_ms`. The baseline advances by whole intervals
    /// so frame jitter does not stretch the cadence, and a long gap yields a
    /// single spawn rather than a burst. The price is that two spawns can sit
    /// slightly less than one interval apart when the first one ran late.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_spawn_ms = Some(match self.last_spawn_ms {
            None => now_ms,
            Some(last) => {
                let whole = ((now_ms - last) / self.interval_ms).floor();
                last + whole * self.interval_ms
            }
        });
    }
}

/// Spawn one flora line if the timer is due.
pub fn run(
    scene: &mut Scene,
    rng: &mut ChaCha8Rng,
    config: &FloraConfig,
    timer: &mut SpawnTimer,
    live: &mut Vec<Entity>,
    now_ms: f64,
    events: &mut Vec<SceneEvent>,
) {
    if !timer.is_due(now_ms) {
        return;
    }
    let spawned = world_setup::spawn_flora(scene, rng, config);
    live.push(spawned.entity);
    timer.mark(now_ms);
    log::trace!(
        "flora spawned at x={:.2} height={:.2} ({} live)",
        spawned.x,
        spawned.height,
        live.len()
    );
    events.push(SceneEvent::FloraSpawned {
        x: spawned.x,
        height: spawned.height,
    });
}
