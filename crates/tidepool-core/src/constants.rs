//! Scene constants and tuning parameters.
//!
//! Every timestamp in the scene is in milliseconds, matching the frame
//! clock handed to `poll`. Distances are scene units.

use std::f32::consts::PI;

/// Nominal frame rate of the driver loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal rate.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

/// Milliseconds per second, used to convert the frame clock for wave phases.
pub const MS_PER_SEC: f64 = 1000.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Actor ---

/// Resource id of the actor asset.
pub const ACTOR_ASSET_ID: &str = "models/turtle/scene.json";

/// Heading the actor returns to between moves (radians). Facing the camera.
pub const REST_HEADING: f32 = PI;

/// Position the actor appears at once its asset has loaded.
pub const ACTOR_SPAWN_POSITION: [f32; 3] = [0.0, -8.0, 12.0];

/// Uniform scale applied to the actor's root node.
pub const ACTOR_SCALE: f32 = 0.1;

// --- Motion ---

/// Duration of each in-place rotation (ms).
pub const ROTATION_DURATION_MS: f64 = 2000.0;

/// Duration of the move between regions (ms).
pub const TRANSLATION_DURATION_MS: f64 = 5000.0;

/// Maximum turn away from the rest heading per cycle (degrees).
pub const MAX_TURN_DEG: f32 = 10.0;

/// Maximum turn away from the rest heading per cycle (radians).
pub const MAX_TURN_RAD: f32 = MAX_TURN_DEG * PI / 180.0;

/// Shortest idle wait between cycles (ms).
pub const IDLE_WAIT_MIN_MS: f64 = 3000.0;

/// Longest idle wait between cycles (ms).
pub const IDLE_WAIT_MAX_MS: f64 = 6000.0;

/// Candidate destinations: a 3x3 grid in front of the camera.
pub const REGION_POSITIONS: [[f32; 3]; 9] = [
    [-5.0, 5.0, 5.0],
    [0.0, 5.0, 5.0],
    [5.0, 5.0, 5.0],
    [-5.0, 0.0, 5.0],
    [0.0, 0.0, 5.0],
    [5.0, 0.0, 5.0],
    [-5.0, -3.0, 5.0],
    [0.0, -3.0, 5.0],
    [5.0, -3.0, 5.0],
];

/// Region forced on the very first selection (centre of the grid).
pub const START_REGION: usize = 4;

// --- Flora ---

/// Minimum time between two flora spawns (ms).
pub const FLORA_SPAWN_INTERVAL_MS: f64 = 500.0;

/// Distance each flora moves toward the viewer per poll.
pub const FLORA_DRIFT_PER_POLL: f32 = 0.02;

/// Flora is retired once its z drops below `-FAR_LIMIT`. Also the camera far plane.
pub const FAR_LIMIT: f32 = 90.0;

/// Peak lateral displacement of a segment.
pub const WAVE_AMPLITUDE: f32 = 0.3;

/// Angular speed of the wave (rad/s).
pub const WAVE_SPEED: f32 = 2.5;

/// Wave phase per unit of segment height (rad).
pub const WAVE_PHASE_PER_HEIGHT: f32 = 0.5;

/// Number of equal segments per flora line (a line has one more vertex).
pub const SEGMENT_COUNT: usize = 6;

/// Width of the band flora is spawned across, centred on x = 0.
pub const FLORA_LATERAL_RANGE: f32 = 60.0;

/// Height of a flora line's lowest vertex.
pub const FLORA_BASE_Y: f32 = -15.0;

/// Shortest flora line.
pub const FLORA_HEIGHT_MIN: f32 = 5.0;

/// Tallest flora line.
pub const FLORA_HEIGHT_MAX: f32 = 14.0;

/// Depth new flora is spawned at.
pub const FLORA_SPAWN_Z: f32 = 20.0;

// --- Camera ---

/// Camera position.
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 20.0];

/// Fraction of the remaining distance the look-at target covers per frame.
pub const CAMERA_LOOK_EASE: f32 = 0.005;

/// Vertical field of view (degrees).
pub const CAMERA_FOV_DEG: f32 = 60.0;

/// Camera near plane.
pub const CAMERA_NEAR: f32 = 0.1;
