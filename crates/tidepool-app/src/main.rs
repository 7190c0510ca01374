use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tidepool_app::camera::CameraTracker;
use tidepool_app::game_loop::{self, LoopConfig};
use tidepool_app::loader::ManifestLoader;
use tidepool_app::logging;
use tidepool_core::config::SceneConfig;
use tidepool_core::constants::FRAME_MS;
use tidepool_sim::SceneEngine;

/// Headless underwater scene: a wandering turtle over drifting seagrass
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON scene config; defaults are used for anything it leaves out
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory asset ids are resolved against
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Override the actor asset id
    #[arg(long)]
    asset: Option<String>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = FRAME_MS)]
    frame_ms: f64,

    /// Pace frames in real time instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write the final snapshot as JSON to this file
    #[arg(long)]
    dump_snapshot: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match &args.config {
        Some(path) => match SceneConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(asset) = &args.asset {
        config.motion.asset_id = asset.clone();
    }
    if !(args.frame_ms.is_finite() && args.frame_ms > 0.0) {
        log::error!("--frame-ms must be positive, got {}", args.frame_ms);
        return ExitCode::FAILURE;
    }

    let mut engine = match SceneEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut camera = CameraTracker::new(&engine.config().camera, engine.config().flora.far_limit);
    let (fov_deg, near, far) = camera.projection();
    log::debug!(
        "camera at {:?}, fov {fov_deg} deg, clip {near}..{far}",
        camera.position()
    );
    engine.initialize(&ManifestLoader::new(&args.assets));

    let outcome = game_loop::run(
        &mut engine,
        &mut camera,
        &LoopConfig {
            frames: args.frames,
            frame_ms: args.frame_ms,
            realtime: args.realtime,
        },
    );
    log::info!("camera looking at {:?}", camera.look_at());

    if let (Some(path), Some(snapshot)) = (&args.dump_snapshot, &outcome.last_snapshot) {
        let written = serde_json::to_string_pretty(snapshot)
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(path, json));
        if let Err(err) = written {
            log::error!("failed to write snapshot to {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        log::info!("snapshot written to {}", path.display());
    }

    ExitCode::SUCCESS
}
