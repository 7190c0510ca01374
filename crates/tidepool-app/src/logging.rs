//! Logger setup for the `tidepool` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install `env_logger` as the global logger.
///
/// The scene logs asset problems at `error`, loads and session totals at
/// `info`, region picks at `debug` and per-flora traffic at `trace`.
/// `verbose` lowers the default filter from `info` to `debug`; `RUST_LOG`
/// takes precedence over both.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level.to_string()));
    builder.format_timestamp_millis();

    // A second install (tests, embedding) is not an error.
    let _ = builder.try_init();
}
