//! Headless tidepool driver.
//!
//! This crate wires the scene engine to the outside world: it loads
//! configuration, reads asset manifests from disk, tracks the actor with
//! the camera and drives the engine at a fixed frame rate.

pub mod camera;
pub mod game_loop;
pub mod loader;
pub mod logging;

pub use tidepool_core as core;
