//! Scene engine for tidepool.
//!
//! Owns the hecs world that serves as the scene container, drives the
//! wandering actor and the flora field once per frame, and produces
//! SceneSnapshots for the renderer.

pub mod actor;
pub mod asset;
pub mod engine;
pub mod flora;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use tidepool_core as core;
pub use engine::SceneEngine;
