//! Core types and definitions for the tidepool scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, config, snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
