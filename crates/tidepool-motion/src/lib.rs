//! Actor motion for tidepool.
//!
//! Implements the wander state machine, eased tweens, turn bounding
//! and destination selection.

pub mod fsm;
pub mod heading;
pub mod regions;
pub mod tween;

pub use tidepool_core as core;

#[cfg(test)]
mod tests;
