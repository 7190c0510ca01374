//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Phase of the actor's wander cycle.
///
/// The cycle is `Idle -> RotatingToTarget -> Translating -> RotatingToRest -> Idle`
/// and repeats for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionState {
    /// Waiting out a randomized pause before picking the next region.
    #[default]
    Idle,
    /// Turning in place toward the next region.
    RotatingToTarget,
    /// Moving to the next region.
    Translating,
    /// Turning in place back to the rest heading.
    RotatingToRest,
}

impl MotionState {
    /// State the cycle moves to after this one.
    pub fn next(self) -> Self {
        match self {
            MotionState::Idle => MotionState::RotatingToTarget,
            MotionState::RotatingToTarget => MotionState::Translating,
            MotionState::Translating => MotionState::RotatingToRest,
            MotionState::RotatingToRest => MotionState::Idle,
        }
    }
}

/// Availability of the actor asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorStatus {
    /// `initialize` has not been called yet.
    #[default]
    Uninitialized,
    /// Asset requested, completion not yet received.
    Loading,
    /// Actor is in the scene and wandering.
    Active,
    /// Asset failed to load. Permanent for the session.
    Unavailable,
}
