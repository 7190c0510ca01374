//! Actor wander state machine.
//!
//! Drives one actor through `Idle -> RotatingToTarget -> Translating ->
//! RotatingToRest -> Idle` forever. Each phase carries the tween it is
//! waiting on, so a heading tween and a position tween can never run at
//! the same time. No ECS dependency; operates on a plain [`Pose`].

use glam::Vec3;
use rand::Rng;

use tidepool_core::config::MotionConfig;
use tidepool_core::enums::MotionState;
use tidepool_core::types::Pose;

use crate::heading::rotation_target;
use crate::regions::RegionSet;
use crate::tween::Tween;

/// Durations and limits of the cycle.
#[derive(Debug, Clone, Copy)]
pub struct MotionTiming {
    pub rest_heading: f32,
    pub rotation_ms: f64,
    pub translation_ms: f64,
    pub max_turn_rad: f32,
    pub idle_wait_min_ms: f64,
    pub idle_wait_max_ms: f64,
}

/// A phase change reported by [`MotionMachine::poll`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: MotionState,
    pub to: MotionState,
    /// Region chosen, set only when leaving `Idle`.
    pub region: Option<usize>,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle {
        /// `None` until the first cycle ends, so the first poll moves at once.
        since_ms: Option<f64>,
        wait_ms: f64,
    },
    RotatingToTarget {
        heading: Tween<f32>,
        destination: Vec3,
    },
    Translating {
        position: Tween<Vec3>,
    },
    RotatingToRest {
        heading: Tween<f32>,
    },
}

/// Wander state for one actor.
#[derive(Debug, Clone)]
pub struct MotionMachine {
    timing: MotionTiming,
    regions: RegionSet,
    current_region: Option<usize>,
    phase: Phase,
}

impl MotionMachine {
    pub fn new(timing: MotionTiming, regions: RegionSet) -> Self {
        Self {
            timing,
            regions,
            current_region: None,
            phase: Phase::Idle {
                since_ms: None,
                wait_ms: 0.0,
            },
        }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        let timing = MotionTiming {
            rest_heading: config.rest_heading,
            rotation_ms: config.rotation_duration_ms,
            translation_ms: config.translation_duration_ms,
            max_turn_rad: config.max_turn_rad,
            idle_wait_min_ms: config.idle_wait_min_ms,
            idle_wait_max_ms: config.idle_wait_max_ms,
        };
        Self::new(
            timing,
            RegionSet::new(config.regions.clone(), config.start_region),
        )
    }

    pub fn state(&self) -> MotionState {
        match self.phase {
            Phase::Idle { .. } => MotionState::Idle,
            Phase::RotatingToTarget { .. } => MotionState::RotatingToTarget,
            Phase::Translating { .. } => MotionState::Translating,
            Phase::RotatingToRest { .. } => MotionState::RotatingToRest,
        }
    }

    /// Region last selected, if any.
    pub fn current_region(&self) -> Option<usize> {
        self.current_region
    }

    /// Wait drawn for the current idle period (ms). Zero before the first cycle.
    pub fn idle_wait_ms(&self) -> Option<f64> {
        match self.phase {
            Phase::Idle { wait_ms, .. } => Some(wait_ms),
            _ => None,
        }
    }

    /// Heading the active rotation is heading for.
    pub fn heading_target(&self) -> Option<f32> {
        match &self.phase {
            Phase::RotatingToTarget { heading, .. } | Phase::RotatingToRest { heading } => {
                Some(heading.end)
            }
            _ => None,
        }
    }

    /// Advance the active tween to `now_ms`, writing the result into `pose`,
    /// and take at most one transition.
    ///
    /// Returns the transition taken, if any. A poll that finds nothing due is
    /// the normal resting case, not an error.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        pose: &mut Pose,
        rng: &mut R,
    ) -> Option<Transition> {
        let from = self.state();
        let mut region = None;

        let next = match &mut self.phase {
            Phase::Idle { since_ms, wait_ms } => {
                let due = since_ms.map_or(true, |since| now_ms - since > *wait_ms);
                if !due {
                    return None;
                }
                let index = self.regions.select_next(self.current_region, rng);
                let destination = self.regions.position(index)?;
                self.current_region = Some(index);
                region = Some(index);

                let target = rotation_target(
                    pose.position,
                    destination,
                    self.timing.rest_heading,
                    self.timing.max_turn_rad,
                );
                Phase::RotatingToTarget {
                    heading: Tween::new(pose.heading, target, now_ms, self.timing.rotation_ms),
                    destination,
                }
            }
            Phase::RotatingToTarget {
                heading,
                destination,
            } => {
                pose.heading = heading.advance(now_ms);
                if !heading.is_finished() {
                    return None;
                }
                // Start from wherever the rotation left the actor.
                Phase::Translating {
                    position: Tween::new(
                        pose.position,
                        *destination,
                        now_ms,
                        self.timing.translation_ms,
                    ),
                }
            }
            Phase::Translating { position } => {
                pose.position = position.advance(now_ms);
                if !position.is_finished() {
                    return None;
                }
                Phase::RotatingToRest {
                    heading: Tween::new(
                        pose.heading,
                        self.timing.rest_heading,
                        now_ms,
                        self.timing.rotation_ms,
                    ),
                }
            }
            Phase::RotatingToRest { heading } => {
                pose.heading = heading.advance(now_ms);
                if !heading.is_finished() {
                    return None;
                }
                Phase::Idle {
                    since_ms: Some(now_ms),
                    wait_ms: draw_idle_wait(&self.timing, rng),
                }
            }
        };

        self.phase = next;
        debug_assert_eq!(self.state(), from.next());
        Some(Transition {
            from,
            to: self.state(),
            region,
        })
    }
}

/// Uniform draw from the idle-wait window.
fn draw_idle_wait<R: Rng + ?Sized>(timing: &MotionTiming, rng: &mut R) -> f64 {
    if timing.idle_wait_max_ms > timing.idle_wait_min_ms {
        rng.gen_range(timing.idle_wait_min_ms..timing.idle_wait_max_ms)
    } else {
        timing.idle_wait_min_ms
    }
}
