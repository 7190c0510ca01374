//! Turn bounding for the actor.
//!
//! The actor never turns more than a fixed cap away from its rest heading,
//! so it only roughly faces where it is going. The cap also keeps every
//! heading tween shorter than half a turn, which the unwrapped angle lerp
//! in [`crate::tween`] relies on.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Wrap an angle difference into `(-pi, pi]`.
pub fn normalize_angle_delta(delta: f32) -> f32 {
    let wrapped = delta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Heading facing from `from` toward `to`, using only the horizontal (x, z)
/// displacement. Heading 0 faces +Z.
pub fn bearing(from: Vec3, to: Vec3) -> f32 {
    let d = to - from;
    d.x.atan2(d.z)
}

/// Signed turn from `rest` toward `bearing`, wrapped and clamped to
/// `[-max_turn, max_turn]`.
pub fn bounded_turn(rest: f32, bearing: f32, max_turn: f32) -> f32 {
    normalize_angle_delta(bearing - rest).clamp(-max_turn, max_turn)
}

/// Heading to rotate to before moving from `from` to `to`.
pub fn rotation_target(from: Vec3, to: Vec3, rest: f32, max_turn: f32) -> f32 {
    rest + bounded_turn(rest, bearing(from, to), max_turn)
}
