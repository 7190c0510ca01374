//! Time-bounded eased interpolation.

use glam::Vec3;

/// Ease-in-out quadratic. Maps `[0, 1]` onto `[0, 1]`, monotonic, with
/// zero slope at both ends.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (1.0 - t) * (1.0 - t) * 2.0
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, alpha: f32) -> Self;
}

impl Lerp for f32 {
    /// Plain linear blend. Angles are not wrapped; the caller keeps
    /// `end - self` within half a turn.
    fn lerp_to(self, end: Self, alpha: f32) -> Self {
        self + (end - self) * alpha
    }
}

impl Lerp for Vec3 {
    fn lerp_to(self, end: Self, alpha: f32) -> Self {
        self.lerp(end, alpha)
    }
}

/// Eased interpolation from `start` to `end` over `duration_ms`, beginning
/// at `start_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub start: T,
    pub end: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    progress: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, end: T, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            start_ms,
            duration_ms,
            progress: 0.0,
        }
    }

    /// Linear progress at `now_ms`, clamped to `[0, 1]`. Exactly 1.0 at or
    /// after `start_ms + duration_ms`; a non-positive duration is complete
    /// immediately.
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms - self.start_ms;
        if elapsed >= self.duration_ms {
            1.0
        } else {
            (elapsed / self.duration_ms).clamp(0.0, 1.0) as f32
        }
    }

    /// Record progress at `now_ms` and return the eased value.
    ///
    /// Progress never moves backwards, even if `now_ms` does.
    pub fn advance(&mut self, now_ms: f64) -> T {
        self.progress = self.progress.max(self.progress_at(now_ms));
        if self.is_finished() {
            return self.end;
        }
        self.start.lerp_to(self.end, ease_in_out_quad(self.progress))
    }

    /// Completion flag: set once progress reaches 1.0.
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_relative_eq!(ease_in_out_quad(0.5), 0.5);
        assert_relative_eq!(ease_in_out_quad(0.25), 0.125);
        assert_relative_eq!(ease_in_out_quad(0.75), 0.875);
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(ease_in_out_quad(-1.0), 0.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
    }

    #[test]
    fn tween_hits_end_exactly() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::new(4.0, -2.0, 1.0), 100.0, 1000.0);
        assert_eq!(tween.advance(100.0), Vec3::ZERO);
        assert!(!tween.is_finished());
        assert_eq!(tween.advance(1100.0), Vec3::new(4.0, -2.0, 1.0));
        assert!(tween.is_finished());
        assert_eq!(tween.progress, 1.0);
    }

    #[test]
    fn tween_before_start_holds_start() {
        let mut tween = Tween::new(1.0_f32, 3.0, 500.0, 200.0);
        assert_eq!(tween.progress_at(0.0), 0.0);
        assert_eq!(tween.advance(0.0), 1.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let mut tween = Tween::new(0.0_f32, 2.0, 10.0, 0.0);
        assert_eq!(tween.advance(10.0), 2.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn progress_does_not_rewind() {
        let mut tween = Tween::new(0.0_f32, 1.0, 0.0, 100.0);
        tween.advance(80.0);
        let value = tween.advance(20.0);
        assert_relative_eq!(tween.progress, 0.8);
        assert_relative_eq!(value, ease_in_out_quad(0.8));
    }
}
