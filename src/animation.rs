//! Timed snap of the handle toward a tick.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::constants;

/// Slow start, fast middle, slow end. `t` is clamped to 0.0–1.0.
pub(crate) fn accelerate_decelerate(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Snap duration for a move across `grades` grades.
pub(crate) fn snap_duration(grades: usize) -> Duration {
    constants::ANIMATION_BASE + constants::ANIMATION_PER_GRADE * grades as u32
}

/// What started a snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// A tap somewhere on the track.
    Tap,
    /// The end of a drag.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SnapAnimation {
    from_x: f64,
    to_x: f64,
    /// 0-based tick index the handle settles on.
    target: usize,
    kind: SnapKind,
    started: Instant,
    duration: Duration,
}

impl SnapAnimation {
    pub(crate) fn new(
        from_x: f64,
        to_x: f64,
        target: usize,
        kind: SnapKind,
        started: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from_x,
            to_x,
            target,
            kind,
            started,
            duration,
        }
    }

    pub(crate) fn target(&self) -> usize {
        self.target
    }

    pub(crate) fn target_x(&self) -> f64 {
        self.to_x
    }

    pub(crate) fn kind(&self) -> SnapKind {
        self.kind
    }

    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress at `now`, 0.0–1.0.
    pub(crate) fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased handle x at `now`.
    pub(crate) fn sample(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return self.to_x;
        }
        let eased = accelerate_decelerate(self.progress(now));
        self.from_x + (self.to_x - self.from_x) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert!(accelerate_decelerate(0.0).abs() < 1e-12);
        assert!((accelerate_decelerate(1.0) - 1.0).abs() < 1e-12);
        assert!((accelerate_decelerate(0.5) - 0.5).abs() < 1e-12);
        assert!(accelerate_decelerate(0.1) < 0.1);
        assert!(accelerate_decelerate(0.9) > 0.9);
    }

    #[test]
    fn duration_grows_per_grade() {
        assert_eq!(snap_duration(0), Duration::from_millis(100));
        assert_eq!(snap_duration(3), Duration::from_millis(190));
    }

    #[test]
    fn sample_moves_from_start_to_target() {
        let start = Instant::now();
        let anim = SnapAnimation::new(0.0, 100.0, 1, SnapKind::Tap, start, snap_duration(1));
        assert_eq!(anim.sample(start), 0.0);
        let half = anim.sample(start + Duration::from_millis(65));
        assert!((half - 50.0).abs() < 1e-9);
        assert_eq!(anim.sample(start + Duration::from_millis(130)), 100.0);
        assert_eq!(anim.sample(start + Duration::from_secs(5)), 100.0);
        assert!(anim.is_finished(start + Duration::from_millis(130)));
    }

    #[test]
    fn sample_before_start_stays_put() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = SnapAnimation::new(40.0, 10.0, 0, SnapKind::Release, start, snap_duration(0));
        assert_eq!(anim.sample(start - Duration::from_millis(500)), 40.0);
    }
}
