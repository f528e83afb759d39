//! Time-based ease-out between two slide poses.
//!
//! The carousel only states where a slide should end up and whether the
//! change is animated.  A [`Motion`] remembers where the slide was when the
//! target changed and interpolates toward it, decelerating near the end.

use std::time::{Duration, Instant};

/// Horizontal offset (columns) and opacity of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translate_x: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        translate_x: 0.0,
        opacity: 1.0,
    };

    fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            translate_x: self.translate_x + (to.translate_x - self.translate_x) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    from: Pose,
    to: Pose,
    started: Instant,
    duration: Duration,
}

impl Motion {
    /// Already at rest on `pose`.
    pub fn still(pose: Pose, now: Instant) -> Self {
        Self {
            from: pose,
            to: pose,
            started: now,
            duration: Duration::ZERO,
        }
    }

    /// Retarget.  With `duration` of `None` the pose jumps.
    pub fn retarget(&mut self, to: Pose, duration: Option<Duration>, now: Instant) {
        let from = self.pose_at(now);
        *self = match duration {
            Some(duration) if !duration.is_zero() => Self {
                from,
                to,
                started: now,
                duration,
            },
            _ => Self::still(to, now),
        };
    }

    /// Start from `from` and ease into `to`.
    pub fn enter(from: Pose, to: Pose, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    pub fn pose_at(&self, now: Instant) -> Pose {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        let t = (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        // Cubic ease-out.
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from.lerp(self.to, eased)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }
}
