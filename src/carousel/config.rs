//! Tunable timings and ratios for one carousel.

use std::time::Duration;

use crate::error::{CarouselError, CarouselResult};

/// Carousel configuration.  [`Default`] gives the stock behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Minimum time between accepted wheel steps.
    pub gesture_gap: Duration,
    /// Snap / revert transition time.
    pub animation_duration: Duration,
    /// How long after a drag release clicks are ignored by click-outside.
    pub click_cooldown: Duration,
    /// Fraction of the drag distance applied at a boundary (rubber band).
    pub edge_resistance: f64,
    /// Fraction of the expanded height scrolled past before full collapse.
    pub dismiss_ratio: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gesture_gap: Duration::from_millis(200),
            animation_duration: Duration::from_millis(250),
            click_cooldown: Duration::from_millis(100),
            edge_resistance: 0.15,
            dismiss_ratio: 0.5,
        }
    }
}

impl CarouselConfig {
    pub fn with_gesture_gap(mut self, gap: Duration) -> Self {
        self.gesture_gap = gap;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Reject ratios the drag and dismiss math cannot use.
    pub fn validate(&self) -> CarouselResult<()> {
        if !(0.0..=1.0).contains(&self.edge_resistance) {
            return Err(CarouselError::InvalidConfig {
                field: "edge_resistance",
                reason: format!("must be within 0..=1, got {}", self.edge_resistance),
            });
        }
        if !(self.dismiss_ratio > 0.0 && self.dismiss_ratio <= 1.0) {
            return Err(CarouselError::InvalidConfig {
                field: "dismiss_ratio",
                reason: format!("must be within (0, 1], got {}", self.dismiss_ratio),
            });
        }
        Ok(())
    }
}
