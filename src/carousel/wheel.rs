//! Wheel / trackpad navigation.
//!
//! A trackpad swipe arrives as a burst of small wheel events.  The first one
//! moves a slide; the rest of the burst is swallowed until `gesture_gap` has
//! passed.  At a boundary the event is left alone so the page can scroll.

use std::time::{Duration, Instant};

use super::event::Propagation;
use super::host::Presenter;
use super::listeners::{ListenerId, Listeners};
use super::navigation::Navigation;
use super::state::CarouselState;
use super::util::Teardown;

/// Direction a wheel delta asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// Wheel component.
#[derive(Debug, Clone, Copy)]
pub struct WheelNavigation {
    gesture_gap: Duration,
}

impl WheelNavigation {
    pub fn new(gesture_gap: Duration) -> Self {
        Self { gesture_gap }
    }

    pub fn attach(&self, listeners: &Listeners) -> Teardown {
        listeners.register(&[ListenerId::Wheel])
    }

    /// Dominant-axis step for a wheel delta, if any.
    pub fn step(delta_x: f64, delta_y: f64) -> Option<Step> {
        let delta = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        if delta > 0.0 {
            Some(Step::Next)
        } else if delta < 0.0 {
            Some(Step::Prev)
        } else {
            None
        }
    }

    pub fn on_wheel<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
        delta_x: f64,
        delta_y: f64,
        now: Instant,
    ) -> Propagation {
        if !state.is_expanded() {
            return Propagation::Continue;
        }
        let Some(step) = Self::step(delta_x, delta_y) else {
            return Propagation::Continue;
        };

        let at_boundary = match step {
            Step::Next => state.current_index >= state.last_index(),
            Step::Prev => state.current_index == 0,
        };
        if at_boundary {
            tracing::trace!(?step, "wheel at boundary; page scrolls");
            return Propagation::Continue;
        }

        let ready = state
            .last_wheel_time
            .map_or(true, |last| now.saturating_duration_since(last) >= self.gesture_gap);
        if ready {
            let moved = match step {
                Step::Next => nav.go_to_next(state, presenter),
                Step::Prev => nav.go_to_prev(state, presenter),
            };
            if moved {
                state.last_wheel_time = Some(now);
            }
        } else {
            tracing::trace!(?step, "wheel debounced");
        }
        Propagation::PreventDefault
    }
}
