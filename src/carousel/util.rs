//! Small pure helpers shared by the input components.

use std::fmt;
use std::time::Duration;

use super::host::Presenter;

/// Drag distance at which a drag is fully "progressed" (half the track).
pub fn snap_threshold(track_width: f64) -> f64 {
    track_width.max(0.0) / 2.0
}

/// Drag progress in `0.0..=1.0` for a horizontal delta.
///
/// A zero threshold (unmeasured track) counts any movement as complete.
pub fn drag_progress(delta_x: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return if delta_x == 0.0 { 0.0 } else { 1.0 };
    }
    (delta_x.abs() / threshold).min(1.0)
}

/// Animate every slide's transform/opacity changes over `duration`.
pub fn enable_transitions<P: Presenter + ?Sized>(
    presenter: &mut P,
    slide_count: usize,
    duration: Duration,
) {
    for slide in 0..slide_count {
        presenter.set_slide_transition(slide, Some(duration));
    }
}

/// Apply transform/opacity changes instantly (pointer tracking).
pub fn disable_transitions<P: Presenter + ?Sized>(presenter: &mut P, slide_count: usize) {
    for slide in 0..slide_count {
        presenter.set_slide_transition(slide, None);
    }
}

/// Drop every inline override so slides fall back to their flags.
pub fn reset_styles<P: Presenter + ?Sized>(presenter: &mut P, slide_count: usize) {
    for slide in 0..slide_count {
        presenter.clear_slide_style(slide);
    }
}

// ───────────────────────────────────────── teardown ──────────

/// Detaches listeners when run.  Teardowns compose in any order.
#[must_use = "dropping a Teardown leaves its listeners attached"]
pub struct Teardown {
    callbacks: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callbacks: vec![Box::new(callback)],
        }
    }

    /// A teardown that does nothing.
    pub fn noop() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Merge several teardowns into one.
    pub fn compose(parts: impl IntoIterator<Item = Teardown>) -> Self {
        Self {
            callbacks: parts.into_iter().flat_map(|t| t.callbacks).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn run(self) {
        for callback in self.callbacks {
            callback();
        }
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
