//! The seam between the carousel core and whatever renders it.
//!
//! [`Geometry`] answers positional queries, [`Presenter`] applies visual
//! effects.  The core never stores what it presents: every style and flag
//! is recomputed from [`CarouselState`](super::state::CarouselState) on the
//! event that needs it.

use std::time::Duration;

// ───────────────────────────────────────── geometry types ─────

/// A position in host coordinates (pixels or terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// External overlay regions that must never count as "outside" clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Lightbox,
    PaletteSwitcher,
    ThemeToggle,
}

/// Which optional control handles exist for this widget.
///
/// Missing controls are skipped, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Number of dot indicators (0 when the widget has none).
    pub dots: usize,
    pub prev_arrow: bool,
    pub next_arrow: bool,
    pub expand_trigger: bool,
    pub collapse_trigger: bool,
}

impl Controls {
    pub fn has_arrows(&self) -> bool {
        self.prev_arrow || self.next_arrow
    }
}

// ───────────────────────────────────────── presentation types ─

/// Boolean presentation flags on a slide handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideFlag {
    Active,
    EnterFromLeft,
    EnterFromRight,
    EnterFade,
}

impl SlideFlag {
    /// Flags describing how a slide entered; cleared on every navigation.
    pub const ENTRANCES: [SlideFlag; 3] = [
        SlideFlag::EnterFromLeft,
        SlideFlag::EnterFromRight,
        SlideFlag::EnterFade,
    ];
}

/// Boolean presentation flags on the widget root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootFlag {
    Expanded,
    Dismissing,
}

/// Previous / next arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Prev,
    Next,
}

/// Inline visual override applied to one slide during a drag.
///
/// `translate_x` is in host units; `opacity` is `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStyle {
    pub translate_x: f64,
    pub opacity: f64,
    /// `Some(true)` forces the slide visible even when not active.
    pub visible: Option<bool>,
    /// Stacking order; higher draws above.
    pub z_index: Option<i32>,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            opacity: 1.0,
            visible: None,
            z_index: None,
        }
    }
}

/// One-shot notifications emitted to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The panel finished expanding; lazy content inside it may initialize.
    Expanded,
}

// ───────────────────────────────────────── traits ─────────────

/// Positional queries the core makes of its environment.
pub trait Geometry {
    /// Fixed number of slides; never changes for the widget's lifetime.
    fn slide_count(&self) -> usize;
    /// Optional controls present on this widget.
    fn controls(&self) -> Controls;
    /// Width of the slide track, basis for the snap threshold.
    fn track_width(&self) -> f64;
    /// Natural height of the expanded content after layout.
    fn content_height(&self) -> f64;
    /// Current page scroll offset.
    fn scroll_y(&self) -> f64;
    /// Whether a drag may start at `point`.
    fn track_contains(&self, point: Point) -> bool;
    /// Whether `point` is inside the expanded content area.
    fn content_contains(&self, point: Point) -> bool;
    /// Exempt overlay region under `point`, if any.
    fn overlay_at(&self, point: Point) -> Option<Overlay>;
    /// Whether the page was opened with the "expanded" deep-link marker.
    fn deep_link_expanded(&self) -> bool {
        false
    }
}

/// Visual effects the core produces.
pub trait Presenter {
    fn set_slide_flag(&mut self, slide: usize, flag: SlideFlag, on: bool);
    fn set_slide_style(&mut self, slide: usize, style: SlideStyle);
    fn clear_slide_style(&mut self, slide: usize);
    /// `None` disables transition animation; `Some(d)` animates over `d`.
    fn set_slide_transition(&mut self, slide: usize, transition: Option<Duration>);
    fn set_dot_active(&mut self, dot: usize, active: bool);
    fn set_arrow_disabled(&mut self, arrow: Arrow, disabled: bool);
    fn set_root_flag(&mut self, flag: RootFlag, on: bool);
    /// Explicit content height; `None` restores the natural height.
    fn set_height_override(&mut self, height: Option<f64>);
    fn set_focusable(&mut self, focusable: bool);
    fn focus_root(&mut self);
    fn scroll_to_top(&mut self);
    fn notify(&mut self, notification: Notification);
}

/// Everything the carousel needs from its environment.
pub trait Host: Geometry + Presenter {}

impl<T: Geometry + Presenter> Host for T {}
