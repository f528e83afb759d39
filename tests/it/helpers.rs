//! Test helpers: a builder for a recording host and a session that drives
//! one attached carousel through a fake clock.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use slidedeck::carousel::event::{Control, InputEvent, Key, PointerSource, Propagation};
use slidedeck::carousel::host::{
    Arrow, Controls, Geometry, Notification, Overlay, Point, Presenter, RootFlag, SlideFlag,
    SlideStyle,
};
use slidedeck::carousel::util::Teardown;
use slidedeck::{Carousel, CarouselConfig};

// ============================================================================
// RecordingHost - every presenter call is logged as an Effect
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SlideFlag(usize, SlideFlag, bool),
    SlideStyle(usize, SlideStyle),
    ClearSlideStyle(usize),
    Transition(usize, Option<Duration>),
    Dot(usize, bool),
    Arrow(Arrow, bool),
    Root(RootFlag, bool),
    Height(Option<f64>),
    Focusable(bool),
    Focus,
    ScrollToTop,
    Notify(Notification),
}

#[derive(Debug)]
pub struct RecordingHost {
    pub slides: usize,
    pub controls: Controls,
    pub track_width: f64,
    pub content_height: f64,
    pub scroll_y: f64,
    pub content_bottom: f64,
    pub deep_link: bool,
    pub overlays: Vec<(Overlay, Point, Point)>,
    pub effects: Vec<Effect>,
    pub active: BTreeSet<usize>,
}

impl RecordingHost {
    pub fn active_slides(&self) -> Vec<usize> {
        self.active.iter().copied().collect()
    }

    pub fn notifications(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::Notify(_)))
            .count()
    }

    pub fn last_height(&self) -> Option<Option<f64>> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Height(h) => Some(*h),
            _ => None,
        })
    }
}

impl Geometry for RecordingHost {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn controls(&self) -> Controls {
        self.controls
    }

    fn track_width(&self) -> f64 {
        self.track_width
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn track_contains(&self, point: Point) -> bool {
        self.content_contains(point)
    }

    fn content_contains(&self, point: Point) -> bool {
        (0.0..self.track_width).contains(&point.x) && (0.0..self.content_bottom).contains(&point.y)
    }

    fn overlay_at(&self, point: Point) -> Option<Overlay> {
        self.overlays.iter().find_map(|&(overlay, min, max)| {
            let inside = (min.x..max.x).contains(&point.x) && (min.y..max.y).contains(&point.y);
            inside.then_some(overlay)
        })
    }

    fn deep_link_expanded(&self) -> bool {
        self.deep_link
    }
}

impl Presenter for RecordingHost {
    fn set_slide_flag(&mut self, slide: usize, flag: SlideFlag, on: bool) {
        if flag == SlideFlag::Active {
            if on {
                self.active.insert(slide);
            } else {
                self.active.remove(&slide);
            }
        }
        self.effects.push(Effect::SlideFlag(slide, flag, on));
    }

    fn set_slide_style(&mut self, slide: usize, style: SlideStyle) {
        self.effects.push(Effect::SlideStyle(slide, style));
    }

    fn clear_slide_style(&mut self, slide: usize) {
        self.effects.push(Effect::ClearSlideStyle(slide));
    }

    fn set_slide_transition(&mut self, slide: usize, transition: Option<Duration>) {
        self.effects.push(Effect::Transition(slide, transition));
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.effects.push(Effect::Dot(dot, active));
    }

    fn set_arrow_disabled(&mut self, arrow: Arrow, disabled: bool) {
        self.effects.push(Effect::Arrow(arrow, disabled));
    }

    fn set_root_flag(&mut self, flag: RootFlag, on: bool) {
        self.effects.push(Effect::Root(flag, on));
    }

    fn set_height_override(&mut self, height: Option<f64>) {
        self.effects.push(Effect::Height(height));
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.effects.push(Effect::Focusable(focusable));
    }

    fn focus_root(&mut self) {
        self.effects.push(Effect::Focus);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
        self.effects.push(Effect::ScrollToTop);
    }

    fn notify(&mut self, notification: Notification) {
        self.effects.push(Effect::Notify(notification));
    }
}

// ============================================================================
// HostBuilder
// ============================================================================

/// Builder for [`RecordingHost`].
///
/// ```ignore
/// let host = HostBuilder::new().slides(5).track_width(400.0).build();
/// ```
pub struct HostBuilder {
    host: RecordingHost,
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBuilder {
    pub fn new() -> Self {
        Self {
            host: RecordingHost {
                slides: 3,
                controls: Controls {
                    dots: 3,
                    prev_arrow: true,
                    next_arrow: true,
                    expand_trigger: true,
                    collapse_trigger: true,
                },
                track_width: 400.0,
                content_height: 800.0,
                scroll_y: 0.0,
                content_bottom: 500.0,
                deep_link: false,
                overlays: Vec::new(),
                effects: Vec::new(),
                active: BTreeSet::new(),
            },
        }
    }

    /// Slide count; dots follow it.
    pub fn slides(mut self, slides: usize) -> Self {
        self.host.slides = slides;
        self.host.controls.dots = slides;
        self
    }

    pub fn track_width(mut self, width: f64) -> Self {
        self.host.track_width = width;
        self
    }

    pub fn content_height(mut self, height: f64) -> Self {
        self.host.content_height = height;
        self
    }

    pub fn scroll_y(mut self, y: f64) -> Self {
        self.host.scroll_y = y;
        self
    }

    pub fn deep_link(mut self) -> Self {
        self.host.deep_link = true;
        self
    }

    pub fn without_controls(mut self) -> Self {
        self.host.controls = Controls::default();
        self
    }

    pub fn overlay(mut self, overlay: Overlay, min: (f64, f64), max: (f64, f64)) -> Self {
        self.host
            .overlays
            .push((overlay, Point::new(min.0, min.1), Point::new(max.0, max.1)));
        self
    }

    pub fn build(self) -> RecordingHost {
        self.host
    }

    /// Build and attach in one step.
    pub fn attach(self) -> Session {
        Session::attach(self.build(), CarouselConfig::default())
    }
}

// ============================================================================
// Session - carousel + host + fake clock
// ============================================================================

pub struct Session {
    pub carousel: Carousel,
    pub host: RecordingHost,
    pub teardown: Option<Teardown>,
    pub now: Instant,
}

impl Session {
    pub fn attach(mut host: RecordingHost, config: CarouselConfig) -> Self {
        let (carousel, teardown) = Carousel::attach(&mut host, config).unwrap();
        Self {
            carousel,
            host,
            teardown: Some(teardown),
            now: Instant::now(),
        }
    }

    pub fn send(&mut self, event: InputEvent) -> Propagation {
        self.carousel.dispatch(&mut self.host, event, self.now)
    }

    /// Let `ms` pass, then render one frame.
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.carousel.on_frame(&mut self.host, self.now);
    }

    /// Expand and render the frame that measures the panel.
    pub fn expand(&mut self) {
        self.carousel.expand(&mut self.host);
        self.advance(0);
    }

    pub fn drag(&mut self, from_x: f64, to_x: f64) {
        let source = PointerSource::Mouse;
        self.send(InputEvent::PointerDown {
            source,
            position: Point::new(from_x, 100.0),
        });
        self.send(InputEvent::PointerMove {
            source,
            position: Point::new(to_x, 100.0),
        });
        self.send(InputEvent::PointerUp { source });
    }

    pub fn wheel(&mut self, delta_y: f64) -> Propagation {
        self.send(InputEvent::Wheel {
            delta_x: 0.0,
            delta_y,
        })
    }

    pub fn key(&mut self, key: Key) -> Propagation {
        self.send(InputEvent::Key {
            key,
            within_widget: true,
        })
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.host.scroll_y = y;
        self.send(InputEvent::Scroll);
    }

    pub fn click(&mut self, x: f64, y: f64) -> Propagation {
        self.send(InputEvent::Click {
            position: Point::new(x, y),
            target: None,
        })
    }

    pub fn click_control(&mut self, control: Control) -> Propagation {
        self.send(InputEvent::Click {
            position: Point::new(0.0, 0.0),
            target: Some(control),
        })
    }

    pub fn tear_down(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown.run();
        }
    }

    pub fn index(&self) -> usize {
        self.carousel.current_index()
    }
}
