//! Recording host used by the unit tests.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use super::host::{
    Arrow, Controls, Geometry, Notification, Overlay, Point, Presenter, RootFlag,
    SlideFlag, SlideStyle,
};

/// In-memory host: geometry is plain fields, effects are recorded.
#[derive(Debug)]
pub struct TestHost {
    pub slides: usize,
    pub controls: Controls,
    pub track_width: f64,
    pub content_height: f64,
    pub scroll_y: f64,
    pub deep_link: bool,
    /// Content area as `(top, bottom)` in y; the track spans the same rows.
    pub content_rows: (f64, f64),
    pub overlays: Vec<(Overlay, Point, Point)>,

    pub flags: HashSet<(usize, SlideFlag)>,
    pub styles: HashMap<usize, SlideStyle>,
    pub transitions: HashMap<usize, Option<Duration>>,
    pub dots: HashMap<usize, bool>,
    pub arrows: HashMap<Arrow, bool>,
    pub root: HashSet<RootFlag>,
    pub height_override: Option<f64>,
    pub focusable: bool,
    pub focused: bool,
    pub scrolled_to_top: usize,
    pub notifications: Vec<Notification>,
    /// Number of presenter calls, to detect any visual change.
    pub effects: usize,
}

impl TestHost {
    pub fn new(slides: usize) -> Self {
        Self {
            slides,
            controls: Controls {
                dots: slides,
                prev_arrow: true,
                next_arrow: true,
                expand_trigger: true,
                collapse_trigger: true,
            },
            track_width: 400.0,
            content_height: 800.0,
            scroll_y: 0.0,
            deep_link: false,
            content_rows: (0.0, 500.0),
            overlays: Vec::new(),
            flags: HashSet::new(),
            styles: HashMap::new(),
            transitions: HashMap::new(),
            dots: HashMap::new(),
            arrows: HashMap::new(),
            root: HashSet::new(),
            height_override: None,
            focusable: false,
            focused: false,
            scrolled_to_top: 0,
            notifications: Vec::new(),
            effects: 0,
        }
    }

    pub fn has_flag(&self, slide: usize, flag: SlideFlag) -> bool {
        self.flags.contains(&(slide, flag))
    }

    pub fn active_slides(&self) -> Vec<usize> {
        let mut active: Vec<usize> = (0..self.slides)
            .filter(|&s| self.has_flag(s, SlideFlag::Active))
            .collect();
        active.sort_unstable();
        active
    }
}

impl Geometry for TestHost {
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
        let (top, bottom) = self.content_rows;
        point.x >= 0.0 && point.x < self.track_width && point.y >= top && point.y < bottom
    }

    fn overlay_at(&self, point: Point) -> Option<Overlay> {
        self.overlays.iter().find_map(|&(overlay, min, max)| {
            (point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y)
                .then_some(overlay)
        })
    }

    fn deep_link_expanded(&self) -> bool {
        self.deep_link
    }
}

impl Presenter for TestHost {
    fn set_slide_flag(&mut self, slide: usize, flag: SlideFlag, on: bool) {
        self.effects += 1;
        if on {
            self.flags.insert((slide, flag));
        } else {
            self.flags.remove(&(slide, flag));
        }
    }

    fn set_slide_style(&mut self, slide: usize, style: SlideStyle) {
        self.effects += 1;
        self.styles.insert(slide, style);
    }

    fn clear_slide_style(&mut self, slide: usize) {
        self.effects += 1;
        self.styles.remove(&slide);
    }

    fn set_slide_transition(&mut self, slide: usize, transition: Option<Duration>) {
        self.effects += 1;
        self.transitions.insert(slide, transition);
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.effects += 1;
        self.dots.insert(dot, active);
    }

    fn set_arrow_disabled(&mut self, arrow: Arrow, disabled: bool) {
        self.effects += 1;
        self.arrows.insert(arrow, disabled);
    }

    fn set_root_flag(&mut self, flag: RootFlag, on: bool) {
        self.effects += 1;
        if on {
            self.root.insert(flag);
        } else {
            self.root.remove(&flag);
        }
    }

    fn set_height_override(&mut self, height: Option<f64>) {
        self.effects += 1;
        self.height_override = height;
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.effects += 1;
        self.focusable = focusable;
    }

    fn focus_root(&mut self) {
        self.effects += 1;
        self.focused = true;
    }

    fn scroll_to_top(&mut self) {
        self.effects += 1;
        self.scroll_y = 0.0;
        self.scrolled_to_top += 1;
    }

    fn notify(&mut self, notification: Notification) {
        self.effects += 1;
        self.notifications.push(notification);
    }
}
