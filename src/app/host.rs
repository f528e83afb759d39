//! Terminal implementation of the carousel host.
//!
//! Geometry comes from the last computed [`PageLayout`] and the zones the
//! deck widget reported when it was drawn.  Presenter calls only record
//! visual state; nothing is drawn until the next frame.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use slidedeck::carousel::event::Control;
use slidedeck::carousel::host::{
    Arrow, Controls, Geometry, Notification, Overlay, Point, Presenter, RootFlag, SlideFlag,
    SlideStyle,
};

use crate::ui::layout::{point_in_rect, PageLayout, INLINE_ROWS, PANEL_CHROME};
use crate::ui::motion::{Motion, Pose};

/// Clickable regions of the deck, in document coordinates.
#[derive(Debug, Clone, Default)]
pub struct DeckZones {
    pub dots: Vec<Rect>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub expand: Option<Rect>,
    pub collapse: Option<Rect>,
}

/// Everything the deck widget needs to draw one slide.
#[derive(Debug, Clone, Copy)]
pub struct SlideVisual {
    pub active: bool,
    pub entrance: Option<SlideFlag>,
    pub style: Option<SlideStyle>,
    pub transition: Option<Duration>,
    pub motion: Motion,
}

impl SlideVisual {
    fn new(active: bool, now: Instant) -> Self {
        Self {
            active,
            entrance: None,
            style: None,
            transition: None,
            motion: Motion::still(Pose::REST, now),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self.style.and_then(|s| s.visible) {
            Some(visible) => visible,
            None => self.active,
        }
    }

    pub fn z_index(&self) -> i32 {
        self.style.and_then(|s| s.z_index).unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct TerminalHost {
    slide_rows: Vec<u16>,
    controls: Controls,
    deep_link: bool,
    entrance_duration: Duration,

    /// Page scroll offset in rows.
    pub scroll_y: f64,
    /// Page area on screen, from the last layout pass.
    pub viewport: Rect,
    pub layout: PageLayout,
    pub zones: DeckZones,
    /// Screen-fixed regions exempt from click-outside (screen coordinates).
    pub overlays: Vec<(Overlay, Rect)>,

    pub slides: Vec<SlideVisual>,
    pub dots: Vec<bool>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub expanded: bool,
    pub dismissing: bool,
    pub height_override: Option<f64>,
    pub focusable: bool,
    pub focused: bool,
    pub announcements: Vec<Notification>,
}

impl TerminalHost {
    pub fn new(
        slide_rows: Vec<u16>,
        deep_link: bool,
        entrance_duration: Duration,
        viewport: Rect,
    ) -> Self {
        let now = Instant::now();
        let count = slide_rows.len();
        let mut host = Self {
            slide_rows,
            controls: Controls {
                dots: count,
                prev_arrow: true,
                next_arrow: true,
                expand_trigger: true,
                collapse_trigger: true,
            },
            deep_link,
            entrance_duration,
            scroll_y: 0.0,
            viewport,
            layout: PageLayout::default(),
            zones: DeckZones::default(),
            overlays: Vec::new(),
            slides: (0..count).map(|i| SlideVisual::new(i == 0, now)).collect(),
            dots: vec![false; count],
            prev_disabled: false,
            next_disabled: false,
            expanded: false,
            dismissing: false,
            height_override: None,
            focusable: false,
            focused: false,
            announcements: Vec::new(),
        };
        host.relayout(viewport);
        host
    }

    /// Height the expanded panel takes with no override.
    pub fn natural_height(&self) -> u16 {
        let tallest = self.slide_rows.iter().copied().max().unwrap_or(0);
        tallest
            .saturating_add(PANEL_CHROME)
            .max(self.viewport.height.saturating_sub(2))
    }

    pub fn panel_height(&self) -> u16 {
        if !self.expanded {
            return INLINE_ROWS;
        }
        match self.height_override {
            Some(h) => h.round().clamp(3.0, f64::from(u16::MAX)) as u16,
            None => self.natural_height(),
        }
    }

    /// Recompute the page layout for `viewport` and clamp the scroll.
    pub fn relayout(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.layout = PageLayout::compute(viewport.width, self.panel_height(), self.expanded);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
    }

    pub fn max_scroll(&self) -> f64 {
        f64::from(self.layout.doc_height.saturating_sub(self.viewport.height))
    }

    /// Scroll the page by `rows`; returns whether the offset changed.
    pub fn scroll_by(&mut self, rows: i32) -> bool {
        let before = self.scroll_y;
        self.scroll_y = (self.scroll_y + f64::from(rows)).clamp(0.0, self.max_scroll());
        self.scroll_y != before
    }

    pub fn scroll_row(&self) -> u16 {
        self.scroll_y.round() as u16
    }

    /// Screen cell to document point, if it lies on the page.
    pub fn to_doc(&self, col: u16, row: u16) -> Option<Point> {
        point_in_rect(self.viewport, col, row).then(|| self.screen_point(col, row))
    }

    /// Screen cell to document point, wherever it is.  Cells outside the
    /// page (the status bar) map past the visible window.
    pub fn screen_point(&self, col: u16, row: u16) -> Point {
        Point::new(
            f64::from(col) - f64::from(self.viewport.x),
            f64::from(row) - f64::from(self.viewport.y) + self.scroll_y.round(),
        )
    }

    fn to_screen(&self, point: Point) -> Option<(u16, u16)> {
        let col = point.x + f64::from(self.viewport.x);
        let row = point.y - self.scroll_y.round() + f64::from(self.viewport.y);
        if col < 0.0 || row < 0.0 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Control under a document point.
    pub fn hit_control(&self, point: Point) -> Option<Control> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (col, row) = (point.x as u16, point.y as u16);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| point_in_rect(r, col, row));

        if let Some(dot) = self
            .zones
            .dots
            .iter()
            .position(|&r| point_in_rect(r, col, row))
        {
            return Some(Control::Dot(dot));
        }
        if inside(self.zones.prev) {
            return Some(Control::PrevArrow);
        }
        if inside(self.zones.next) {
            return Some(Control::NextArrow);
        }
        if inside(self.zones.expand) {
            return Some(Control::ExpandTrigger);
        }
        if inside(self.zones.collapse) {
            return Some(Control::CollapseTrigger);
        }
        None
    }

    /// Screen overlay under a screen cell.
    pub fn overlay_at_screen(&self, col: u16, row: u16) -> Option<Overlay> {
        self.overlays
            .iter()
            .find(|(_, rect)| point_in_rect(*rect, col, row))
            .map(|&(overlay, _)| overlay)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.slides.iter().any(|s| s.motion.is_animating(now))
    }

    fn entrance_pose(&self, flag: SlideFlag) -> Pose {
        let shift = f64::from(self.layout.track.width) / 3.0;
        match flag {
            SlideFlag::EnterFromRight => Pose {
                translate_x: shift,
                opacity: 0.2,
            },
            SlideFlag::EnterFromLeft => Pose {
                translate_x: -shift,
                opacity: 0.2,
            },
            _ => Pose {
                translate_x: 0.0,
                opacity: 0.0,
            },
        }
    }

    fn contains(rect: Rect, point: Point) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point_in_rect(rect, point.x as u16, point.y as u16)
    }
}

impl Geometry for TerminalHost {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn controls(&self) -> Controls {
        self.controls
    }

    fn track_width(&self) -> f64 {
        f64::from(self.layout.track.width)
    }

    fn content_height(&self) -> f64 {
        f64::from(self.natural_height())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn track_contains(&self, point: Point) -> bool {
        Self::contains(self.layout.track, point)
    }

    fn content_contains(&self, point: Point) -> bool {
        Self::contains(self.layout.panel, point)
    }

    fn overlay_at(&self, point: Point) -> Option<Overlay> {
        let (col, row) = self.to_screen(point)?;
        self.overlay_at_screen(col, row)
    }

    fn deep_link_expanded(&self) -> bool {
        self.deep_link
    }
}

impl Presenter for TerminalHost {
    fn set_slide_flag(&mut self, slide: usize, flag: SlideFlag, on: bool) {
        let now = Instant::now();
        let entrance = match flag {
            SlideFlag::Active => None,
            entrance => Some(entrance),
        };
        let pose = self
            .slides
            .get(slide)
            .and_then(|v| v.entrance)
            .map(|f| self.entrance_pose(f));
        let duration = self.entrance_duration;
        let Some(visual) = self.slides.get_mut(slide) else {
            return;
        };

        match entrance {
            Some(flag) => {
                if on {
                    visual.entrance = Some(flag);
                } else if visual.entrance == Some(flag) {
                    visual.entrance = None;
                }
            }
            None => {
                let was_active = visual.active;
                visual.active = on;
                if on && !was_active && visual.style.is_none() {
                    visual.motion = match pose {
                        Some(from) => Motion::enter(from, Pose::REST, duration, now),
                        None => Motion::still(Pose::REST, now),
                    };
                }
            }
        }
    }

    fn set_slide_style(&mut self, slide: usize, style: SlideStyle) {
        let now = Instant::now();
        if let Some(visual) = self.slides.get_mut(slide) {
            visual.style = Some(style);
            let to = Pose {
                translate_x: style.translate_x,
                opacity: style.opacity,
            };
            visual.motion.retarget(to, visual.transition, now);
        }
    }

    fn clear_slide_style(&mut self, slide: usize) {
        let now = Instant::now();
        if let Some(visual) = self.slides.get_mut(slide) {
            if visual.style.take().is_some() {
                visual.motion.retarget(Pose::REST, visual.transition, now);
            }
        }
    }

    fn set_slide_transition(&mut self, slide: usize, transition: Option<Duration>) {
        if let Some(visual) = self.slides.get_mut(slide) {
            visual.transition = transition;
        }
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        if let Some(d) = self.dots.get_mut(dot) {
            *d = active;
        }
    }

    fn set_arrow_disabled(&mut self, arrow: Arrow, disabled: bool) {
        match arrow {
            Arrow::Prev => self.prev_disabled = disabled,
            Arrow::Next => self.next_disabled = disabled,
        }
    }

    fn set_root_flag(&mut self, flag: RootFlag, on: bool) {
        match flag {
            RootFlag::Expanded => self.expanded = on,
            RootFlag::Dismissing => self.dismissing = on,
        }
        self.relayout(self.viewport);
    }

    fn set_height_override(&mut self, height: Option<f64>) {
        self.height_override = height;
        self.relayout(self.viewport);
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.focused = false;
        }
    }

    fn focus_root(&mut self) {
        if self.focusable {
            self.focused = true;
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
    }

    fn notify(&mut self, notification: Notification) {
        tracing::debug!(?notification, "host notified");
        self.announcements.push(notification);
    }
}
