//! Orchestrator: one carousel attached to one host.
//!
//! [`Carousel::attach`] wires every component around a single
//! [`CarouselState`] and returns the composed [`Teardown`].  The host then
//! feeds input through [`Carousel::dispatch`] and calls
//! [`Carousel::on_frame`] after each render so scheduled work can run.

use std::time::Instant;

use super::config::CarouselConfig;
use super::drag::DragSwipe;
use super::event::{Control, InputEvent, Propagation};
use super::expand::ExpandCollapse;
use super::host::{Host, SlideFlag};
use super::keyboard::{KeyAction, KeyboardNavigation};
use super::listeners::{ListenerId, Listeners};
use super::navigation::Navigation;
use super::schedule::{Scheduler, Task};
use super::state::CarouselState;
use super::util::Teardown;
use super::wheel::WheelNavigation;
use crate::error::{CarouselError, CarouselResult};

#[derive(Debug)]
pub struct Carousel {
    state: CarouselState,
    config: CarouselConfig,
    nav: Navigation,
    expand: ExpandCollapse,
    drag: DragSwipe,
    wheel: WheelNavigation,
    keyboard: KeyboardNavigation,
    listeners: Listeners,
    scheduler: Scheduler,
}

impl Carousel {
    /// Build the carousel for `host` and register every listener.
    ///
    /// Fails when the host has no slides or `config` is out of range.
    pub fn attach<H: Host + ?Sized>(
        host: &mut H,
        config: CarouselConfig,
    ) -> CarouselResult<(Self, Teardown)> {
        let slide_count = host.slide_count();
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        config.validate()?;

        let nav = Navigation::new(host.controls());
        let expand = ExpandCollapse::new(config.dismiss_ratio);
        let listeners = Listeners::new();
        let mut carousel = Self {
            state: CarouselState::new(slide_count),
            config,
            nav,
            expand,
            drag: DragSwipe::new(config),
            wheel: WheelNavigation::new(config.gesture_gap),
            keyboard: KeyboardNavigation::new(),
            listeners,
            scheduler: Scheduler::new(),
        };
        let teardown = Teardown::compose([carousel.register(), carousel.listeners.detacher()]);

        host.set_focusable(true);
        host.set_slide_flag(0, SlideFlag::Active, true);
        carousel.nav.update_controls(&carousel.state, host);
        if host.deep_link_expanded() {
            tracing::debug!("deep link requests expanded mode");
            carousel.expand(host);
        }

        tracing::debug!(
            slides = slide_count,
            listeners = carousel.listeners.count(),
            "carousel attached"
        );
        Ok((carousel, teardown))
    }

    /// Register every component's listeners.  Safe to call again: ids that
    /// are already registered are skipped, and the returned teardown only
    /// removes what this call added.
    pub fn register(&self) -> Teardown {
        Teardown::compose([
            self.drag.attach(&self.listeners),
            self.wheel.attach(&self.listeners),
            self.keyboard.attach(&self.listeners),
            self.expand.attach(&self.listeners),
        ])
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn is_detached(&self) -> bool {
        self.listeners.is_detached()
    }

    /// Earliest pending timer, so the host can wake up for it.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    // ── programmatic control ────────────────────────────────────

    pub fn expand<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.is_detached() {
            return false;
        }
        self.drag.settle_now(&mut self.state, host, &self.nav);
        self.expand
            .expand(&mut self.state, host, &self.nav, &mut self.scheduler)
    }

    pub fn collapse<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.is_detached() {
            return false;
        }
        self.expand.collapse(
            &mut self.state,
            host,
            &self.nav,
            &self.drag,
            &mut self.scheduler,
        )
    }

    pub fn go_to_slide<H: Host + ?Sized>(&mut self, host: &mut H, index: usize) -> bool {
        if self.is_detached() || self.state.is_dragging() {
            return false;
        }
        self.drag.settle_now(&mut self.state, host, &self.nav);
        self.nav.go_to_slide(&mut self.state, host, index, None)
    }

    // ── input ───────────────────────────────────────────────────

    /// Route one input event to the component listening for it.
    pub fn dispatch<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: InputEvent,
        now: Instant,
    ) -> Propagation {
        if self.is_detached() {
            return Propagation::Continue;
        }

        match event {
            InputEvent::PointerDown { source, position } => {
                if !self.listening_for_pointer(&event) {
                    return Propagation::Continue;
                }
                self.drag
                    .on_pointer_down(&mut self.state, host, &self.nav, source, position)
            }
            InputEvent::PointerMove { source, position } => {
                if !self.listening_for_pointer(&event) {
                    return Propagation::Continue;
                }
                self.drag
                    .on_pointer_move(&mut self.state, host, source, position)
            }
            InputEvent::PointerUp { source } | InputEvent::PointerCancel { source } => {
                if !self.listening_for_pointer(&event) {
                    return Propagation::Continue;
                }
                let cancelled = matches!(event, InputEvent::PointerCancel { .. });
                self.drag.on_pointer_up(
                    &mut self.state,
                    host,
                    &mut self.scheduler,
                    source,
                    cancelled,
                    now,
                )
            }
            InputEvent::Wheel { delta_x, delta_y } => {
                if !self.listeners.is_attached(ListenerId::Wheel) {
                    return Propagation::Continue;
                }
                if self.state.is_dragging() {
                    return if self.state.is_expanded() {
                        Propagation::PreventDefault
                    } else {
                        Propagation::Continue
                    };
                }
                self.drag.settle_now(&mut self.state, host, &self.nav);
                self.wheel
                    .on_wheel(&mut self.state, host, &self.nav, delta_x, delta_y, now)
            }
            InputEvent::Key { key, within_widget } => {
                if self.listeners.is_attached(ListenerId::GlobalKey) {
                    let (action, propagation) = self.keyboard.on_global_key(&self.state, key);
                    if action == KeyAction::Collapse {
                        self.collapse(host);
                        return propagation;
                    }
                }
                if !within_widget
                    || !self.listeners.is_attached(ListenerId::WidgetKey)
                    || self.state.is_dragging()
                {
                    return Propagation::Continue;
                }
                self.drag.settle_now(&mut self.state, host, &self.nav);
                let (_, propagation) =
                    self.keyboard
                        .on_widget_key(&mut self.state, host, &self.nav, key);
                propagation
            }
            InputEvent::Scroll => {
                if self.listeners.is_attached(ListenerId::Scroll) {
                    self.expand.on_scroll(
                        &mut self.state,
                        host,
                        &self.nav,
                        &self.drag,
                        &mut self.scheduler,
                    );
                }
                Propagation::Continue
            }
            InputEvent::Click {
                target: Some(control),
                ..
            } => {
                if !self.listeners.is_attached(ListenerId::ControlClick) {
                    return Propagation::Continue;
                }
                self.on_control(host, control)
            }
            InputEvent::Click {
                position,
                target: None,
            } => {
                if self.listeners.is_attached(ListenerId::ClickOutside) {
                    self.expand.on_click_outside(
                        &mut self.state,
                        host,
                        &self.nav,
                        &self.drag,
                        &mut self.scheduler,
                        position,
                    );
                }
                Propagation::Continue
            }
        }
    }

    fn listening_for_pointer(&self, event: &InputEvent) -> bool {
        ListenerId::for_pointer(event).is_some_and(|id| self.listeners.is_attached(id))
    }

    fn on_control<H: Host + ?Sized>(&mut self, host: &mut H, control: Control) -> Propagation {
        if self.state.is_dragging() {
            return Propagation::Continue;
        }
        let controls = self.nav.controls();
        let handled = match control {
            Control::Dot(dot) if dot < controls.dots => {
                self.drag.settle_now(&mut self.state, host, &self.nav);
                self.nav.go_to_dot(&mut self.state, host, dot);
                true
            }
            Control::PrevArrow if controls.prev_arrow => {
                self.drag.settle_now(&mut self.state, host, &self.nav);
                self.nav.go_to_prev(&mut self.state, host);
                true
            }
            Control::NextArrow if controls.next_arrow => {
                self.drag.settle_now(&mut self.state, host, &self.nav);
                self.nav.go_to_next(&mut self.state, host);
                true
            }
            Control::ExpandTrigger if controls.expand_trigger => {
                self.expand(host);
                true
            }
            Control::CollapseTrigger if controls.collapse_trigger => {
                self.collapse(host);
                true
            }
            _ => false,
        };
        if handled {
            Propagation::PreventDefault
        } else {
            Propagation::Continue
        }
    }

    // ── scheduled work ──────────────────────────────────────────

    /// Run after-frame tasks, then every timer due at `now`.  Returns how
    /// many tasks ran, so the host knows whether to present again.
    ///
    /// After teardown, pending work is dropped unapplied.
    pub fn on_frame<H: Host + ?Sized>(&mut self, host: &mut H, now: Instant) -> usize {
        if self.is_detached() {
            if self.scheduler.pending() > 0 {
                tracing::trace!(pending = self.scheduler.pending(), "dropping work after teardown");
                self.scheduler.clear();
            }
            return 0;
        }

        let mut ran = 0;
        for task in self.scheduler.take_frame_tasks() {
            self.run(host, task);
            ran += 1;
        }
        for task in self.scheduler.take_due(now) {
            self.run(host, task);
            ran += 1;
        }
        ran
    }

    fn run<H: Host + ?Sized>(&mut self, host: &mut H, task: Task) {
        match task {
            Task::SettleDrag { generation } => {
                self.drag
                    .settle(&mut self.state, host, &self.nav, generation)
            }
            Task::EndClickCooldown { generation } => {
                self.drag.end_click_cooldown(&mut self.state, generation)
            }
            Task::CaptureExpandedHeight { expansion } => {
                self.expand.capture_height(&mut self.state, host, expansion)
            }
            Task::ScrollToTop { expansion } => {
                self.expand.scroll_to_top(&self.state, host, expansion)
            }
        }
    }
}
