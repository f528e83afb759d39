//! Expand / collapse and scroll-driven dismissal.
//!
//! Expanding resets to the first slide, records the scroll offset, and waits
//! one frame to measure the natural content height.  While expanded,
//! scrolling down past the start offset shrinks the panel linearly; once the
//! scroll covers `dismiss_ratio` of the measured height the panel collapses.
//! Scrolling back up cancels the shrink.

use super::drag::DragSwipe;
use super::host::{Host, Notification, Point, RootFlag};
use super::listeners::{ListenerId, Listeners};
use super::navigation::Navigation;
use super::schedule::{Scheduler, Task};
use super::state::{CarouselState, DisplayMode};
use super::util::Teardown;

/// Expand / collapse component.
#[derive(Debug, Clone, Copy)]
pub struct ExpandCollapse {
    dismiss_ratio: f64,
}

impl ExpandCollapse {
    pub fn new(dismiss_ratio: f64) -> Self {
        Self { dismiss_ratio }
    }

    pub fn attach(&self, listeners: &Listeners) -> Teardown {
        listeners.register(&[
            ListenerId::Scroll,
            ListenerId::ClickOutside,
            ListenerId::ControlClick,
        ])
    }

    /// Enter expanded mode.  Returns `false` if already expanded.
    pub fn expand<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        nav: &Navigation,
        scheduler: &mut Scheduler,
    ) -> bool {
        if state.is_expanded() {
            return false;
        }

        host.set_root_flag(RootFlag::Expanded, true);
        nav.go_to_slide(state, host, 0, None);

        let scroll_start_y = host.scroll_y();
        host.set_root_flag(RootFlag::Dismissing, false);
        host.set_height_override(None);

        state.expansions = state.expansions.wrapping_add(1);
        state.display = DisplayMode::Expanding { scroll_start_y };
        scheduler.after_frame(Task::CaptureExpandedHeight {
            expansion: state.expansions,
        });
        tracing::debug!(expansion = state.expansions, scroll_start_y, "expand");
        true
    }

    /// Leave expanded mode.  Any gesture in flight is settled or dropped.
    pub fn collapse<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        nav: &Navigation,
        drag: &DragSwipe,
        scheduler: &mut Scheduler,
    ) -> bool {
        if !state.is_expanded() {
            return false;
        }

        drag.abandon(state, host, nav);
        host.set_root_flag(RootFlag::Expanded, false);
        host.set_root_flag(RootFlag::Dismissing, false);
        host.set_height_override(None);

        state.display = DisplayMode::Collapsed;
        scheduler.after_frame(Task::ScrollToTop {
            expansion: state.expansions,
        });
        tracing::debug!(expansion = state.expansions, "collapse");
        true
    }

    /// After-frame callback: measure height, focus, announce.
    ///
    /// Scheduled once per expansion, so every expansion is announced exactly
    /// once.  Measuring and focusing only apply while that expansion is
    /// still the one on screen.
    pub fn capture_height<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        expansion: u64,
    ) {
        if expansion == state.expansions {
            if let DisplayMode::Expanding { scroll_start_y } = state.display {
                let track_height = host.content_height();
                state.display = DisplayMode::Expanded {
                    scroll_start_y,
                    track_height,
                };
                host.focus_root();
                tracing::debug!(expansion, track_height, "expanded height captured");
            }
        }
        host.notify(Notification::Expanded);
    }

    /// After-frame callback following a collapse.
    pub fn scroll_to_top<H: Host + ?Sized>(
        &self,
        state: &CarouselState,
        host: &mut H,
        expansion: u64,
    ) {
        if expansion == state.expansions && !state.is_expanded() {
            host.scroll_to_top();
        }
    }

    /// Progressive dismissal as the page scrolls past the panel.
    pub fn on_scroll<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        nav: &Navigation,
        drag: &DragSwipe,
        scheduler: &mut Scheduler,
    ) {
        let (scroll_start_y, track_height) = match state.display {
            DisplayMode::Expanded {
                scroll_start_y,
                track_height,
            }
            | DisplayMode::Dismissing {
                scroll_start_y,
                track_height,
            } => (scroll_start_y, track_height),
            DisplayMode::Collapsed | DisplayMode::Expanding { .. } => return,
        };

        let scrolled = host.scroll_y() - scroll_start_y;
        if scrolled <= 0.0 {
            if state.is_scroll_dismissing() {
                host.set_height_override(None);
                host.set_root_flag(RootFlag::Dismissing, false);
                state.display = DisplayMode::Expanded {
                    scroll_start_y,
                    track_height,
                };
                tracing::trace!("dismiss cancelled");
            }
            return;
        }

        host.set_root_flag(RootFlag::Dismissing, true);
        state.display = DisplayMode::Dismissing {
            scroll_start_y,
            track_height,
        };

        if scrolled >= track_height * self.dismiss_ratio {
            self.collapse(state, host, nav, drag, scheduler);
        } else {
            let height = track_height - scrolled;
            host.set_height_override(Some(height));
            tracing::trace!(scrolled, height, "dismissing");
        }
    }

    /// Click outside the expanded content collapses it, except right after
    /// a drag or inside an exempt overlay.
    pub fn on_click_outside<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        nav: &Navigation,
        drag: &DragSwipe,
        scheduler: &mut Scheduler,
        position: Point,
    ) -> bool {
        if !state.is_expanded() || state.was_dragging {
            return false;
        }
        if host.content_contains(position) {
            return false;
        }
        if let Some(overlay) = host.overlay_at(position) {
            tracing::trace!(?overlay, "click inside exempt overlay");
            return false;
        }
        self.collapse(state, host, nav, drag, scheduler)
    }
}
