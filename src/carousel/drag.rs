//! Drag / swipe gesture handling.
//!
//! ## Lifecycle
//!
//! 1) [`DragSwipe::on_pointer_down`]: only while expanded and on the track.
//!    Transitions are disabled so slides follow the pointer with no latency.
//! 2) [`DragSwipe::on_pointer_move`]: the current slide translates with the
//!    pointer and fades; the adjacent slide slides in from off-screen.  At a
//!    boundary there is no adjacent slide and the current one only moves by
//!    the edge resistance fraction.
//! 3) [`DragSwipe::on_pointer_up`]: past a quarter of the track the drag
//!    snaps to the adjacent slide, otherwise it reverts.  Either way the
//!    final commit happens in [`DragSwipe::settle`], scheduled after the
//!    animation duration.
//!
//! A settle timer carries the gesture generation it was scheduled for.  If
//! anything else needs the carousel before it fires, [`DragSwipe::settle_now`]
//! fast-forwards it, and the stale timer then finds nothing to do.

use std::time::Instant;

use super::config::CarouselConfig;
use super::event::{PointerSource, Propagation};
use super::host::{Host, Point, Presenter, SlideStyle};
use super::listeners::{ListenerId, Listeners};
use super::navigation::Navigation;
use super::schedule::{Scheduler, Task};
use super::state::{Adjacent, CarouselState, DragPhase};
use super::util::{self, Teardown};

const CURRENT_Z: i32 = 1;
const ADJACENT_Z: i32 = 2;

/// Styles for one frame of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    pub progress: f64,
    pub current: SlideStyle,
    pub adjacent: Option<(Adjacent, SlideStyle)>,
}

/// Whether a release commits to the adjacent slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Snap,
    Revert,
}

/// Pointer / touch drag component.
#[derive(Debug, Clone, Copy)]
pub struct DragSwipe {
    config: CarouselConfig,
}

impl DragSwipe {
    pub const LISTENERS: [ListenerId; 6] = [
        ListenerId::PointerDown,
        ListenerId::PointerMove,
        ListenerId::PointerUp,
        ListenerId::TouchStart,
        ListenerId::TouchMove,
        ListenerId::TouchEnd,
    ];

    pub fn new(config: CarouselConfig) -> Self {
        Self { config }
    }

    pub fn attach(&self, listeners: &Listeners) -> Teardown {
        listeners.register(&Self::LISTENERS)
    }

    // ── gesture math ────────────────────────────────────────────

    /// Slide that would be previewed for a drag of `delta_x`.
    ///
    /// Dragging left (negative) reveals the next slide from the right edge;
    /// dragging right reveals the previous one from the left edge.
    pub fn candidate(state: &CarouselState, delta_x: f64, track_width: f64) -> Option<Adjacent> {
        if delta_x < 0.0 && state.current_index + 1 < state.slide_count {
            Some(Adjacent {
                index: state.current_index + 1,
                start_offset: track_width,
            })
        } else if delta_x > 0.0 && state.current_index > 0 {
            Some(Adjacent {
                index: state.current_index - 1,
                start_offset: -track_width,
            })
        } else {
            None
        }
    }

    /// Styles for the current and adjacent slide at `delta_x`.
    pub fn frame(&self, state: &CarouselState, delta_x: f64, track_width: f64) -> DragFrame {
        let Some(adjacent) = Self::candidate(state, delta_x, track_width) else {
            return DragFrame {
                progress: 0.0,
                current: SlideStyle {
                    translate_x: delta_x * self.config.edge_resistance,
                    opacity: 1.0,
                    visible: None,
                    z_index: None,
                },
                adjacent: None,
            };
        };

        let progress = util::drag_progress(delta_x, util::snap_threshold(track_width));
        DragFrame {
            progress,
            current: SlideStyle {
                translate_x: delta_x,
                opacity: 1.0 - progress,
                visible: Some(true),
                z_index: Some(CURRENT_Z),
            },
            adjacent: Some((
                adjacent,
                SlideStyle {
                    translate_x: adjacent.start_offset * (1.0 - progress),
                    opacity: progress,
                    visible: Some(true),
                    z_index: Some(ADJACENT_Z),
                },
            )),
        }
    }

    /// Snap once the drag covers half the snap threshold (a quarter of the
    /// track) and there is somewhere to snap to.
    pub fn release_kind(delta_x: f64, track_width: f64, adjacent: Option<Adjacent>) -> Release {
        let needed = util::snap_threshold(track_width) / 2.0;
        if adjacent.is_some() && delta_x.abs() >= needed {
            Release::Snap
        } else {
            Release::Revert
        }
    }

    // ── event handlers ──────────────────────────────────────────

    pub fn on_pointer_down<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        nav: &Navigation,
        source: PointerSource,
        position: Point,
    ) -> Propagation {
        if !state.is_expanded() || state.is_dragging() || !host.track_contains(position) {
            return Propagation::Continue;
        }

        self.settle_now(state, host, nav);

        let generation = state.next_generation();
        state.was_dragging = true;
        state.drag = DragPhase::Dragging {
            start_x: position.x,
            current_x: position.x,
            adjacent: None,
        };

        util::disable_transitions(host, state.slide_count);
        for slide in (0..state.slide_count).filter(|&s| s != state.current_index) {
            host.clear_slide_style(slide);
        }
        tracing::debug!(generation, x = position.x, ?source, "drag start");

        passive(source)
    }

    pub fn on_pointer_move<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        source: PointerSource,
        position: Point,
    ) -> Propagation {
        let DragPhase::Dragging {
            start_x,
            adjacent: previous,
            ..
        } = state.drag
        else {
            return Propagation::Continue;
        };

        let delta_x = position.x - start_x;
        let frame = self.frame(state, delta_x, host.track_width());
        let next = frame.adjacent.map(|(adj, _)| adj);

        // Direction flipped (or hit a boundary): drop the old preview first.
        if let Some(prev) = previous {
            if next.map(|a| a.index) != Some(prev.index) {
                host.clear_slide_style(prev.index);
            }
        }

        host.set_slide_style(state.current_index, frame.current);
        if let Some((adj, style)) = frame.adjacent {
            host.set_slide_style(adj.index, style);
        }

        state.drag = DragPhase::Dragging {
            start_x,
            current_x: position.x,
            adjacent: next,
        };
        tracing::trace!(delta_x, progress = frame.progress, "drag move");

        passive(source)
    }

    /// Release (or cancel) the active drag.  A cancelled drag always reverts.
    pub fn on_pointer_up<H: Host + ?Sized>(
        &self,
        state: &mut CarouselState,
        host: &mut H,
        scheduler: &mut Scheduler,
        source: PointerSource,
        cancelled: bool,
        now: Instant,
    ) -> Propagation {
        let DragPhase::Dragging {
            start_x,
            current_x,
            adjacent,
        } = state.drag
        else {
            return Propagation::Continue;
        };

        let generation = state.generation;
        scheduler.after(
            now,
            self.config.click_cooldown,
            Task::EndClickCooldown { generation },
        );
        util::enable_transitions(host, state.slide_count, self.config.animation_duration);

        let width = host.track_width();
        let delta_x = current_x - start_x;
        let release = if cancelled {
            Release::Revert
        } else {
            Self::release_kind(delta_x, width, adjacent)
        };

        let current = state.current_index;
        match (release, adjacent) {
            (Release::Snap, Some(to)) => {
                let exit = if delta_x < 0.0 { -width } else { width };
                host.set_slide_style(
                    current,
                    SlideStyle {
                        translate_x: exit,
                        opacity: 0.0,
                        visible: Some(true),
                        z_index: Some(CURRENT_Z),
                    },
                );
                host.set_slide_style(
                    to.index,
                    SlideStyle {
                        translate_x: 0.0,
                        opacity: 1.0,
                        visible: Some(true),
                        z_index: Some(ADJACENT_Z),
                    },
                );
                state.drag = DragPhase::Snapping { from: current, to };
                tracing::debug!(generation, delta_x, from = current, to = to.index, "drag snap");
            }
            _ => {
                host.set_slide_style(current, SlideStyle::default());
                if let Some(adj) = adjacent {
                    host.set_slide_style(
                        adj.index,
                        SlideStyle {
                            translate_x: adj.start_offset,
                            opacity: 0.0,
                            visible: Some(true),
                            z_index: Some(ADJACENT_Z),
                        },
                    );
                }
                state.drag = DragPhase::Reverting { adjacent };
                tracing::debug!(generation, delta_x, cancelled, "drag revert");
            }
        }

        scheduler.after(
            now,
            self.config.animation_duration,
            Task::SettleDrag { generation },
        );
        passive(source)
    }

    // ── deferred work ───────────────────────────────────────────

    /// Timer callback for [`Task::SettleDrag`].
    pub fn settle<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
        generation: u64,
    ) {
        if generation != state.generation || !state.drag.is_settling() {
            tracing::trace!(generation, current = state.generation, "stale drag settle");
            return;
        }
        Self::finish(state, presenter, nav);
    }

    /// Timer callback for [`Task::EndClickCooldown`].
    pub fn end_click_cooldown(&self, state: &mut CarouselState, generation: u64) {
        if generation == state.generation && !state.is_dragging() {
            state.was_dragging = false;
        }
    }

    /// Complete a pending snap/revert immediately.
    pub fn settle_now<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
    ) {
        if state.drag.is_settling() {
            Self::finish(state, presenter, nav);
        }
    }

    /// Drop whatever gesture is in flight (the panel is collapsing).
    ///
    /// A pending snap still commits so its index change is not lost.  An
    /// abandoned drag ends here: its release finds nothing to do, so the
    /// click cooldown never runs for it.
    pub fn abandon<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
    ) {
        match state.drag {
            DragPhase::Idle => {}
            DragPhase::Snapping { .. } | DragPhase::Reverting { .. } => {
                Self::finish(state, presenter, nav);
            }
            DragPhase::Dragging { .. } => {
                util::reset_styles(presenter, state.slide_count);
                state.drag = DragPhase::Idle;
                state.was_dragging = false;
                tracing::debug!("drag abandoned");
            }
        }
    }

    fn finish<P: Presenter + ?Sized>(
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
    ) {
        util::reset_styles(presenter, state.slide_count);
        if let DragPhase::Snapping { to, .. } = state.drag {
            nav.commit_active(state, presenter, to.index);
        }
        state.drag = DragPhase::Idle;
    }
}

/// Touch listeners never block scrolling; mouse drags suppress selection.
fn passive(source: PointerSource) -> Propagation {
    match source {
        PointerSource::Mouse => Propagation::PreventDefault,
        PointerSource::Touch => Propagation::Continue,
    }
}
