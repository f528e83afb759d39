//! Navigation: the only component that commits which slide is active.
//!
//! Everything else (drag snap, wheel, keys, dot/arrow clicks) ends up in
//! [`Navigation::go_to_slide`] or [`Navigation::commit_active`].  Animation
//! timing is not owned here; the drag handler finishes its own motion first.

use super::host::{Arrow, Controls, Presenter, SlideFlag};
use super::state::CarouselState;

/// How the newly active slide enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    FromLeft,
    FromRight,
    #[default]
    Fade,
}

impl Entrance {
    fn flag(self) -> SlideFlag {
        match self {
            Entrance::FromLeft => SlideFlag::EnterFromLeft,
            Entrance::FromRight => SlideFlag::EnterFromRight,
            Entrance::Fade => SlideFlag::EnterFade,
        }
    }

    /// Entrance for a jump from `from` to `to` (dot clicks).
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Entrance::FromRight
        } else {
            Entrance::FromLeft
        }
    }
}

/// Slide navigation over the discovered controls.
#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    controls: Controls,
}

impl Navigation {
    pub fn new(controls: Controls) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Make `index` the active slide.  Returns `false` (and changes nothing)
    /// when `index` is out of range or already current.
    pub fn go_to_slide<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        index: usize,
        entrance: Option<Entrance>,
    ) -> bool {
        if index >= state.slide_count || index == state.current_index {
            return false;
        }

        let entrance = entrance.unwrap_or_default();
        for slide in 0..state.slide_count {
            for flag in SlideFlag::ENTRANCES {
                presenter.set_slide_flag(slide, flag, false);
            }
        }
        presenter.set_slide_flag(state.current_index, SlideFlag::Active, false);
        presenter.set_slide_flag(index, entrance.flag(), true);
        presenter.set_slide_flag(index, SlideFlag::Active, true);

        tracing::debug!(from = state.current_index, to = index, ?entrance, "go_to_slide");
        state.current_index = index;
        self.update_controls(state, presenter);
        true
    }

    /// One slide forward; no wraparound.
    pub fn go_to_next<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
    ) -> bool {
        if state.current_index + 1 >= state.slide_count {
            return false;
        }
        let next = state.current_index + 1;
        self.go_to_slide(state, presenter, next, Some(Entrance::FromRight))
    }

    /// One slide back; no wraparound.
    pub fn go_to_prev<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
    ) -> bool {
        if state.current_index == 0 {
            return false;
        }
        let prev = state.current_index - 1;
        self.go_to_slide(state, presenter, prev, Some(Entrance::FromLeft))
    }

    /// Commit `index` by flag mutation alone, without entrance flags.
    ///
    /// Used after a drag snap, where the motion has already been animated.
    pub fn commit_active<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        index: usize,
    ) {
        if index >= state.slide_count {
            return;
        }
        for slide in 0..state.slide_count {
            for flag in SlideFlag::ENTRANCES {
                presenter.set_slide_flag(slide, flag, false);
            }
            presenter.set_slide_flag(slide, SlideFlag::Active, slide == index);
        }
        tracing::debug!(from = state.current_index, to = index, "commit_active (drag)");
        state.current_index = index;
        self.update_controls(state, presenter);
    }

    /// Refresh dot and arrow state from `current_index`.
    pub fn update_controls<P: Presenter + ?Sized>(&self, state: &CarouselState, presenter: &mut P) {
        self.update_dots(state, presenter);
        self.update_arrows(state, presenter);
    }

    pub fn update_dots<P: Presenter + ?Sized>(&self, state: &CarouselState, presenter: &mut P) {
        for dot in 0..self.controls.dots {
            presenter.set_dot_active(dot, dot == state.current_index);
        }
    }

    /// Disable "previous" at the first slide and "next" at the last.
    pub fn update_arrows<P: Presenter + ?Sized>(&self, state: &CarouselState, presenter: &mut P) {
        if self.controls.prev_arrow {
            presenter.set_arrow_disabled(Arrow::Prev, state.current_index == 0);
        }
        if self.controls.next_arrow {
            presenter.set_arrow_disabled(Arrow::Next, state.current_index >= state.last_index());
        }
    }

    /// Dot click: jump straight to `dot`.
    pub fn go_to_dot<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        dot: usize,
    ) -> bool {
        if dot >= self.controls.dots {
            return false;
        }
        let entrance = Entrance::between(state.current_index, dot);
        self.go_to_slide(state, presenter, dot, Some(entrance))
    }
}
