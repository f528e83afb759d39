//! Input events consumed by the carousel.
//!
//! Hosts translate their native events into [`InputEvent`] and feed them to
//! [`Carousel::dispatch`](super::controller::Carousel::dispatch).

use super::host::Point;

/// Where a pointer event came from.  Both share the same drag logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    /// Touch listeners are passive: they never prevent default scrolling.
    Touch,
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Control handles that respond to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Dot(usize),
    PrevArrow,
    NextArrow,
    ExpandTrigger,
    CollapseTrigger,
}

/// High-level events from the five input sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        source: PointerSource,
        position: Point,
    },
    PointerMove {
        source: PointerSource,
        position: Point,
    },
    PointerUp {
        source: PointerSource,
    },
    PointerCancel {
        source: PointerSource,
    },
    Wheel {
        delta_x: f64,
        delta_y: f64,
    },
    Key {
        key: Key,
        /// `true` when focus is inside the widget.
        within_widget: bool,
    },
    /// The page scrolled; the new offset is read from the host.
    Scroll,
    Click {
        position: Point,
        /// Control under the click, if the host's hit test found one.
        target: Option<Control>,
    },
}

/// Whether the host should still run its default behavior for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    PreventDefault,
}

impl Propagation {
    pub fn is_prevented(self) -> bool {
        self == Propagation::PreventDefault
    }
}
