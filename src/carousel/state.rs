//! Central carousel state.
//!
//! One [`CarouselState`] exists per widget and every input component takes
//! it as `&mut`.  Drag and display modes are explicit state machines rather
//! than loose booleans:
//!
//! ```text
//! drag:    Idle -> Dragging -> {Snapping | Reverting} -> Idle
//! display: Collapsed -> Expanding -> Expanded <-> Dismissing -> Collapsed
//! ```

use std::time::Instant;

/// Slide previewed next to the current one during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent {
    pub index: usize,
    /// Off-screen start offset: `+track_width` enters from the right,
    /// `-track_width` from the left.
    pub start_offset: f64,
}

/// Pointer-gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down and tracking.
    Dragging {
        start_x: f64,
        current_x: f64,
        adjacent: Option<Adjacent>,
    },
    /// Released past the threshold; `to` becomes current once settled.
    Snapping { from: usize, to: Adjacent },
    /// Released short of the threshold; slides animate back.
    Reverting { adjacent: Option<Adjacent> },
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// `true` while a release animation waits for its settle timer.
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Snapping { .. } | Self::Reverting { .. })
    }

    pub fn adjacent(&self) -> Option<Adjacent> {
        match *self {
            Self::Dragging { adjacent, .. } | Self::Reverting { adjacent } => adjacent,
            Self::Snapping { to, .. } => Some(to),
            Self::Idle => None,
        }
    }
}

/// Collapsed / expanded display state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayMode {
    #[default]
    Collapsed,
    /// Expanded flag is set but the content height is not yet measured.
    Expanding { scroll_start_y: f64 },
    Expanded {
        scroll_start_y: f64,
        track_height: f64,
    },
    /// Scrolling past the panel is shrinking it toward collapse.
    Dismissing {
        scroll_start_y: f64,
        track_height: f64,
    },
}

impl DisplayMode {
    pub fn is_expanded(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }

    pub fn scroll_start_y(&self) -> Option<f64> {
        match *self {
            Self::Expanding { scroll_start_y }
            | Self::Expanded { scroll_start_y, .. }
            | Self::Dismissing { scroll_start_y, .. } => Some(scroll_start_y),
            Self::Collapsed => None,
        }
    }

    pub fn track_height(&self) -> Option<f64> {
        match *self {
            Self::Expanded { track_height, .. } | Self::Dismissing { track_height, .. } => {
                Some(track_height)
            }
            Self::Collapsed | Self::Expanding { .. } => None,
        }
    }
}

/// The single source of truth shared by every input component.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Committed active slide; always `< slide_count`.
    pub current_index: usize,
    /// Fixed at construction.
    pub slide_count: usize,
    pub drag: DragPhase,
    /// Set at drag start, cleared by a cooldown timer after release so the
    /// release's synthetic click is not read as an outside click.
    pub was_dragging: bool,
    pub display: DisplayMode,
    /// Last accepted wheel step.
    pub last_wheel_time: Option<Instant>,
    /// Monotonic gesture generation; scheduled tasks compare against it.
    pub generation: u64,
    /// Number of expansions so far; identifies the current one.
    pub expansions: u64,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_index: 0,
            slide_count,
            drag: DragPhase::Idle,
            was_dragging: false,
            display: DisplayMode::Collapsed,
            last_wheel_time: None,
            generation: 0,
            expansions: 0,
        }
    }

    /// Start a new gesture generation and return it.
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    pub fn is_expanded(&self) -> bool {
        self.display.is_expanded()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    pub fn adjacent_index(&self) -> Option<usize> {
        self.drag.adjacent().map(|a| a.index)
    }

    pub fn start_x(&self) -> Option<f64> {
        match self.drag {
            DragPhase::Dragging { start_x, .. } => Some(start_x),
            _ => None,
        }
    }

    pub fn current_x(&self) -> Option<f64> {
        match self.drag {
            DragPhase::Dragging { current_x, .. } => Some(current_x),
            _ => None,
        }
    }

    pub fn scroll_start_y(&self) -> Option<f64> {
        self.display.scroll_start_y()
    }

    pub fn is_scroll_dismissing(&self) -> bool {
        matches!(self.display, DisplayMode::Dismissing { .. })
    }

    pub fn expanded_track_height(&self) -> Option<f64> {
        self.display.track_height()
    }
}
