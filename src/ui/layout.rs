//! Layout helpers: split the terminal, and place the carousel on the page.
//!
//! The page is a tall document rendered off-screen and shown through a
//! scrolled window.  Everything in [`PageLayout`] is in document
//! coordinates: column from the left edge of the page area, row from the
//! top of the document.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of page text above the carousel.
pub const INTRO_ROWS: u16 = 7;
/// Rows of page text below it, enough to scroll a dismissal through.
pub const OUTRO_ROWS: u16 = 60;
/// Height of the compact inline card.
pub const INLINE_ROWS: u16 = 9;
/// Border (2) + navigation row (1) + breathing room (2).
pub const PANEL_CHROME: u16 = 5;
/// Widest the inline card gets.
const INLINE_MAX_WIDTH: u16 = 72;

/// Primary screen layout with the page and a bottom status bar.
pub struct AppLayout {
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            page_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Carousel placement in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub doc_height: u16,
    /// The whole widget, border included.
    pub panel: Rect,
    /// Where slides are drawn and drags start.
    pub track: Rect,
    /// Arrows and dots.
    pub nav_row: Rect,
}

impl PageLayout {
    pub fn compute(width: u16, panel_height: u16, expanded: bool) -> Self {
        let panel_height = panel_height.max(3);
        let panel_width = if expanded {
            width
        } else {
            width.min(INLINE_MAX_WIDTH)
        };
        let panel_x = (width - panel_width) / 2;
        let panel = Rect::new(panel_x, INTRO_ROWS, panel_width, panel_height);

        let inner = Rect::new(
            panel.x.saturating_add(1),
            panel.y.saturating_add(1),
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );
        let track_height = inner.height.saturating_sub(1);
        let track = Rect::new(inner.x, inner.y, inner.width, track_height);
        let nav_row = Rect::new(
            inner.x,
            inner.y + track_height,
            inner.width,
            inner.height.min(1),
        );

        Self {
            width,
            doc_height: INTRO_ROWS + panel_height + OUTRO_ROWS,
            panel,
            track,
            nav_row,
        }
    }

    /// Document area as a rect anchored at the origin.
    pub fn doc_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.doc_height)
    }
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
