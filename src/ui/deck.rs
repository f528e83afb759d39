//! Renders the page with the carousel embedded in it.
//!
//! The whole document is drawn into an off-screen buffer in document
//! coordinates, then the scrolled window is copied into the frame.  Slides
//! are drawn at their animated pose: shifted by whole columns and dimmed by
//! opacity, clipped to the track.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use slidedeck::carousel::host::Geometry;

use crate::app::host::{DeckZones, TerminalHost};
use crate::app::slides::Slide;

use super::theme::Theme;

const INTRO: [&str; 3] = [
    "Click the card (or press Tab) to focus it, then e or [expand] to open it.",
    "Expanded: drag with the left button, right button drags as touch, wheel and arrows step.",
    "Esc closes. Scrolling the page down while expanded shrinks and then dismisses the panel.",
];

pub struct DeckWidget<'a> {
    pub host: &'a TerminalHost,
    pub slides: &'a [Slide],
    pub theme: &'a Theme,
    pub now: Instant,
}

impl<'a> DeckWidget<'a> {
    /// Render into `page_area` and return the control zones (document
    /// coordinates) for hit-testing.
    pub fn render_and_hit(self, page_area: Rect, buf: &mut Buffer) -> DeckZones {
        let layout = self.host.layout;
        let mut doc = Buffer::empty(layout.doc_area());
        doc.set_style(doc.area, self.theme.page_style());

        self.render_page_text(&mut doc);
        let zones = self.render_panel(&mut doc);
        self.render_slides(&mut doc);

        // Copy the visible window.
        let scroll = self.host.scroll_row();
        for row in 0..page_area.height {
            let doc_y = scroll.saturating_add(row);
            if doc_y >= layout.doc_height {
                break;
            }
            for col in 0..page_area.width.min(layout.width) {
                let Some(src) = doc.cell((col, doc_y)) else {
                    continue;
                };
                if let Some(dst) = buf.cell_mut((page_area.x + col, page_area.y + row)) {
                    *dst = src.clone();
                }
            }
        }

        zones
    }

    // ───────────────────────────────────────── page ─────────────

    fn render_page_text(&self, doc: &mut Buffer) {
        let width = doc.area.width;
        doc.set_stringn(
            2,
            1,
            "slidedeck playground",
            width.saturating_sub(2) as usize,
            self.theme.slide_title_style(),
        );
        for (i, line) in INTRO.iter().enumerate() {
            doc.set_stringn(
                2,
                3 + i as u16,
                line,
                width.saturating_sub(2) as usize,
                self.theme.page_muted_style(),
            );
        }

        let panel = self.host.layout.panel;
        let start = panel.y + panel.height + 1;
        let mut paragraph = 1;
        for y in (start..doc.area.height).step_by(3) {
            let text = format!(
                "Paragraph {paragraph}. Page content keeps going below the carousel so there is room to scroll."
            );
            doc.set_stringn(
                2,
                y,
                text,
                width.saturating_sub(2) as usize,
                self.theme.page_muted_style(),
            );
            paragraph += 1;
        }
    }

    // ───────────────────────────────────────── chrome ───────────

    fn render_panel(&self, doc: &mut Buffer) -> DeckZones {
        let host = self.host;
        let layout = host.layout;
        let panel = layout.panel;
        let controls = host.controls();
        let mut zones = DeckZones::default();

        let border_style = if host.dismissing {
            self.theme.dismissing_border_style()
        } else if host.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let current = host.slides.iter().position(|s| s.active).unwrap_or(0);
        let title = format!(" Slide {}/{} ", current + 1, host.slides.len());

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(title, self.theme.slide_title_style()))
            .render(panel, doc);

        // Trigger on the top border, right-aligned.
        let (label, show) = if host.expanded {
            ("[x]", controls.collapse_trigger)
        } else {
            ("[expand]", controls.expand_trigger)
        };
        let label_width = label.len() as u16;
        if show && panel.width > label_width + 4 {
            let rect = Rect::new(
                panel.x + panel.width - label_width - 2,
                panel.y,
                label_width,
                1,
            );
            doc.set_string(rect.x, rect.y, label, self.theme.button_style());
            if host.expanded {
                zones.collapse = Some(rect);
            } else {
                zones.expand = Some(rect);
            }
        }

        self.render_nav_row(doc, &mut zones);
        zones
    }

    fn render_nav_row(&self, doc: &mut Buffer, zones: &mut DeckZones) {
        let host = self.host;
        let nav = host.layout.nav_row;
        if nav.height == 0 {
            return;
        }
        let controls = host.controls();

        let arrows = u16::from(controls.prev_arrow) * 3 + u16::from(controls.next_arrow) * 3;
        let dots = u16::try_from(controls.dots).unwrap_or(u16::MAX).saturating_mul(2);
        let total = arrows.saturating_add(dots);
        let right = nav.x + nav.width;
        let mut x = nav.x + nav.width.saturating_sub(total) / 2;

        let put = |doc: &mut Buffer, x: u16, symbol: &str, style: Style| -> Option<Rect> {
            if x >= right {
                return None;
            }
            doc.set_string(x, nav.y, symbol, style);
            Some(Rect::new(x, nav.y, 1, 1))
        };

        if controls.prev_arrow {
            zones.prev = put(doc, x, "◀", self.theme.arrow_style(host.prev_disabled));
            x = x.saturating_add(3);
        }
        for &active in host.dots.iter().take(controls.dots) {
            let symbol = if active { "●" } else { "○" };
            if let Some(rect) = put(doc, x, symbol, self.theme.dot_style(active)) {
                zones.dots.push(rect);
            }
            x = x.saturating_add(2);
        }
        if controls.next_arrow {
            x = x.saturating_add(1);
            zones.next = put(doc, x, "▶", self.theme.arrow_style(host.next_disabled));
        }
    }

    // ───────────────────────────────────────── slides ───────────

    fn render_slides(&self, doc: &mut Buffer) {
        let track = self.host.layout.track;
        if track.width == 0 || track.height == 0 {
            return;
        }

        let mut order: Vec<usize> = (0..self.host.slides.len())
            .filter(|&i| self.host.slides[i].is_visible())
            .collect();
        order.sort_by_key(|&i| self.host.slides[i].z_index());

        for index in order {
            let visual = &self.host.slides[index];
            let pose = visual.motion.pose_at(self.now);
            let Some(patch) = self.theme.opacity_patch(pose.opacity) else {
                continue;
            };
            let Some(slide) = self.slides.get(index) else {
                continue;
            };

            let mut card = Buffer::empty(Rect::new(0, 0, track.width, track.height));
            self.slide_paragraph(slide).render(card.area, &mut card);

            let dx = pose.translate_x.round() as i32;
            for y in 0..track.height {
                for x in 0..track.width {
                    let Some(cell) = card.cell((x, y)) else {
                        continue;
                    };
                    if cell.symbol() == " " {
                        continue;
                    }
                    let tx = i32::from(track.x) + i32::from(x) + dx;
                    if tx < i32::from(track.x) || tx >= i32::from(track.x + track.width) {
                        continue;
                    }
                    if let Some(dst) = doc.cell_mut((tx as u16, track.y + y)) {
                        *dst = cell.clone();
                        dst.set_style(patch);
                    }
                }
            }
        }
    }

    fn slide_paragraph(&self, slide: &'a Slide) -> Paragraph<'a> {
        let mut lines = vec![
            Line::from(Span::styled(slide.title.as_str(), self.theme.slide_title_style())),
            Line::default(),
        ];
        lines.extend(
            slide
                .body
                .iter()
                .map(|l| Line::from(Span::styled(l.as_str(), self.theme.slide_text_style()))),
        );
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}
