//! Full-screen slide lightbox overlay.
//!
//! Shows the current slide large and centred on the terminal with
//! navigation arrows, a close button, and a position indicator ("3 / 7").
//! The carousel treats the whole overlay as exempt from outside clicks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::app::slides::Slide;

use super::theme::Theme;

pub struct LightboxWidget<'a> {
    pub slide: Option<&'a Slide>,
    /// Zero-based index of `slide`.
    pub index: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

/// Clickable regions returned after rendering, for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct LightboxHitZones {
    /// The whole overlay, border included.
    pub area: Rect,
    pub close_rect: Rect,
    pub prev_rect: Rect,
    pub next_rect: Rect,
}

impl<'a> LightboxWidget<'a> {
    /// Centred, 80% of the terminal.
    fn overlay_area(terminal: Rect) -> Rect {
        let margin_x = (terminal.width as f32 * 0.1).round() as u16;
        let margin_y = (terminal.height as f32 * 0.1).round() as u16;
        Rect::new(
            terminal.x + margin_x,
            terminal.y + margin_y,
            terminal.width.saturating_sub(margin_x * 2).max(20),
            terminal.height.saturating_sub(margin_y * 2).max(8),
        )
        .intersection(terminal)
    }

    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, terminal_area: Rect, buf: &mut Buffer) -> LightboxHitZones {
        let area = Self::overlay_area(terminal_area);
        Clear.render(area, buf);

        let title = match self.slide {
            Some(slide) => format!(" {}  {}/{} ", slide.title, self.index + 1, self.total),
            None => " No slides ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.lightbox_border_style())
            .style(self.theme.page_style())
            .title(Span::styled(title, self.theme.slide_title_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        // Close button [X] on the top-right corner of the border.
        let close_rect = Rect::new(area.x + area.width.saturating_sub(5), area.y, 3, 1);
        Paragraph::new(Line::from(Span::styled("[X]", self.theme.button_style())))
            .render(close_rect, buf);

        // Navigation arrows on the left/right edges (vertically centred).
        let arrow_y = area.y + area.height / 2;
        let prev_rect = Rect::new(area.x, arrow_y, 3, 1);
        let next_rect = Rect::new(area.x + area.width.saturating_sub(3), arrow_y, 3, 1);

        if self.index > 0 {
            Paragraph::new(Line::from(Span::styled(" ◀", self.theme.arrow_style(false))))
                .render(prev_rect, buf);
        }
        if self.index + 1 < self.total {
            Paragraph::new(Line::from(Span::styled("▶ ", self.theme.arrow_style(false))))
                .render(next_rect, buf);
        }

        if let Some(slide) = self.slide {
            let text_area = Rect::new(
                inner.x.saturating_add(4),
                inner.y.saturating_add(1),
                inner.width.saturating_sub(8),
                inner.height.saturating_sub(2), // leave 1 row for footer
            );
            let lines: Vec<Line> = slide
                .body
                .iter()
                .map(|l| Line::from(Span::styled(l.as_str(), self.theme.slide_text_style())))
                .collect();
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(text_area, buf);
        }

        let footer = Line::from(Span::styled(
            " ←/→ navigate   Esc close ",
            self.theme.page_muted_style(),
        ));
        let footer_y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(footer).render(Rect::new(inner.x, footer_y, inner.width, 1), buf);

        LightboxHitZones {
            area,
            close_rect,
            prev_rect,
            next_rect,
        }
    }
}
