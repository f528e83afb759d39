//! Bottom status bar with the theme toggle and palette switcher buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::Theme;

pub struct StatusBar<'a> {
    pub text: &'a str,
    pub theme: &'a Theme,
}

/// Button positions in screen coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusHitZones {
    pub theme_button: Option<Rect>,
    pub palette_button: Option<Rect>,
}

impl<'a> StatusBar<'a> {
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> StatusHitZones {
        Paragraph::new(self.text)
            .style(self.theme.status_bar_style())
            .render(area, buf);

        let theme_label = if self.theme.is_light() {
            " [dark] "
        } else {
            " [light] "
        };
        let palette_label = format!(" [{}] ", self.theme.accent.label());

        let theme_width = theme_label.chars().count() as u16;
        let palette_width = palette_label.chars().count() as u16;
        if area.width < theme_width + palette_width + 10 {
            return StatusHitZones::default();
        }

        let right = area.x + area.width;
        let palette_button = Rect::new(right - palette_width, area.y, palette_width, 1);
        let theme_button = Rect::new(palette_button.x - theme_width, area.y, theme_width, 1);

        let style = self.theme.status_bar_style();
        Line::from(Span::styled(theme_label, style)).render(theme_button, buf);
        Line::from(Span::styled(palette_label, style)).render(palette_button, buf);

        StatusHitZones {
            theme_button: Some(theme_button),
            palette_button: Some(palette_button),
        }
    }
}
