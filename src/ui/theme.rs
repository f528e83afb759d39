//! Colour palettes and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Dark,
    Light,
}

/// Highlight colour, cycled by the palette switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Magenta,
    Green,
}

impl Accent {
    pub fn next(self) -> Self {
        match self {
            Accent::Cyan => Accent::Magenta,
            Accent::Magenta => Accent::Green,
            Accent::Green => Accent::Cyan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Magenta => "magenta",
            Accent::Green => "green",
        }
    }
}

/// Central theme: change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub accent: Accent,
}

impl Theme {
    pub fn new(light: bool) -> Self {
        Self {
            palette: if light { Palette::Light } else { Palette::Dark },
            accent: Accent::Cyan,
        }
    }

    pub fn toggle_palette(&mut self) {
        self.palette = match self.palette {
            Palette::Dark => Palette::Light,
            Palette::Light => Palette::Dark,
        };
    }

    pub fn is_light(&self) -> bool {
        self.palette == Palette::Light
    }

    fn fg(&self) -> Color {
        match self.palette {
            Palette::Dark => Color::White,
            Palette::Light => Color::Black,
        }
    }

    fn bg(&self) -> Color {
        match self.palette {
            Palette::Dark => Color::Reset,
            Palette::Light => Color::Rgb(246, 244, 238),
        }
    }

    fn muted(&self) -> Color {
        match self.palette {
            Palette::Dark => Color::DarkGray,
            Palette::Light => Color::Gray,
        }
    }

    fn accent_color(&self) -> Color {
        match (self.accent, self.palette) {
            (Accent::Cyan, Palette::Dark) => Color::Cyan,
            (Accent::Cyan, Palette::Light) => Color::Blue,
            (Accent::Magenta, _) => Color::Magenta,
            (Accent::Green, Palette::Dark) => Color::Green,
            (Accent::Green, Palette::Light) => Color::Rgb(0, 120, 60),
        }
    }

    // ── page ───────────────────────────────────────────────────
    pub fn page_style(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    pub fn page_muted_style(&self) -> Style {
        self.page_style().fg(self.muted())
    }

    // ── slides ─────────────────────────────────────────────────
    pub fn slide_title_style(&self) -> Style {
        self.page_style()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn slide_text_style(&self) -> Style {
        self.page_style()
    }

    /// Style patch for a slide drawn at `opacity`, or `None` when it is
    /// too faint to draw at all.
    pub fn opacity_patch(&self, opacity: f64) -> Option<Style> {
        if opacity < 0.05 {
            None
        } else if opacity < 0.4 {
            Some(Style::default().fg(self.muted()).add_modifier(Modifier::DIM))
        } else if opacity < 0.8 {
            Some(Style::default().add_modifier(Modifier::DIM))
        } else {
            Some(Style::default())
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self) -> Style {
        self.page_style().fg(self.muted())
    }

    pub fn focused_border_style(&self) -> Style {
        self.page_style().fg(self.accent_color())
    }

    pub fn dismissing_border_style(&self) -> Style {
        self.page_style().fg(Color::Yellow)
    }

    pub fn dot_style(&self, active: bool) -> Style {
        if active {
            self.page_style().fg(self.accent_color())
        } else {
            self.page_muted_style()
        }
    }

    pub fn arrow_style(&self, disabled: bool) -> Style {
        if disabled {
            self.page_muted_style().add_modifier(Modifier::DIM)
        } else {
            self.page_style().add_modifier(Modifier::BOLD)
        }
    }

    pub fn button_style(&self) -> Style {
        self.page_style()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        match self.palette {
            Palette::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
            Palette::Light => Style::default().bg(Color::Gray).fg(Color::Black),
        }
    }

    pub fn lightbox_border_style(&self) -> Style {
        Style::default().fg(self.accent_color())
    }
}
