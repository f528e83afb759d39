//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Duration;

use anyhow::Context;
use ratatui::layout::Rect;
use slidedeck::carousel::event::PointerSource;
use slidedeck::carousel::host::Notification;
use slidedeck::carousel::util::Teardown;
use slidedeck::Carousel;

use crate::config::AppConfig;
use crate::ui::lightbox::LightboxHitZones;
use crate::ui::theme::Theme;

use super::host::TerminalHost;
use super::slides::Slide;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Deck,
    Lightbox,
}

/// Top-level application state.
pub struct AppState {
    pub carousel: Carousel,
    /// Terminal side of the carousel: geometry and presented visuals.
    pub host: TerminalHost,
    /// Detaches the carousel on exit.
    pub teardown: Option<Teardown>,
    pub slides: Vec<Slide>,
    /// User-configurable keybindings and timings.
    pub config: AppConfig,
    pub theme: Theme,
    pub active_view: ActiveView,
    /// Filled by the renderer each frame while the lightbox is shown.
    pub lightbox_hit_zones: Option<LightboxHitZones>,
    /// Status bar buttons in screen coordinates, filled by the renderer.
    pub theme_button: Option<Rect>,
    pub palette_button: Option<Rect>,
    /// Button currently held down, so moves and releases go to the same
    /// pointer stream.
    pub pressed: Option<PointerSource>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the host for `slides` and attach a carousel to it.
    pub fn new(
        slides: Vec<Slide>,
        config: AppConfig,
        deep_link: bool,
        page_area: Rect,
    ) -> anyhow::Result<Self> {
        let rows = slides.iter().map(Slide::natural_rows).collect();
        let mut host = TerminalHost::new(
            rows,
            deep_link,
            Duration::from_millis(config.animation_ms),
            page_area,
        );
        let (carousel, teardown) = Carousel::attach(&mut host, config.carousel_config())
            .context("attaching the carousel")?;
        tracing::info!(slides = slides.len(), deep_link, "carousel attached");

        Ok(Self {
            carousel,
            host,
            teardown: Some(teardown),
            slides,
            theme: Theme::new(config.light_theme),
            config,
            active_view: ActiveView::Deck,
            lightbox_hit_zones: None,
            theme_button: None,
            palette_button: None,
            pressed: None,
            should_quit: false,
            status_message: None,
        })
    }

    /// Detach every carousel listener.  Safe to call more than once.
    pub fn tear_down(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown.run();
            tracing::info!("carousel detached");
        }
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.carousel.current_index())
    }

    /// Surface host notifications in the status bar.
    pub fn drain_notifications(&mut self) {
        for notification in self.host.announcements.drain(..) {
            let message = match notification {
                Notification::Expanded => "Panel expanded: drag, wheel or arrows to browse",
            };
            self.status_message = Some(message.to_string());
        }
    }
}
