//! Terminal playground for the slidedeck carousel.
//!
//! Run the binary to browse a deck inline on a scrollable page.  Pass a
//! file to load slides from it (separated by `---` lines), or `--slides N`
//! for a generated deck.

mod app;
mod config;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use slidedeck::carousel::host::Overlay;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    slides,
    state::{ActiveView, AppState},
};
use crate::ui::{deck::DeckWidget, layout::AppLayout, lightbox::LightboxWidget, status::StatusBar};

/// Animation frame pacing.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Carousel playground in the terminal")]
struct Cli {
    /// Slide deck file (slides separated by `---` lines).
    path: Option<PathBuf>,

    /// Number of generated slides when no file is given.
    #[arg(long, default_value_t = 5)]
    slides: usize,

    /// Open expanded, as if the page was reached through the deep link.
    #[arg(long)]
    expanded: bool,

    /// Minimum gap between accepted wheel steps, in milliseconds.
    #[arg(long)]
    gesture_gap_ms: Option<u64>,

    /// Snap / revert animation length, in milliseconds.
    #[arg(long)]
    animation_ms: Option<u64>,

    /// Start with the light palette.
    #[arg(long)]
    light: bool,
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let layout = AppLayout::from_area(area);
    state.host.relayout(layout.page_area);

    let zones = DeckWidget {
        host: &state.host,
        slides: &state.slides,
        theme: &state.theme,
        now: Instant::now(),
    }
    .render_and_hit(layout.page_area, frame.buffer_mut());
    state.host.zones = zones;

    let hint = state.config.status_bar_hint();
    let status = StatusBar {
        text: state.status_message.as_deref().unwrap_or(&hint),
        theme: &state.theme,
    }
    .render_and_hit(layout.status_area, frame.buffer_mut());
    state.theme_button = status.theme_button;
    state.palette_button = status.palette_button;

    state.host.overlays.clear();
    if let Some(rect) = status.theme_button {
        state.host.overlays.push((Overlay::ThemeToggle, rect));
    }
    if let Some(rect) = status.palette_button {
        state.host.overlays.push((Overlay::PaletteSwitcher, rect));
    }

    state.lightbox_hit_zones = match state.active_view {
        ActiveView::Lightbox => {
            let zones = LightboxWidget {
                slide: state.current_slide(),
                index: state.carousel.current_index(),
                total: state.slides.len(),
                theme: &state.theme,
            }
            .render_and_hit(area, frame.buffer_mut());
            state.host.overlays.push((Overlay::Lightbox, zones.area));
            Some(zones)
        }
        ActiveView::Deck => None,
    };
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(FRAME_INTERVAL);
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, state))?;
        }

        // After-frame work sees the layout that was just drawn; whatever it
        // changes is presented on the next pass.
        dirty = state.carousel.on_frame(&mut state.host, Instant::now()) > 0;
        state.drain_notifications();

        let Some(event) = events.recv().await else {
            break;
        };
        dirty |= match event {
            AppEvent::Key(k) => {
                handler::handle_key(state, k);
                true
            }
            AppEvent::Mouse(m) => {
                handler::handle_mouse(state, m);
                true
            }
            AppEvent::Focus(gained) => {
                handler::handle_focus(state, gained);
                true
            }
            AppEvent::Resize(_, _) => true,
            AppEvent::Tick => state.host.is_animating(Instant::now()),
        };

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut user_config = config::AppConfig::load();
    if let Some(gap) = cli.gesture_gap_ms {
        user_config.gesture_gap_ms = gap;
    }
    if let Some(ms) = cli.animation_ms {
        user_config.animation_ms = ms;
    }
    if cli.light {
        user_config.light_theme = true;
    }

    let deck = match &cli.path {
        Some(path) => slides::load(path)?,
        None => slides::demo(cli.slides),
    };

    // Attach before touching the terminal so errors print normally.
    let (width, height) = crossterm::terminal::size()?;
    let page_area = AppLayout::from_area(Rect::new(0, 0, width, height)).page_area;
    let mut state = AppState::new(deck, user_config, cli.expanded, page_area)?;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    state.tear_down();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}
