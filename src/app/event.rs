//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The terminal window gained (`true`) or lost focus.
    Focus(bool),
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
///
/// `tick_rate` also paces animation: a tick arrives whenever nothing else
/// happened for that long.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let has_event = event::poll(tick_rate).unwrap_or(false);
            let app_event = if has_event {
                match event::read() {
                    // Key releases only arrive with enhanced keyboard
                    // reporting; the deck acts on presses.
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Release => continue,
                    Ok(CtEvent::Key(k)) => AppEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
                    Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(CtEvent::FocusGained) => AppEvent::Focus(true),
                    Ok(CtEvent::FocusLost) => AppEvent::Focus(false),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::warn!(%err, "terminal event read failed");
                        continue;
                    }
                }
            } else {
                AppEvent::Tick
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
