//! Input handling: maps key/mouse events to carousel input and state mutations.
//!
//! Terminal events are translated into [`InputEvent`]s in document
//! coordinates and dispatched to the carousel.  Default page behaviour
//! (scrolling on the wheel) only runs when the carousel did not prevent it.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use slidedeck::carousel::event::{InputEvent, Key, PointerSource, Propagation};
use slidedeck::carousel::host::{Geometry, Point, Presenter};

use crate::config::Action;
use crate::ui::layout::point_in_rect;

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Deck => handle_deck_key(state, key, Instant::now()),
        ActiveView::Lightbox => handle_lightbox_key(state, key),
    }
}

/// Process a mouse event, dispatching based on the active view.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match state.active_view {
        ActiveView::Deck => handle_deck_mouse(state, mouse, Instant::now()),
        ActiveView::Lightbox => handle_lightbox_mouse(state, mouse, Instant::now()),
    }
}

/// The terminal window lost or regained focus.
pub fn handle_focus(state: &mut AppState, gained: bool) {
    if gained {
        return;
    }
    // A release will never arrive; abandon the gesture.
    if let Some(source) = state.pressed.take() {
        dispatch(state, InputEvent::PointerCancel { source }, Instant::now());
    }
}

fn dispatch(state: &mut AppState, event: InputEvent, now: Instant) -> Propagation {
    state.carousel.dispatch(&mut state.host, event, now)
}

// ── Deck view (configurable bindings) ───────────────────────────

fn handle_deck_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let Some(action) = state.config.match_key(key) else {
        send_key(state, Key::Other, now);
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevSlide => send_key(state, Key::ArrowLeft, now),
        Action::NextSlide => send_key(state, Key::ArrowRight, now),
        Action::Collapse => send_key(state, Key::Escape, now),
        Action::Expand => {
            if !state.carousel.expand(&mut state.host) {
                state.status_message = Some("Already expanded".into());
            }
        }
        Action::ScrollUp => {
            let rows = -i32::from(state.config.scroll_step);
            scroll_page(state, rows, now);
        }
        Action::ScrollDown => {
            let rows = i32::from(state.config.scroll_step);
            scroll_page(state, rows, now);
        }
        Action::FocusWidget => {
            if state.host.focused {
                state.host.focused = false;
            } else {
                state.host.focus_root();
            }
        }
        Action::ToggleLightbox => state.active_view = ActiveView::Lightbox,
        Action::ToggleTheme => toggle_theme(state),
        Action::CyclePalette => cycle_accent(state),
    }
}

fn send_key(state: &mut AppState, key: Key, now: Instant) {
    let within_widget = state.host.focused;
    dispatch(state, InputEvent::Key { key, within_widget }, now);
}

/// Scroll the page and tell the carousel about it.
fn scroll_page(state: &mut AppState, rows: i32, now: Instant) {
    if state.host.scroll_by(rows) {
        dispatch(state, InputEvent::Scroll, now);
    }
}

fn handle_deck_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let (col, row) = (mouse.column, mouse.row);
    let position = state.host.screen_point(col, row);

    match mouse.kind {
        MouseEventKind::Down(button) => {
            if button == MouseButton::Left && handle_status_buttons(state, position, col, row, now)
            {
                return;
            }
            let Some(source) = pointer_source(button) else {
                return;
            };
            // Presses on the status bar are not on the page.
            if state.host.to_doc(col, row).is_none() {
                return;
            }
            state.pressed = Some(source);
            // Focus follows the click, like a page would.
            if state.host.content_contains(position) {
                state.host.focus_root();
            } else {
                state.host.focused = false;
            }
            dispatch(state, InputEvent::PointerDown { source, position }, now);
        }
        MouseEventKind::Drag(_) => {
            if let Some(source) = state.pressed {
                dispatch(state, InputEvent::PointerMove { source, position }, now);
            }
        }
        MouseEventKind::Up(_) => {
            let Some(source) = state.pressed.take() else {
                return;
            };
            dispatch(state, InputEvent::PointerUp { source }, now);
            let target = state.host.hit_control(position);
            dispatch(state, InputEvent::Click { position, target }, now);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let delta_y = if mouse.kind == MouseEventKind::ScrollDown {
                1.0
            } else {
                -1.0
            };
            let propagation = dispatch(
                state,
                InputEvent::Wheel {
                    delta_x: 0.0,
                    delta_y,
                },
                now,
            );
            if !propagation.is_prevented() {
                let rows = i32::from(state.config.scroll_step) * delta_y as i32;
                scroll_page(state, rows, now);
            }
        }
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            let delta_x = if mouse.kind == MouseEventKind::ScrollRight {
                1.0
            } else {
                -1.0
            };
            dispatch(
                state,
                InputEvent::Wheel {
                    delta_x,
                    delta_y: 0.0,
                },
                now,
            );
        }
        MouseEventKind::Moved => {}
    }
}

/// Left button drags as a mouse, right button as a touch.
fn pointer_source(button: MouseButton) -> Option<PointerSource> {
    match button {
        MouseButton::Left => Some(PointerSource::Mouse),
        MouseButton::Right => Some(PointerSource::Touch),
        MouseButton::Middle => None,
    }
}

/// Theme toggle and palette switcher in the status bar.  They sit in
/// exempt overlay regions, so the carousel sees the click but ignores it.
fn handle_status_buttons(
    state: &mut AppState,
    position: Point,
    col: u16,
    row: u16,
    now: Instant,
) -> bool {
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| point_in_rect(r, col, row));
    let theme = hit(state.theme_button);
    let palette = hit(state.palette_button);
    if !theme && !palette {
        return false;
    }

    dispatch(
        state,
        InputEvent::Click {
            position,
            target: None,
        },
        now,
    );
    if theme {
        toggle_theme(state);
    } else {
        cycle_accent(state);
    }
    true
}

fn toggle_theme(state: &mut AppState) {
    state.theme.toggle_palette();
    state.config.light_theme = state.theme.is_light();
    if let Err(err) = state.config.save() {
        tracing::warn!(%err, "failed to save config");
        state.status_message = Some(format!("Could not save config: {err}"));
    }
}

fn cycle_accent(state: &mut AppState) {
    state.theme.accent = state.theme.accent.next();
    state.status_message = Some(format!("Accent: {}", state.theme.accent.label()));
}

// ── Lightbox ────────────────────────────────────────────────────

fn handle_lightbox_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('o') | KeyCode::Enter => {
            state.active_view = ActiveView::Deck;
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            lightbox_prev(state);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            lightbox_next(state);
        }
        _ => {}
    }
}

fn handle_lightbox_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };
    let Some(zones) = state.lightbox_hit_zones else {
        return;
    };
    let (col, row) = (mouse.column, mouse.row);
    if !point_in_rect(zones.area, col, row) {
        return;
    }

    // The overlay is exempt; an expanded panel stays open underneath.
    let position = state.host.screen_point(col, row);
    dispatch(
        state,
        InputEvent::Click {
            position,
            target: None,
        },
        now,
    );

    if point_in_rect(zones.close_rect, col, row) {
        state.active_view = ActiveView::Deck;
    } else if point_in_rect(zones.prev_rect, col, row) {
        lightbox_prev(state);
    } else if point_in_rect(zones.next_rect, col, row) {
        lightbox_next(state);
    }
}

fn lightbox_prev(state: &mut AppState) {
    let current = state.carousel.current_index();
    if current > 0 {
        state.carousel.go_to_slide(&mut state.host, current - 1);
    }
}

fn lightbox_next(state: &mut AppState) {
    let current = state.carousel.current_index();
    state.carousel.go_to_slide(&mut state.host, current + 1);
}
