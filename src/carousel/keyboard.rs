//! Keyboard navigation.
//!
//! Two listeners with different scopes: Escape is page-wide and collapses an
//! expanded widget; arrow keys only count while focus is inside the widget.
//! Collapsing is delegated back to the caller so this module never needs the
//! expand component.

use super::event::{Key, Propagation};
use super::host::Presenter;
use super::listeners::{ListenerId, Listeners};
use super::navigation::Navigation;
use super::state::CarouselState;
use super::util::Teardown;

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Moved,
    Collapse,
}

/// Keyboard component.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardNavigation;

impl KeyboardNavigation {
    pub fn new() -> Self {
        Self
    }

    pub fn attach(&self, listeners: &Listeners) -> Teardown {
        listeners.register(&[ListenerId::GlobalKey, ListenerId::WidgetKey])
    }

    /// Page-wide handler: Escape collapses an expanded widget.
    pub fn on_global_key(&self, state: &CarouselState, key: Key) -> (KeyAction, Propagation) {
        if key == Key::Escape && state.is_expanded() {
            (KeyAction::Collapse, Propagation::PreventDefault)
        } else {
            (KeyAction::None, Propagation::Continue)
        }
    }

    /// Widget-scoped handler: arrows move while expanded.
    pub fn on_widget_key<P: Presenter + ?Sized>(
        &self,
        state: &mut CarouselState,
        presenter: &mut P,
        nav: &Navigation,
        key: Key,
    ) -> (KeyAction, Propagation) {
        if !state.is_expanded() {
            return (KeyAction::None, Propagation::Continue);
        }
        let moved = match key {
            Key::ArrowLeft => nav.go_to_prev(state, presenter),
            Key::ArrowRight => nav.go_to_next(state, presenter),
            Key::Escape | Key::Other => false,
        };
        if moved {
            (KeyAction::Moved, Propagation::PreventDefault)
        } else {
            (KeyAction::None, Propagation::Continue)
        }
    }
}
