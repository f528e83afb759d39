//! Per-widget listener registry.
//!
//! Components register the listeners they need and get back a [`Teardown`]
//! that removes exactly those.  Registering an id twice is refused, so
//! re-initializing a component never doubles a listener.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::event::{InputEvent, PointerSource};
use super::util::Teardown;

/// Named listener slots, one per (component, event source) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerId {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    Wheel,
    /// Escape anywhere on the page.
    GlobalKey,
    /// Arrow keys while focus is inside the widget.
    WidgetKey,
    Scroll,
    ClickOutside,
    ControlClick,
}

impl ListenerId {
    /// The slot that receives a pointer event from `source`.
    pub fn for_pointer(event: &InputEvent) -> Option<Self> {
        let id = match *event {
            InputEvent::PointerDown { source, .. } => match source {
                PointerSource::Mouse => Self::PointerDown,
                PointerSource::Touch => Self::TouchStart,
            },
            InputEvent::PointerMove { source, .. } => match source {
                PointerSource::Mouse => Self::PointerMove,
                PointerSource::Touch => Self::TouchMove,
            },
            InputEvent::PointerUp { source } | InputEvent::PointerCancel { source } => {
                match source {
                    PointerSource::Mouse => Self::PointerUp,
                    PointerSource::Touch => Self::TouchEnd,
                }
            }
            _ => return None,
        };
        Some(id)
    }
}

#[derive(Debug, Default)]
struct Registry {
    active: HashSet<ListenerId>,
    detached: bool,
}

/// Shared handle to one widget's registry.  Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ids`, skipping any already present.  The returned teardown
    /// removes only the ids this call added.
    pub fn register(&self, ids: &[ListenerId]) -> Teardown {
        let mut added = Vec::with_capacity(ids.len());
        {
            let mut registry = self.inner.borrow_mut();
            for &id in ids {
                if registry.active.insert(id) {
                    added.push(id);
                } else {
                    tracing::warn!(?id, "listener already registered; skipping");
                }
            }
        }
        if added.is_empty() {
            return Teardown::noop();
        }
        let inner = Rc::clone(&self.inner);
        Teardown::new(move || {
            let mut registry = inner.borrow_mut();
            for id in added {
                registry.active.remove(&id);
            }
        })
    }

    /// Teardown that marks the whole widget as detached, so pending
    /// scheduled work is dropped instead of applied.
    pub fn detacher(&self) -> Teardown {
        let inner = Rc::clone(&self.inner);
        Teardown::new(move || inner.borrow_mut().detached = true)
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        let registry = self.inner.borrow();
        !registry.detached && registry.active.contains(&id)
    }

    pub fn is_detached(&self) -> bool {
        self.inner.borrow().detached
    }

    pub fn count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}
