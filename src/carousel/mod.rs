//! Carousel core: state, input components and the orchestrator.
//!
//! Nothing in this module depends on a rendering crate.  The host reports
//! geometry and applies visual effects through the traits in [`host`];
//! every component reads and writes the same [`state::CarouselState`].
//!
//! Control flow: [`controller::Carousel::attach`] builds the state, wires
//! [`navigation`] and [`expand`], registers the drag, wheel and keyboard
//! listeners, and hands back one composed [`util::Teardown`].

pub mod config;
pub mod controller;
pub mod drag;
pub mod event;
pub mod expand;
pub mod host;
pub mod keyboard;
pub mod listeners;
pub mod navigation;
pub mod schedule;
pub mod state;
pub mod util;
pub mod wheel;

#[cfg(test)]
pub(crate) mod test_host;
