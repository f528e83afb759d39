//! Interaction controller for a multi-mode carousel widget.
//!
//! The [`carousel`] module is the headless core: one shared
//! [`CarouselState`](carousel::state::CarouselState) mutated by five input
//! components (drag, wheel, keyboard, click, scroll).  Rendering is left to
//! whatever implements [`Host`](carousel::host::Host).

pub mod carousel;
pub mod error;

pub use carousel::controller::Carousel;
pub use carousel::config::CarouselConfig;
pub use error::CarouselError;
