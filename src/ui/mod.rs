//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads the terminal host's presented state and turns it into
//! cells on the terminal.  No carousel logic happens here.

pub mod deck;
pub mod layout;
pub mod lightbox;
pub mod motion;
pub mod status;
pub mod theme;
