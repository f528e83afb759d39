//! Terminal playground: state management, host adapter and input handling.

pub mod event;
pub mod handler;
pub mod host;
pub mod slides;
pub mod state;
