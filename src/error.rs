//! Error types for carousel initialization.
//!
//! Runtime operations never fail; out-of-range requests degrade to no-ops.
//! Only attaching a carousel to a host can be refused.

use thiserror::Error;

/// Errors that can occur while attaching a carousel to its host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// The host exposes no slides, so there is nothing to navigate.
    #[error("carousel has no slides")]
    NoSlides,

    /// A configuration value is outside its accepted range.
    #[error("invalid carousel config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

/// Result type alias for carousel setup.
pub type CarouselResult<T> = Result<T, CarouselError>;
