//! Single test binary entry point.
//!
//! - scenarios: end-to-end walks through navigation, drag, wheel and scroll
//! - lifecycle: attach, re-registration and teardown

mod helpers;
mod lifecycle;
mod scenarios;
