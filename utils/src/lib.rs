//! Shared utilities for the govlens dashboard core.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::{format_duration, format_window};
