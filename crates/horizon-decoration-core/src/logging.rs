//! Logging facilities for Horizon Decoration.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target names for filtering logs by subsystem
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Decoration uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in the host:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_decoration::group=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_decoration_core::signal";
    /// Button state machine target.
    pub const BUTTON: &str = "horizon_decoration::button";
    /// Button group layout target.
    pub const GROUP: &str = "horizon_decoration::group";
    /// Client requests and state updates.
    pub const CLIENT: &str = "horizon_decoration::client";
    /// Settings and button layout configuration.
    pub const SETTINGS: &str = "horizon_decoration::settings";
    /// Performance spans.
    pub const PERF: &str = "horizon_decoration::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
