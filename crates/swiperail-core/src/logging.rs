//! Logging facilities for Swiperail.
//!
//! Swiperail uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber itself; applications that want to see logs install
//! one at startup:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The [`targets`] module collects the target names used throughout the
//! workspace so filter directives can address individual subsystems, e.g.
//! `RUST_LOG=swiperail::row=trace`.

/// Span names used throughout Swiperail for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "swiperail::signal";
    /// Scheduled task processing span.
    pub const SCHEDULER: &str = "swiperail::scheduler";
    /// Swipe row state machine span.
    pub const ROW: &str = "swiperail::row";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "swiperail_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "swiperail_core::signal";
    /// Scheduler target.
    pub const SCHEDULER: &str = "swiperail_core::scheduler";
    /// Swipe row state machine target.
    pub const ROW: &str = "swiperail::row";
    /// Row list host target.
    pub const LIST: &str = "swiperail::list";
}
