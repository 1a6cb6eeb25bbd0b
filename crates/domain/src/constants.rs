//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! collector.

// Recent-event window
/// Events retained by the recent window.
pub const DEFAULT_RING_CAPACITY: usize = 256;
/// Lines rendered by the text report.
pub const DEFAULT_REPORT_LIMIT: usize = 50;
/// Entries returned by the debug listing when no limit is given.
pub const DEFAULT_DEBUG_LIMIT: usize = 50;

// HTTP listener (matches the port IDE plugins post to by default)
/// Listener address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

// Logging
/// Filter directive used when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Longest raw body echoed back in a parse rejection.
pub const MAX_RAW_ECHO_BYTES: usize = 4096;
