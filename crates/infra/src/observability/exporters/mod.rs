//! Metrics exporters
//!
//! Exporters turn the registry's gathered families into external formats.

pub mod prometheus;

// Re-export exporter types for convenience
pub use self::prometheus::{encode, PROMETHEUS_CONTENT_TYPE};
