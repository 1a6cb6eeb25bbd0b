//! In-process metric registry
//!
//! Labeled counters and fixed-bucket histograms on a per-collector
//! `prometheus::Registry`, folded from accepted events.
//! [`MetricRegistry::collect`] gathers the current state for exporters
//! without committing to any text format.

pub mod profile;
pub mod registry;

pub use profile::{
    MetricDescriptor, MetricProfile, MetricRole, ACTION_DURATION_BUCKETS, HEAP_DELTA_BUCKETS,
    STALL_DURATION_BUCKETS,
};
pub use prometheus::proto::MetricFamily;
pub use registry::{HistogramSnapshot, MetricRegistry};

/// Metric registry setup errors
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// A metric could not be built or added to the registry
    #[error("Failed to register metric '{name}': {source}")]
    Registration {
        /// Metric name from the profile
        name: &'static str,
        /// Underlying registry error
        #[source]
        source: prometheus::Error,
    },
}
