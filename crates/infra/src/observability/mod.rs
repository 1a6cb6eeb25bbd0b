//! Observability infrastructure for logging and metrics exposition
//!
//! - [`logging`]: `tracing` subscriber installation driven by
//!   [`LoggingConfig`](freezeguard_domain::LoggingConfig)
//! - [`exporters`]: text renderers over the core registry's gathered families

pub mod exporters;
pub mod logging;

/// Observability setup errors
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    /// The configured filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive as configured
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),

    /// Gathered metrics could not be rendered
    #[error("Metrics exposition failed: {0}")]
    Exposition(#[from] prometheus::Error),
}

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

pub use exporters::prometheus::{encode, PROMETHEUS_CONTENT_TYPE};
pub use logging::init_tracing;
