//! # FreezeGuard Infrastructure
//!
//! Adapters around the pure collector core.
//!
//! This crate contains:
//! - Configuration loading (TOML/JSON files plus environment overrides)
//! - `tracing` subscriber initialisation
//! - Prometheus text exposition over the core metric registry
//!
//! ## Architecture
//! - Depends on `freezeguard-domain` and `freezeguard-core`
//! - Contains all "impure" code (file system, environment, global
//!   subscriber)

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use config::load;
pub use observability::{encode, init_tracing, ObservabilityError, PROMETHEUS_CONTENT_TYPE};
