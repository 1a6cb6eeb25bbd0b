//! # FreezeGuard Domain
//!
//! Business domain types for the FreezeGuard collector.
//!
//! This crate contains:
//! - The validated telemetry event ([`ActionEvent`]) and its thread enum
//! - Collector configuration structures
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other FreezeGuard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
