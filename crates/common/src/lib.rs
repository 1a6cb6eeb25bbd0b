//! Modular common utilities shared across FreezeGuard crates.
//!
//! # Feature Tiers
//!
//! - `foundation` (default): collections and error classification. No
//!   third-party dependencies.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod collections;
#[cfg(feature = "foundation")]
pub mod error;

// Re-export commonly used types
// ------------------------
#[cfg(feature = "foundation")]
pub use collections::RingBuffer;
#[cfg(feature = "foundation")]
pub use error::{ErrorClassification, ErrorSeverity};
