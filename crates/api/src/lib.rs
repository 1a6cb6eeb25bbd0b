//! # FreezeGuard API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - Route handlers (plugin and operator endpoints)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the collector handle into an axum [`Router`](axum::Router)

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::router;
pub use context::AppContext;
pub use utils::error::ApiError;
