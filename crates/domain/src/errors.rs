//! Error types used throughout the application

use thiserror::Error;

/// Process-level error type for FreezeGuard
///
/// Payload rejections on the ingest path are not represented here; they use
/// the core crate's `ValidationError`.
#[derive(Error, Debug)]
pub enum FreezeGuardError {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener or file-system failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Startup invariant broken (metric registration)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for FreezeGuardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for FreezeGuard operations
pub type Result<T> = std::result::Result<T, FreezeGuardError>;
