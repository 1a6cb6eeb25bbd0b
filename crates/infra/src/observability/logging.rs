//! `tracing` subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level so operators can
//! raise verbosity without touching config files.

use freezeguard_domain::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Build the filter for `config`, preferring `RUST_LOG` when it is set.
///
/// # Errors
/// Returns [`ObservabilityError::InvalidFilter`] if neither `RUST_LOG` nor the
/// configured level is a valid directive.
pub fn env_filter(config: &LoggingConfig) -> ObservabilityResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|err| ObservabilityError::InvalidFilter {
        directive: config.level.clone(),
        reason: err.to_string(),
    })
}

/// Install the global subscriber.
///
/// # Errors
/// - [`ObservabilityError::InvalidFilter`] for a bad level directive
/// - [`ObservabilityError::AlreadyInitialized`] when called twice
pub fn init_tracing(config: &LoggingConfig) -> ObservabilityResult<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|err| ObservabilityError::AlreadyInitialized(err.to_string()))
}
