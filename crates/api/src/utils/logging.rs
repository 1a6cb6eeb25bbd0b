use std::time::Duration;

use freezeguard_common::ErrorSeverity;
use freezeguard_domain::FreezeGuardError;
use tracing::{error, info, warn};

/// Log the outcome of a route execution with structured fields.
///
/// # Parameters
/// * `route` - Route identifier (e.g. `"POST /ingest"`).
/// * `elapsed` - Time spent in the handler.
/// * `status` - HTTP status code returned.
///
/// Successful requests log at `debug` so steady ingest traffic stays quiet;
/// client errors log at `info`, server errors at `warn`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn log_route_execution(route: &str, elapsed: Duration, status: u16) {
    let duration_us = elapsed.as_micros() as u64;

    match status {
        200..=399 => tracing::debug!(route, status, duration_us, "route_execution_success"),
        400..=499 => info!(route, status, duration_us, "route_execution_rejected"),
        _ => warn!(route, status, duration_us, "route_execution_failure"),
    }
}

/// Log a process-level failure at the level its severity calls for.
#[inline]
pub fn log_process_error(context: &str, err: &FreezeGuardError) {
    let label = error_label(err);
    match severity(err) {
        ErrorSeverity::Info => info!(context, error = label, reason = %err, "process_error"),
        ErrorSeverity::Warning => warn!(context, error = label, reason = %err, "process_error"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(context, error = label, reason = %err, "process_error");
        }
    }
}

/// Convert a `FreezeGuardError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub const fn error_label(error: &FreezeGuardError) -> &'static str {
    match error {
        FreezeGuardError::Config(_) => "config",
        FreezeGuardError::Io(_) => "io",
        FreezeGuardError::Internal(_) => "internal",
    }
}

const fn severity(error: &FreezeGuardError) -> ErrorSeverity {
    match error {
        FreezeGuardError::Config(_) | FreezeGuardError::Io(_) => ErrorSeverity::Error,
        FreezeGuardError::Internal(_) => ErrorSeverity::Critical,
    }
}
