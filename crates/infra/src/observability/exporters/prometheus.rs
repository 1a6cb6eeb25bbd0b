//! Prometheus text exposition format (0.0.4)
//!
//! Renders families gathered by
//! [`MetricRegistry::collect`](freezeguard_core::MetricRegistry::collect)
//! with `prometheus::TextEncoder`. Metrics that have no series yet are not
//! gathered, so they do not appear.
//!
//! ```text
//! # HELP events_total Number of events ingested
//! # TYPE events_total counter
//! events_total{action="Open",thread="EDT"} 3
//! ```

use freezeguard_core::MetricFamily;
use prometheus::TextEncoder;

use crate::observability::ObservabilityResult;

/// `Content-Type` header value for the rendered body.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render all families in order.
///
/// # Errors
/// Returns [`ObservabilityError::Exposition`] if a family is malformed.
///
/// [`ObservabilityError::Exposition`]: crate::observability::ObservabilityError::Exposition
pub fn encode(families: &[MetricFamily]) -> ObservabilityResult<String> {
    Ok(TextEncoder::new().encode_to_string(families)?)
}
