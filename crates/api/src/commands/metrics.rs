//! Prometheus scrape endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use freezeguard_infra::{encode, PROMETHEUS_CONTENT_TYPE};

use crate::context::AppContext;
use crate::utils::error::ApiError;
use crate::utils::logging::log_route_execution;

/// Render the metric registry in text exposition format
///
/// # Errors
/// - 500 with `"error": "exposition"` if the gathered families cannot be
///   encoded
pub async fn metrics(
    State(context): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, ApiError> {
    let start = Instant::now();
    let result = encode(&context.collector.collect()).map_err(ApiError::from);

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => err.status(),
    };
    log_route_execution("GET /metrics", start.elapsed(), status.as_u16());

    Ok(([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], result?))
}
