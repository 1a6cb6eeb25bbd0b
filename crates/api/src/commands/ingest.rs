//! Event ingestion endpoint for IDE plugins

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use freezeguard_core::Ack;

use crate::context::AppContext;
use crate::utils::error::ApiError;
use crate::utils::logging::log_route_execution;

/// Ingest one event
///
/// The body is handed to the collector as raw bytes; the content type is not
/// inspected.
///
/// # Example Response
/// ```json
/// { "ok": true }
/// ```
///
/// # Errors
/// - 400 with `"error": "parse"` and the raw body when it is not JSON
/// - 422 with `"error": "schema"`, the field and the parsed document when it
///   violates the event schema
pub async fn ingest_event(
    State(context): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<Json<Ack>, ApiError> {
    let start = Instant::now();
    let result = context.collector.ingest(&body).map(Json).map_err(ApiError::from);

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => err.status(),
    };
    log_route_execution("POST /ingest", start.elapsed(), status.as_u16());

    result
}
