//! Health check endpoint for monitoring

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::context::{AppContext, HealthStatus};

/// Get collector health status
///
/// # Example Response
/// ```json
/// {
///   "status": "ok",
///   "profile": "unified",
///   "retained": 12,
///   "capacity": 256,
///   "total_events": 12
/// }
/// ```
pub async fn health(State(context): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(context.health_check())
}
