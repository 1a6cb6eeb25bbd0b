//! Operator views over recently ingested events

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use freezeguard_core::DebugView;
use serde::Deserialize;

use crate::context::AppContext;

/// Query string for [`debug_events`]
#[derive(Debug, Default, Deserialize)]
pub struct DebugParams {
    /// Maximum entries to return; defaults to the configured debug limit.
    pub limit: Option<usize>,
}

/// Plain-text tail of recent events, one line each
///
/// Returns `(no events yet)` before the first accepted event.
pub async fn report(State(context): State<Arc<AppContext>>) -> String {
    context.collector.report()
}

/// Structured listing of recent events plus the lifetime total
///
/// # Example Response
/// ```json
/// {
///   "recent_events": [
///     {
///       "action": "EditorSplitLine",
///       "duration_ms": 850.0,
///       "thread": "EDT",
///       "heap_delta_bytes": 3072,
///       "edt_stalls": 4,
///       "edt_longest_stall_ms": 275.0,
///       "ts": "2024-01-01T12:00:00+00:00"
///     }
///   ],
///   "total_events": 1
/// }
/// ```
pub async fn debug_events(
    State(context): State<Arc<AppContext>>,
    Query(params): Query<DebugParams>,
) -> Json<DebugView> {
    Json(context.collector.debug_view(params.limit))
}
