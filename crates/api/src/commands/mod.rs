//! Route handlers
//!
//! Each submodule groups the handlers for one concern; [`router`] wires them
//! onto their paths.

pub mod health;
pub mod ingest;
pub mod metrics;
pub mod report;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::context::AppContext;

pub use health::health;
pub use ingest::ingest_event;
pub use metrics::metrics;
pub use report::{debug_events, report, DebugParams};

/// Build the collector's router
///
/// | Route | Handler |
/// |---|---|
/// | `POST /ingest` | [`ingest_event`] |
/// | `GET /metrics` | [`metrics`] |
/// | `GET /report` | [`report`] |
/// | `GET /debug` | [`debug_events`] |
/// | `GET /health` | [`health`] |
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/ingest", post(ingest_event))
        .route("/metrics", get(metrics))
        .route("/report", get(report))
        .route("/debug", get(debug_events))
        .route("/health", get(health))
        .with_state(context)
}
