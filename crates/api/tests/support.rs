//! Shared helpers for `freezeguard-app` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use freezeguard_domain::{CollectorConfig, MetricProfileKind};
use freezeguard_lib::{router, AppContext};
use tower::ServiceExt;

/// Router plus the context behind it, so tests can inspect collector state.
pub struct TestApp {
    pub context: Arc<AppContext>,
    pub router: Router,
}

/// Fresh application with its own collector.
pub fn test_app(profile: MetricProfileKind, capacity: usize) -> TestApp {
    let mut config = CollectorConfig::default();
    config.profile = profile;
    config.recent.capacity = capacity;

    let context = Arc::new(AppContext::new(config).expect("collector builds"));
    TestApp { router: router(Arc::clone(&context)), context }
}

/// Response status, content type and body text.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app.router.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body readable");

    TestResponse { status, content_type, body: String::from_utf8_lossy(&bytes).into_owned() }
}

pub async fn post_ingest(app: &TestApp, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/ingest")
        .header("content-type", "application/json")
        .body(body.into())
        .expect("valid request");
    send(app, request).await
}

pub async fn get(app: &TestApp, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("valid request");
    send(app, request).await
}

pub fn event_json(action: &str, thread: &str) -> String {
    format!(
        r#"{{"action":"{action}","duration_ms":850.0,"thread":"{thread}","heap_delta_bytes":3072,"edt_stalls":4,"edt_longest_stall_ms":275.0,"ts":"2024-01-01T12:00:00Z"}}"#
    )
}
