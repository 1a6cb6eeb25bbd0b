//! HTTP mapping for ingest rejections and scrape failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use freezeguard_core::ValidationError;
use freezeguard_infra::ObservabilityError;
use serde_json::json;

/// Error returned by route handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The ingest payload was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The metric registry could not be rendered
    #[error(transparent)]
    Exposition(#[from] ObservabilityError),
}

impl ApiError {
    /// Status code for this error: 400 for parse, 422 for schema failures,
    /// 500 when exposition fails.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(ValidationError::Parse { .. }) => StatusCode::BAD_REQUEST,
            Self::Validation(ValidationError::Schema { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Exposition(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(ValidationError::Parse { reason, raw_excerpt }) => json!({
                "ok": false,
                "error": "parse",
                "reason": reason,
                "raw": raw_excerpt,
            }),
            Self::Validation(ValidationError::Schema { field, reason, document }) => json!({
                "ok": false,
                "error": "schema",
                "field": field,
                "reason": reason,
                "data": document,
            }),
            Self::Exposition(err) => json!({
                "ok": false,
                "error": "exposition",
                "reason": err.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use freezeguard_core::MetricFamily;

    #[test]
    fn exposition_failures_are_server_errors() {
        let failure = freezeguard_infra::encode(&[MetricFamily::default()]).unwrap_err();
        let err = ApiError::from(failure);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
