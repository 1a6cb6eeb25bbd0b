//! Rejection taxonomy for ingest payloads

use std::time::Duration;

use freezeguard_common::error::{ErrorClassification, ErrorSeverity};
use freezeguard_domain::constants::MAX_RAW_ECHO_BYTES;
use serde_json::Value;
use thiserror::Error;

/// Field name reported when the document itself has the wrong shape.
pub const ROOT_FIELD: &str = "$";

/// Why an ingest payload was rejected.
///
/// Both variants are detected before any collector state is touched, so a
/// rejected payload never leaves a trace in metrics or the recent window.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The payload is not well-formed JSON.
    #[error("json parse: {reason}")]
    Parse {
        /// Parser message, including line/column.
        reason: String,
        /// The raw body decoded as lossy UTF-8, truncated for echoing.
        raw_excerpt: String,
    },

    /// The payload parsed but violates the event schema.
    #[error("schema: field `{field}` {reason}")]
    Schema {
        /// First field that failed, or [`ROOT_FIELD`].
        field: String,
        /// Human-readable violation.
        reason: String,
        /// The parsed document that was rejected.
        document: Value,
    },
}

impl ValidationError {
    pub(crate) fn parse(err: &serde_json::Error, raw: &[u8]) -> Self {
        Self::Parse { reason: err.to_string(), raw_excerpt: excerpt(raw) }
    }

    /// Stable label for the failure kind: `"parse"` or `"schema"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Schema { .. } => "schema",
        }
    }

    /// Violating field for schema failures.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Parse { .. } => None,
            Self::Schema { field, .. } => Some(field),
        }
    }

    /// Parser or schema message without the kind prefix.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Parse { reason, .. } | Self::Schema { reason, .. } => reason,
        }
    }
}

impl ErrorClassification for ValidationError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

fn excerpt(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    if text.len() <= MAX_RAW_ECHO_BYTES {
        return text.into_owned();
    }
    let mut end = MAX_RAW_ECHO_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_never_retryable() {
        let err = ValidationError::Schema {
            field: "thread".into(),
            reason: "must be one of MAIN, WORKER".into(),
            document: Value::Null,
        };
        assert!(!err.is_retryable());
        assert!(!err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.retry_after(), None);
        assert_eq!(err.kind(), "schema");
        assert_eq!(err.field(), Some("thread"));
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let mut raw = "a".repeat(MAX_RAW_ECHO_BYTES - 1).into_bytes();
        raw.extend_from_slice("é tail".as_bytes());

        let text = excerpt(&raw);
        assert_eq!(text.len(), MAX_RAW_ECHO_BYTES - 1);
        assert!(text.chars().all(|c| c == 'a'));
    }

    #[test]
    fn excerpt_decodes_invalid_utf8_lossily() {
        let text = excerpt(&[b'{', 0xFF, b'}']);
        assert_eq!(text, "{\u{FFFD}}");
    }
}
