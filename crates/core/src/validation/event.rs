//! Typed parse step from raw bytes to [`ActionEvent`]

use freezeguard_domain::{ActionEvent, MetricProfileKind, ThreadKind};
use serde_json::{Map, Value};

use super::coerce;
use super::error::{ValidationError, ROOT_FIELD};

/// Validates ingest payloads against the event schema.
///
/// The only configurable part of the schema is the set of accepted thread
/// kinds, which follows the collector's metric profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventValidator {
    permitted_threads: &'static [ThreadKind],
}

/// First field that failed, before the document is attached.
struct FieldViolation {
    field: &'static str,
    reason: String,
}

impl FieldViolation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self { field, reason: reason.into() }
    }
}

impl EventValidator {
    /// Create a validator accepting the given thread kinds.
    #[must_use]
    pub const fn new(permitted_threads: &'static [ThreadKind]) -> Self {
        Self { permitted_threads }
    }

    /// Create a validator for a deployment profile.
    #[must_use]
    pub const fn for_profile(kind: MetricProfileKind) -> Self {
        Self::new(kind.permitted_threads())
    }

    /// Thread kinds this validator accepts.
    #[must_use]
    pub const fn permitted_threads(&self) -> &'static [ThreadKind] {
        self.permitted_threads
    }

    /// Parse and validate a raw payload.
    ///
    /// # Errors
    /// - [`ValidationError::Parse`] when the bytes are not JSON.
    /// - [`ValidationError::Schema`] when a required field is missing, a value
    ///   has the wrong type, or `thread` is outside the permitted set.
    pub fn validate(&self, raw: &[u8]) -> Result<ActionEvent, ValidationError> {
        let document: Value =
            serde_json::from_slice(raw).map_err(|err| ValidationError::parse(&err, raw))?;
        self.validate_document(document)
    }

    /// Validate an already-parsed document.
    ///
    /// # Errors
    /// Returns [`ValidationError::Schema`] carrying the rejected document.
    pub fn validate_document(&self, document: Value) -> Result<ActionEvent, ValidationError> {
        match self.extract(&document) {
            Ok(event) => Ok(event),
            Err(FieldViolation { field, reason }) => {
                Err(ValidationError::Schema { field: field.to_string(), reason, document })
            }
        }
    }

    fn extract(&self, document: &Value) -> Result<ActionEvent, FieldViolation> {
        let fields = document
            .as_object()
            .ok_or_else(|| FieldViolation::new(ROOT_FIELD, "expected a JSON object"))?;

        let action = required(fields, "action", |value| coerce::to_str(value).map(str::to_owned))?;
        if action.is_empty() {
            return Err(FieldViolation::new("action", "must not be empty"));
        }
        let duration_ms = required(fields, "duration_ms", coerce::to_f64)?;
        let thread = required(fields, "thread", |value| self.thread(value))?;
        let heap_delta_bytes = optional(fields, "heap_delta_bytes", coerce::to_i64)?.unwrap_or(0);
        let edt_stalls = optional(fields, "edt_stalls", coerce::to_i64)?.unwrap_or(0);
        let edt_longest_stall_ms =
            optional(fields, "edt_longest_stall_ms", coerce::to_f64)?.unwrap_or(0.0);
        let ts = required(fields, "ts", coerce::to_timestamp)?;

        Ok(ActionEvent {
            action,
            duration_ms,
            thread,
            heap_delta_bytes,
            edt_stalls,
            edt_longest_stall_ms,
            ts,
        })
    }

    fn thread(&self, value: &Value) -> Result<ThreadKind, String> {
        let label = coerce::to_str(value)?;
        ThreadKind::from_label(label)
            .filter(|kind| self.permitted_threads.contains(kind))
            .ok_or_else(|| {
                let allowed: Vec<_> = self.permitted_threads.iter().map(|k| k.as_str()).collect();
                format!("must be one of {}, got {:?}", allowed.join(", "), label)
            })
    }
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::for_profile(MetricProfileKind::default())
    }
}

fn required<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    coerce: impl FnOnce(&Value) -> Result<T, String>,
) -> Result<T, FieldViolation> {
    let value = fields.get(field).ok_or_else(|| FieldViolation::new(field, "field required"))?;
    coerce(value).map_err(|reason| FieldViolation::new(field, reason))
}

fn optional<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    coerce: impl FnOnce(&Value) -> Result<T, String>,
) -> Result<Option<T>, FieldViolation> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce(value).map(Some).map_err(|reason| FieldViolation::new(field, reason)),
    }
}
