//! Lax scalar coercion for producer-supplied JSON values
//!
//! Plugins are not consistent about numeric encoding: some send `4`, some
//! `4.0`, some `"4"`. Each coercer accepts those spellings and reports a short
//! reason string otherwise.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::Value;

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn to_f64(value: &Value) -> Result<f64, String> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(number) if number.is_finite() => Ok(number),
        Some(_) => Err("must be a finite number".to_string()),
        None => Err(format!("expected a number, got {}", describe(value))),
    }
}

pub(crate) fn to_i64(value: &Value) -> Result<i64, String> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().and_then(whole_i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| format!("expected an integer, got {}", describe(value)))
}

pub(crate) fn to_str(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| format!("expected a string, got {}", describe(value)))
}

/// RFC 3339 with offset, or an offset-less ISO-8601 timestamp read as UTC.
pub(crate) fn to_timestamp(value: &Value) -> Result<DateTime<FixedOffset>, String> {
    let text = to_str(value)?.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts);
    }
    NaiveDateTime::parse_from_str(text, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|err| format!("expected an ISO-8601 timestamp ({})", err))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_i64(number: f64) -> Option<i64> {
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.fract() == 0.0 && in_range).then_some(number as i64)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn floats_accept_numbers_and_numeric_strings() {
        assert_eq!(to_f64(&json!(850)), Ok(850.0));
        assert_eq!(to_f64(&json!(-12.5)), Ok(-12.5));
        assert_eq!(to_f64(&json!(" 7.25 ")), Ok(7.25));
        assert!(to_f64(&json!("NaN")).is_err());
        assert!(to_f64(&json!("inf")).is_err());
        assert!(to_f64(&json!(true)).is_err());
        assert!(to_f64(&json!(null)).unwrap_err().contains("null"));
    }

    #[test]
    fn integers_accept_whole_floats_only() {
        assert_eq!(to_i64(&json!(-3072)), Ok(-3072));
        assert_eq!(to_i64(&json!(4.0)), Ok(4));
        assert_eq!(to_i64(&json!("1024")), Ok(1024));
        assert_eq!(to_i64(&json!(-1)), Ok(-1));
        assert!(to_i64(&json!(4.5)).is_err());
        assert!(to_i64(&json!(1e30)).is_err());
        assert!(to_i64(&json!([1])).is_err());
    }

    #[test]
    fn timestamps_with_and_without_offset() {
        let zulu = to_timestamp(&json!("2024-01-01T12:00:00.000Z")).unwrap();
        assert_eq!(zulu.to_rfc3339(), "2024-01-01T12:00:00+00:00");

        let offset = to_timestamp(&json!("2024-01-01T14:00:00+02:00")).unwrap();
        assert_eq!(offset, zulu);

        let naive = to_timestamp(&json!("2024-01-01T12:00:00.5")).unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);

        assert!(to_timestamp(&json!("yesterday")).is_err());
        assert!(to_timestamp(&json!(1_704_110_400)).is_err());
    }
}
