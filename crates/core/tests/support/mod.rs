//! Shared test helpers for `freezeguard-core` integration tests.
//!
//! Payload builders so scenario tests can focus on collector behaviour
//! instead of JSON boilerplate.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A complete, valid unified-profile payload.
pub fn full_event(action: &str, thread: &str) -> Value {
    json!({
        "action": action,
        "duration_ms": 850.0,
        "thread": thread,
        "heap_delta_bytes": 3072,
        "edt_stalls": 4,
        "edt_longest_stall_ms": 275.0,
        "ts": "2024-01-01T12:00:00Z",
    })
}

/// Only the four required fields.
pub fn minimal_event(action: &str, thread: &str) -> Value {
    json!({
        "action": action,
        "duration_ms": 12.5,
        "thread": thread,
        "ts": "2024-01-01T12:00:00+01:00",
    })
}

/// Serialize a payload the way a plugin would send it.
pub fn body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("payload serializes")
}
