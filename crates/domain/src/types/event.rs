//! Validated IDE performance telemetry event

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Thread an IDE action ran on.
///
/// `EDT`/`BGT` come from IntelliJ-based IDEs, `MAIN`/`WORKER` from VS Code.
/// Which members a collector accepts depends on its metric profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreadKind {
    /// IntelliJ event dispatch thread
    #[serde(rename = "EDT")]
    Edt,
    /// IntelliJ background thread
    #[serde(rename = "BGT")]
    Bgt,
    /// VS Code extension host main thread
    #[serde(rename = "MAIN")]
    Main,
    /// VS Code worker thread
    #[serde(rename = "WORKER")]
    Worker,
}

impl ThreadKind {
    /// Every thread kind, in wire-label order.
    pub const ALL: [Self; 4] = [Self::Edt, Self::Bgt, Self::Main, Self::Worker];

    /// Wire label, also used as the `thread` metric label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edt => "EDT",
            Self::Bgt => "BGT",
            Self::Main => "MAIN",
            Self::Worker => "WORKER",
        }
    }

    /// Looks up a thread kind by its exact wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == label)
    }
}

impl fmt::Display for ThreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A telemetry event that passed schema validation.
///
/// Created per ingest request, folded into the metric registry and then owned
/// by the recent-event buffer until evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Free-form action identifier, never empty. Used as a metric label.
    pub action: String,
    /// Wall-clock duration in milliseconds. Negative values are kept as sent.
    pub duration_ms: f64,
    /// Thread the action ran on.
    pub thread: ThreadKind,
    /// Heap growth (positive) or reclamation (negative) in bytes.
    #[serde(default)]
    pub heap_delta_bytes: i64,
    /// Number of UI-thread stalls observed during the action. Only positive
    /// counts reach the stall counter.
    #[serde(default)]
    pub edt_stalls: i64,
    /// Longest single stall in milliseconds, as reported by the producer.
    #[serde(default)]
    pub edt_longest_stall_ms: f64,
    /// Producer timestamp. Display only; never used for ordering.
    pub ts: DateTime<FixedOffset>,
}

impl ActionEvent {
    /// Action duration in seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_ms / 1000.0
    }

    /// Longest stall in seconds with negative reports clamped to zero.
    #[must_use]
    pub fn longest_stall_seconds(&self) -> f64 {
        self.edt_longest_stall_ms.max(0.0) / 1000.0
    }
}
