//! Operator views over the recent-event store
//!
//! Both views are read-only projections of a [`RecentWindow`]; neither
//! touches the metric registry.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};
use freezeguard_domain::ActionEvent;
use serde::Serialize;

use crate::recent::{RecentEntry, RecentWindow};

/// Report body when nothing has been retained yet.
pub const EMPTY_REPORT_PLACEHOLDER: &str = "(no events yet)";

/// Width the action column is padded to.
pub const ACTION_COLUMN_WIDTH: usize = 20;

/// Render one fixed-width line per entry, oldest first, joined by newlines.
#[must_use]
pub fn render_report(entries: &[RecentEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_REPORT_PLACEHOLDER.to_owned();
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_line(&mut out, entry);
    }
    out
}

/// Render a single report line.
///
/// The longest stall is printed as reported, without clamping.
#[must_use]
pub fn format_report_line(entry: &RecentEntry) -> String {
    let mut line = String::new();
    write_line(&mut line, entry);
    line
}

fn write_line(out: &mut String, entry: &RecentEntry) {
    let event = &entry.event;
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{ts}  {action:<width$} {thread}  {duration:7.1} ms  stalls={stalls} longest={longest:5.1} ms  heap\u{394}={heap}",
        ts = format_timestamp(&entry.ts),
        action = event.action,
        width = ACTION_COLUMN_WIDTH,
        thread = event.thread,
        duration = event.duration_ms,
        stalls = event.edt_stalls,
        longest = event.edt_longest_stall_ms,
        heap = event.heap_delta_bytes,
    );
}

/// RFC 3339 with six fractional digits when there is a sub-second part,
/// none otherwise.
fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let precision = if ts.nanosecond() / 1_000 == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    ts.to_rfc3339_opts(precision, false)
}

/// Structured listing of retained events plus the lifetime total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugView {
    /// Retained events, oldest first.
    pub recent_events: Vec<ActionEvent>,
    /// Events ever accepted, including evicted ones.
    pub total_events: u64,
}

impl From<RecentWindow> for DebugView {
    fn from(window: RecentWindow) -> Self {
        Self {
            recent_events: window.entries.into_iter().map(|entry| entry.event).collect(),
            total_events: window.total,
        }
    }
}
