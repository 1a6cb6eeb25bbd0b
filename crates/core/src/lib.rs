//! # FreezeGuard Core
//!
//! Pure collector logic - no transport or platform code.
//!
//! This crate contains:
//! - Event schema validation ([`validation`])
//! - The profile-driven metric registry ([`metrics`])
//! - The bounded recent-event store ([`recent`])
//! - The ingestion pipeline ([`ingest`])
//! - Operator report and debug views ([`report`])
//!
//! ## Architecture Principles
//! - Only depends on `freezeguard-common`, `freezeguard-domain` and
//!   in-process libraries (`prometheus` for metric storage)
//! - No I/O; every operation completes synchronously
//! - State lives in an explicit [`Collector`] handle, never in globals

pub mod ingest;
pub mod metrics;
pub mod recent;
pub mod report;
pub mod validation;

pub use ingest::{Ack, Collector, CollectorStatus};
pub use metrics::{
    HistogramSnapshot, MetricFamily, MetricProfile, MetricRegistry, MetricRole, MetricsError,
};
pub use recent::{RecentEntry, RecentEvents, RecentOccupancy, RecentWindow};
pub use report::{render_report, DebugView, EMPTY_REPORT_PLACEHOLDER};
pub use validation::{EventValidator, ValidationError};
