//! Validate, aggregate, retain

use freezeguard_common::error::{ErrorClassification, ErrorSeverity};
use freezeguard_domain::{CollectorConfig, MetricProfileKind};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::metrics::{MetricFamily, MetricProfile, MetricRegistry, MetricsError};
use crate::recent::{RecentEntry, RecentEvents};
use crate::report::{render_report, DebugView};
use crate::validation::{EventValidator, ValidationError};

/// Success acknowledgement, serialized as `{"ok": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    /// Always `true`; rejections are errors, not acks.
    pub ok: bool,
}

impl Ack {
    const ACCEPTED: Self = Self { ok: true };
}

/// Point-in-time collector summary for health checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectorStatus {
    /// Active metric profile.
    pub profile: MetricProfileKind,
    /// Events currently held in the recent window.
    pub retained: usize,
    /// Recent window capacity.
    pub capacity: usize,
    /// Events accepted since startup.
    pub total_events: u64,
}

/// Collector state and the ingest entry point.
///
/// Safe to call from any number of threads at once. A payload is either
/// rejected before any state changes or fully folded into both the metric
/// registry and the recent window.
#[derive(Debug)]
pub struct Collector {
    validator: EventValidator,
    metrics: MetricRegistry,
    recent: RecentEvents,
    report_limit: usize,
    debug_limit: usize,
}

impl Collector {
    /// Create a collector for `profile` retaining at most `capacity` events.
    ///
    /// # Errors
    /// Returns [`MetricsError`] if the profile's metrics cannot be registered.
    pub fn new(profile: MetricProfile, capacity: usize) -> Result<Self, MetricsError> {
        Ok(Self {
            validator: EventValidator::new(profile.permitted_threads()),
            metrics: MetricRegistry::new(profile)?,
            recent: RecentEvents::new(capacity),
            report_limit: freezeguard_domain::constants::DEFAULT_REPORT_LIMIT,
            debug_limit: freezeguard_domain::constants::DEFAULT_DEBUG_LIMIT,
        })
    }

    /// Build from loaded configuration.
    ///
    /// # Errors
    /// Returns [`MetricsError`] if the profile's metrics cannot be registered.
    pub fn from_config(config: &CollectorConfig) -> Result<Self, MetricsError> {
        Ok(Self::new(MetricProfile::for_kind(config.profile), config.recent.capacity)?
            .with_limits(config.recent.report_limit, config.recent.debug_limit))
    }

    /// Override how many entries the report and debug views show.
    #[must_use]
    pub const fn with_limits(mut self, report_limit: usize, debug_limit: usize) -> Self {
        self.report_limit = report_limit;
        self.debug_limit = debug_limit;
        self
    }

    /// Validate one payload, fold it into the metrics and retain it.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] that rejected the payload. Nothing is
    /// recorded in that case.
    pub fn ingest(&self, raw: &[u8]) -> Result<Ack, ValidationError> {
        let event = self.validator.validate(raw).inspect_err(log_rejection)?;

        debug!(
            action = %event.action,
            thread = %event.thread,
            duration_ms = event.duration_ms,
            "event_ingested"
        );

        self.metrics.record(&event);
        self.recent.append(event.ts, event);
        Ok(Ack::ACCEPTED)
    }

    /// Metric registry fed by accepted events.
    #[must_use]
    pub const fn metrics(&self) -> &MetricRegistry {
        &self.metrics
    }

    /// Recent-event window.
    #[must_use]
    pub const fn recent(&self) -> &RecentEvents {
        &self.recent
    }

    /// Validator configured for this profile.
    #[must_use]
    pub const fn validator(&self) -> &EventValidator {
        &self.validator
    }

    /// Active metric profile.
    #[must_use]
    pub const fn profile(&self) -> &MetricProfile {
        self.metrics.profile()
    }

    /// Gather the metric registry.
    #[must_use]
    pub fn collect(&self) -> Vec<MetricFamily> {
        self.metrics.collect()
    }

    /// Plain-text report over the newest `report_limit` entries.
    #[must_use]
    pub fn report(&self) -> String {
        let entries: Vec<RecentEntry> = self.recent.recent(self.report_limit);
        render_report(&entries)
    }

    /// Structured listing of up to `limit` entries (default `debug_limit`).
    #[must_use]
    pub fn debug_view(&self, limit: Option<usize>) -> DebugView {
        DebugView::from(self.recent.window(limit.unwrap_or(self.debug_limit)))
    }

    /// Health summary; the recent-window figures come from one read.
    #[must_use]
    pub fn status(&self) -> CollectorStatus {
        let occupancy = self.recent.occupancy();
        CollectorStatus {
            profile: self.profile().kind(),
            retained: occupancy.retained,
            capacity: occupancy.capacity,
            total_events: occupancy.total,
        }
    }

    /// Entries rendered by [`report`](Self::report).
    #[must_use]
    pub const fn report_limit(&self) -> usize {
        self.report_limit
    }

    /// Default entry count for [`debug_view`](Self::debug_view).
    #[must_use]
    pub const fn debug_limit(&self) -> usize {
        self.debug_limit
    }
}

fn log_rejection(err: &ValidationError) {
    let field = err.field().unwrap_or_default();
    match err.severity() {
        ErrorSeverity::Info => {
            info!(kind = err.kind(), field, reason = err.reason(), "event_rejected");
        }
        ErrorSeverity::Warning => {
            warn!(kind = err.kind(), field, reason = err.reason(), "event_rejected");
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(kind = err.kind(), field, reason = err.reason(), "event_rejected");
        }
    }
}
