//! Profile-driven metric registry

use std::fmt;

use freezeguard_domain::ActionEvent;
use parking_lot::RwLock;
use prometheus::core::Collector as _;
use prometheus::proto::{self, MetricFamily};
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

use super::profile::{MetricDescriptor, MetricProfile, MetricRole};
use super::MetricsError;

enum MetricHandle {
    Counter(IntCounterVec),
    Histogram(HistogramVec),
}

impl MetricHandle {
    fn families(&self) -> Vec<MetricFamily> {
        match self {
            Self::Counter(counters) => counters.collect(),
            Self::Histogram(histograms) => histograms.collect(),
        }
    }
}

struct Registered {
    descriptor: &'static MetricDescriptor,
    handle: MetricHandle,
}

/// Point-in-time copy of one histogram series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper bound, cumulative count)` for each configured bound.
    pub buckets: Vec<(f64, u64)>,
    /// Total observations, including those above the last bound.
    pub count: u64,
    /// Sum of every observed value.
    pub sum: f64,
}

impl HistogramSnapshot {
    /// Cumulative count at `upper_bound`, if it is one of the bounds.
    #[must_use]
    pub fn cumulative(&self, upper_bound: f64) -> Option<u64> {
        self.buckets
            .iter()
            .find(|(bound, _)| bound.total_cmp(&upper_bound).is_eq())
            .map(|(_, count)| *count)
    }
}

impl From<&proto::Histogram> for HistogramSnapshot {
    fn from(histogram: &proto::Histogram) -> Self {
        Self {
            buckets: histogram
                .get_bucket()
                .iter()
                .map(|bucket| (bucket.get_upper_bound(), bucket.get_cumulative_count()))
                .collect(),
            count: histogram.get_sample_count(),
            sum: histogram.get_sample_sum(),
        }
    }
}

/// Counters and histograms fed by accepted events.
///
/// Series are created on first use by the underlying vectors. The `gate`
/// makes each event's update group atomic with respect to
/// [`collect`](Self::collect): recorders share it, collection takes it
/// exclusively.
pub struct MetricRegistry {
    profile: MetricProfile,
    gate: RwLock<()>,
    registry: Registry,
    metrics: Vec<Registered>,
}

impl MetricRegistry {
    /// Register every metric `profile` names, with no series yet.
    ///
    /// # Errors
    /// Returns [`MetricsError::Registration`] if a descriptor is rejected by
    /// the registry (duplicate name, invalid buckets or label names).
    pub fn new(profile: MetricProfile) -> Result<Self, MetricsError> {
        let registry = Registry::new();
        let metrics = profile
            .descriptors()
            .iter()
            .map(|descriptor| {
                register(&registry, descriptor).map(|handle| Registered { descriptor, handle })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { profile, gate: RwLock::new(()), registry, metrics })
    }

    /// Profile the registry was built from.
    #[must_use]
    pub const fn profile(&self) -> &MetricProfile {
        &self.profile
    }

    /// Fold one validated event into the registered metrics.
    ///
    /// Durations and stalls are recorded in seconds. A non-positive longest
    /// stall, a non-positive stall count and a zero heap delta are not
    /// recorded at all. Roles the profile does not register are skipped.
    #[allow(clippy::cast_precision_loss)]
    pub fn record(&self, event: &ActionEvent) {
        let _group = self.gate.read();
        let action = event.action.as_str();
        let thread = event.thread.as_str();

        if let Some(histograms) = self.histograms(MetricRole::ActionDuration) {
            histograms.with_label_values(&[action, thread]).observe(event.duration_seconds());
        }

        let longest_stall = event.longest_stall_seconds();
        if longest_stall > 0.0 {
            if let Some(histograms) = self.histograms(MetricRole::StallDuration) {
                histograms.with_label_values(&[action]).observe(longest_stall);
            }
        }

        if event.edt_stalls > 0 {
            if let Some(counters) = self.counters(MetricRole::StallsTotal) {
                counters.with_label_values(&[action]).inc_by(event.edt_stalls.unsigned_abs());
            }
        }

        if let Some(counters) = self.counters(MetricRole::EventsTotal) {
            counters.with_label_values(&[action, thread]).inc();
        }

        if event.heap_delta_bytes != 0 {
            if let Some(histograms) = self.histograms(MetricRole::HeapDelta) {
                histograms
                    .with_label_values(&[action, thread])
                    .observe(event.heap_delta_bytes as f64);
            }
        }
    }

    /// Gather every metric that holds at least one series.
    ///
    /// Families come back sorted by name and series by label values. Blocks
    /// recorders for the duration of the gather, so no event is ever seen
    /// half-applied.
    #[must_use]
    pub fn collect(&self) -> Vec<MetricFamily> {
        let _exclusive = self.gate.write();
        self.registry.gather()
    }

    /// Current value of a counter series, if it exists.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn counter_value(&self, role: MetricRole, labels: &[&str]) -> Option<u64> {
        let _group = self.gate.read();
        let families = self.registered(role)?.families();
        find_series(&families, labels).map(|metric| metric.get_counter().get_value() as u64)
    }

    /// Snapshot of a histogram series, if it exists.
    #[must_use]
    pub fn histogram(&self, role: MetricRole, labels: &[&str]) -> Option<HistogramSnapshot> {
        let _group = self.gate.read();
        let families = self.registered(role)?.families();
        find_series(&families, labels).map(|metric| HistogramSnapshot::from(metric.get_histogram()))
    }

    /// Number of series across all metrics.
    #[must_use]
    pub fn series_count(&self) -> usize {
        let _group = self.gate.read();
        self.registry.gather().iter().map(|family| family.get_metric().len()).sum()
    }

    fn registered(&self, role: MetricRole) -> Option<&MetricHandle> {
        self.metrics
            .iter()
            .find(|registered| registered.descriptor.role == role)
            .map(|registered| &registered.handle)
    }

    fn counters(&self, role: MetricRole) -> Option<&IntCounterVec> {
        match self.registered(role)? {
            MetricHandle::Counter(counters) => Some(counters),
            MetricHandle::Histogram(_) => None,
        }
    }

    fn histograms(&self, role: MetricRole) -> Option<&HistogramVec> {
        match self.registered(role)? {
            MetricHandle::Histogram(histograms) => Some(histograms),
            MetricHandle::Counter(_) => None,
        }
    }
}

impl fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.metrics.iter().map(|m| m.descriptor.name).collect();
        f.debug_struct("MetricRegistry")
            .field("profile", &self.profile)
            .field("metrics", &names)
            .finish_non_exhaustive()
    }
}

fn register(
    registry: &Registry,
    descriptor: &'static MetricDescriptor,
) -> Result<MetricHandle, MetricsError> {
    let failed = |source| MetricsError::Registration { name: descriptor.name, source };
    let labels = descriptor.role.label_names();

    let handle = match descriptor.role.buckets() {
        Some(bounds) => {
            let opts = HistogramOpts::new(descriptor.name, descriptor.help).buckets(bounds.to_vec());
            let histograms = HistogramVec::new(opts, labels).map_err(failed)?;
            registry.register(Box::new(histograms.clone())).map_err(failed)?;
            MetricHandle::Histogram(histograms)
        }
        None => {
            let opts = Opts::new(descriptor.name, descriptor.help);
            let counters = IntCounterVec::new(opts, labels).map_err(failed)?;
            registry.register(Box::new(counters.clone())).map_err(failed)?;
            MetricHandle::Counter(counters)
        }
    };
    Ok(handle)
}

/// Series whose label values equal `labels`.
///
/// Label pairs come back sorted by name; every profile's label names are
/// already in that order.
fn find_series<'a>(families: &'a [MetricFamily], labels: &[&str]) -> Option<&'a proto::Metric> {
    families.iter().flat_map(|family| family.get_metric()).find(|metric| {
        let values = metric.get_label().iter().map(proto::LabelPair::get_value);
        values.eq(labels.iter().copied())
    })
}
