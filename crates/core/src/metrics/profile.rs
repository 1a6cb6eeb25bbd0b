//! Metric naming profiles for the two collector deployments
//!
//! Both deployments fold events with the same rules, label sets and bucket
//! bounds. They differ only in metric names, which metrics exist, and which
//! thread kinds are accepted.

use freezeguard_domain::{MetricProfileKind, ThreadKind};

/// Seconds buckets tuned for UI actions (10 ms .. 10 s).
pub const ACTION_DURATION_BUCKETS: [f64; 10] =
    [0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0, 2.0, 5.0, 10.0];

/// Seconds buckets for the longest UI-thread stall.
pub const STALL_DURATION_BUCKETS: [f64; 6] = [0.100, 0.250, 0.500, 1.0, 2.0, 5.0];

/// Byte buckets for heap growth and reclamation.
pub const HEAP_DELTA_BUCKETS: [f64; 11] = [
    -50_000_000.0,
    -10_000_000.0,
    -1_000_000.0,
    -100_000.0,
    -10_000.0,
    0.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    50_000_000.0,
];

const ACTION_THREAD: &[&str] = &["action", "thread"];
const ACTION: &[&str] = &["action"];

/// What a metric measures, independent of the name a profile gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricRole {
    /// Histogram of `duration_ms / 1000` by action and thread.
    ActionDuration,
    /// Histogram of the clamped longest stall in seconds by action.
    StallDuration,
    /// Counter of reported stalls by action.
    StallsTotal,
    /// Counter of accepted events by action and thread.
    EventsTotal,
    /// Histogram of signed heap delta bytes by action and thread.
    HeapDelta,
}

impl MetricRole {
    /// Every role, in registration order.
    pub const ALL: [Self; 5] = [
        Self::ActionDuration,
        Self::StallDuration,
        Self::StallsTotal,
        Self::EventsTotal,
        Self::HeapDelta,
    ];

    /// Label names in exposition order.
    #[must_use]
    pub const fn label_names(self) -> &'static [&'static str] {
        match self {
            Self::ActionDuration | Self::EventsTotal | Self::HeapDelta => ACTION_THREAD,
            Self::StallDuration | Self::StallsTotal => ACTION,
        }
    }

    /// Bucket upper bounds for histogram roles; `None` for counters.
    #[must_use]
    pub const fn buckets(self) -> Option<&'static [f64]> {
        match self {
            Self::ActionDuration => Some(&ACTION_DURATION_BUCKETS),
            Self::StallDuration => Some(&STALL_DURATION_BUCKETS),
            Self::HeapDelta => Some(&HEAP_DELTA_BUCKETS),
            Self::StallsTotal | Self::EventsTotal => None,
        }
    }
}

/// Name and help text a profile assigns to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// What the metric measures
    pub role: MetricRole,
    /// Registered metric name
    pub name: &'static str,
    /// `# HELP` text
    pub help: &'static str,
}

impl MetricDescriptor {
    const fn new(role: MetricRole, name: &'static str, help: &'static str) -> Self {
        Self { role, name, help }
    }
}

const UNIFIED: &[MetricDescriptor] = &[
    MetricDescriptor::new(
        MetricRole::ActionDuration,
        "action_duration_seconds",
        "Action duration in seconds",
    ),
    MetricDescriptor::new(
        MetricRole::StallDuration,
        "edt_stall_duration_seconds",
        "Observed EDT stall (longest in event window), seconds",
    ),
    MetricDescriptor::new(
        MetricRole::StallsTotal,
        "edt_stalls_total",
        "Count of EDT stall events observed",
    ),
    MetricDescriptor::new(MetricRole::EventsTotal, "events_total", "Number of events ingested"),
    MetricDescriptor::new(
        MetricRole::HeapDelta,
        "heap_delta_bytes",
        "Memory allocation delta in bytes per action",
    ),
];

const VSCODE: &[MetricDescriptor] = &[
    MetricDescriptor::new(
        MetricRole::ActionDuration,
        "vscode_action_duration_seconds",
        "VSCode action duration in seconds",
    ),
    MetricDescriptor::new(
        MetricRole::StallDuration,
        "vscode_main_stall_duration_seconds",
        "Observed main thread stall (longest in event window), seconds",
    ),
    MetricDescriptor::new(
        MetricRole::StallsTotal,
        "vscode_main_stalls_total",
        "Count of main thread stall events observed",
    ),
    MetricDescriptor::new(
        MetricRole::EventsTotal,
        "vscode_events_total",
        "Number of VSCode events ingested",
    ),
];

/// Naming and thread-set configuration for a [`MetricRegistry`].
///
/// [`MetricRegistry`]: super::MetricRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricProfile {
    kind: MetricProfileKind,
    descriptors: &'static [MetricDescriptor],
}

impl MetricProfile {
    /// Cross-IDE names, all five metrics.
    #[must_use]
    pub const fn unified() -> Self {
        Self { kind: MetricProfileKind::Unified, descriptors: UNIFIED }
    }

    /// `vscode_` names; the heap delta histogram is not registered.
    #[must_use]
    pub const fn vscode() -> Self {
        Self { kind: MetricProfileKind::VsCode, descriptors: VSCODE }
    }

    /// Profile for a configured deployment variant.
    #[must_use]
    pub const fn for_kind(kind: MetricProfileKind) -> Self {
        match kind {
            MetricProfileKind::Unified => Self::unified(),
            MetricProfileKind::VsCode => Self::vscode(),
        }
    }

    /// Deployment variant this profile describes.
    #[must_use]
    pub const fn kind(&self) -> MetricProfileKind {
        self.kind
    }

    /// Registered metrics in registration order.
    #[must_use]
    pub const fn descriptors(&self) -> &'static [MetricDescriptor] {
        self.descriptors
    }

    /// Descriptor for `role`, if this profile registers it.
    #[must_use]
    pub fn descriptor(&self, role: MetricRole) -> Option<&'static MetricDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.role == role)
    }

    /// Thread kinds the validator accepts under this profile.
    #[must_use]
    pub const fn permitted_threads(&self) -> &'static [ThreadKind] {
        self.kind.permitted_threads()
    }
}

impl Default for MetricProfile {
    fn default() -> Self {
        Self::unified()
    }
}
