//! Application context - dependency injection container

use std::sync::Arc;

use freezeguard_core::Collector;
use freezeguard_domain::{CollectorConfig, FreezeGuardError, Result};
use serde::Serialize;

/// Health check payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process serves requests
    pub status: &'static str,
    /// Profile and recent-window figures, flattened into the payload
    #[serde(flatten)]
    pub collector: freezeguard_core::CollectorStatus,
}

/// Application context - holds the collector and the configuration it was
/// built from
///
/// Constructed once at startup and shared with every handler through
/// `Arc<AppContext>`. Tests build a fresh context per case.
#[derive(Debug)]
pub struct AppContext {
    /// Configuration the collector was built from
    pub config: CollectorConfig,
    /// Shared collector handle
    pub collector: Arc<Collector>,
}

impl AppContext {
    /// Build a context and its collector from configuration
    ///
    /// # Errors
    /// Returns `FreezeGuardError::Internal` if the collector's metrics cannot
    /// be registered.
    pub fn new(config: CollectorConfig) -> Result<Self> {
        let collector = Collector::from_config(&config)
            .map_err(|err| FreezeGuardError::Internal(err.to_string()))?;
        Ok(Self { config, collector: Arc::new(collector) })
    }

    /// Current health summary
    #[must_use]
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus { status: "ok", collector: self.collector.status() }
    }
}

#[cfg(test)]
mod tests {
    use freezeguard_domain::MetricProfileKind;

    use super::*;

    #[test]
    fn context_builds_collector_from_config() {
        let mut config = CollectorConfig::default();
        config.profile = MetricProfileKind::VsCode;
        config.recent.capacity = 5;

        let context = AppContext::new(config).unwrap();
        let health = context.health_check();
        assert_eq!(health.status, "ok");
        assert_eq!(health.collector.profile, MetricProfileKind::VsCode);
        assert_eq!(health.collector.capacity, 5);
    }
}
