//! Collector configuration structures
//!
//! Every field has a default so a partial TOML/JSON file, or none at all, is
//! a valid configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_DEBUG_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_REPORT_LIMIT,
    DEFAULT_RING_CAPACITY,
};
use crate::errors::FreezeGuardError;
use crate::types::ThreadKind;

/// Root collector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollectorConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Metric naming and accepted thread kinds
    pub profile: MetricProfileKind,
    /// Recent-event window sizes
    pub recent: RecentConfig,
    /// Log filter and output format
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port` the listener binds to
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

/// Recent-event window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentConfig {
    /// Ring buffer capacity. Zero is clamped to one.
    pub capacity: usize,
    /// Entries rendered by the text report.
    pub report_limit: usize,
    /// Default entries returned by the debug listing.
    pub debug_limit: usize,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_RING_CAPACITY,
            report_limit: DEFAULT_REPORT_LIMIT,
            debug_limit: DEFAULT_DEBUG_LIMIT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

/// Deployment variant of the metric registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricProfileKind {
    /// Cross-IDE metric names, all four thread kinds.
    #[default]
    Unified,
    /// `vscode_`-prefixed metric names, `MAIN`/`WORKER` only.
    #[serde(rename = "vscode")]
    VsCode,
}

impl MetricProfileKind {
    /// Thread kinds this deployment accepts.
    #[must_use]
    pub const fn permitted_threads(self) -> &'static [ThreadKind] {
        match self {
            Self::Unified => &ThreadKind::ALL,
            Self::VsCode => &[ThreadKind::Main, ThreadKind::Worker],
        }
    }

    /// Stable configuration label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unified => "unified",
            Self::VsCode => "vscode",
        }
    }
}

impl fmt::Display for MetricProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricProfileKind {
    type Err = FreezeGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unified" => Ok(Self::Unified),
            "vscode" | "vs-code" | "vs_code" => Ok(Self::VsCode),
            other => Err(FreezeGuardError::Config(format!("Unknown metric profile: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = CollectorConfig::default();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.profile, MetricProfileKind::Unified);
        assert_eq!(config.recent.capacity, 256);
        assert_eq!(config.recent.report_limit, 50);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CollectorConfig =
            serde_json::from_str(r#"{"profile": "vscode", "recent": {"capacity": 16}}"#).unwrap();
        assert_eq!(config.profile, MetricProfileKind::VsCode);
        assert_eq!(config.recent.capacity, 16);
        assert_eq!(config.recent.report_limit, 50);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn profile_parsing_and_thread_sets() {
        assert_eq!("VSCode".parse::<MetricProfileKind>().unwrap(), MetricProfileKind::VsCode);
        assert_eq!(" unified ".parse::<MetricProfileKind>().unwrap(), MetricProfileKind::Unified);
        assert!(matches!(
            "jetbrains".parse::<MetricProfileKind>(),
            Err(FreezeGuardError::Config(_))
        ));

        assert_eq!(MetricProfileKind::Unified.permitted_threads().len(), 4);
        assert_eq!(
            MetricProfileKind::VsCode.permitted_threads(),
            &[ThreadKind::Main, ThreadKind::Worker]
        );
    }
}
