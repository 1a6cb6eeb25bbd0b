//! Configuration loader
//!
//! Builds a [`CollectorConfig`] from defaults, an optional config file and
//! environment overrides.
//!
//! ## Loading Strategy
//! 1. Start from [`CollectorConfig::default`]
//! 2. If `FREEZEGUARD_CONFIG` is set, load that file (it must exist)
//! 3. Otherwise search the standard locations; a missing file is not an error
//! 4. Apply environment overrides on top
//!
//! ## Environment Variables
//! - `FREEZEGUARD_CONFIG`: Explicit config file path
//! - `FREEZEGUARD_BIND_ADDR`: Listener address
//! - `FREEZEGUARD_PROFILE`: Metric profile (`unified` or `vscode`)
//! - `FREEZEGUARD_RING_CAPACITY`: Recent-event buffer capacity
//! - `FREEZEGUARD_REPORT_LIMIT`: Entries shown by the report view
//! - `FREEZEGUARD_DEBUG_LIMIT`: Default entries shown by the debug view
//! - `FREEZEGUARD_LOG_LEVEL`: Default log filter directive
//! - `FREEZEGUARD_LOG_JSON`: JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./freezeguard.toml` or `./freezeguard.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use freezeguard_domain::{CollectorConfig, FreezeGuardError, MetricProfileKind, Result};

const CONFIG_PATH_VAR: &str = "FREEZEGUARD_CONFIG";
const CANDIDATE_NAMES: [&str; 4] =
    ["freezeguard.toml", "freezeguard.json", "config.toml", "config.json"];

/// Load configuration with file discovery and environment overrides
///
/// # Errors
/// Returns `FreezeGuardError::Config` if:
/// - `FREEZEGUARD_CONFIG` names a file that does not exist
/// - A config file is malformed or has an unsupported extension
/// - An environment override has an invalid value
pub fn load() -> Result<CollectorConfig> {
    let explicit = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);

    let mut config = match explicit.or_else(search_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            CollectorConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations. Format is detected by
/// extension (`.toml` or `.json`); missing sections take their defaults.
///
/// # Errors
/// Returns `FreezeGuardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<CollectorConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FreezeGuardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => search_config_paths().ok_or_else(|| {
            FreezeGuardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FreezeGuardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Apply `FREEZEGUARD_*` overrides to `config`
///
/// Unset variables leave the current value untouched.
///
/// # Errors
/// Returns `FreezeGuardError::Config` for unparsable numbers or unknown
/// profile names.
pub fn apply_env_overrides(config: &mut CollectorConfig) -> Result<()> {
    if let Some(addr) = env_var("FREEZEGUARD_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    if let Some(profile) = env_var("FREEZEGUARD_PROFILE") {
        config.profile = MetricProfileKind::from_str(&profile)?;
    }
    if let Some(capacity) = env_parse::<usize>("FREEZEGUARD_RING_CAPACITY")? {
        config.recent.capacity = capacity;
    }
    if let Some(limit) = env_parse::<usize>("FREEZEGUARD_REPORT_LIMIT")? {
        config.recent.report_limit = limit;
    }
    if let Some(limit) = env_parse::<usize>("FREEZEGUARD_DEBUG_LIMIT")? {
        config.recent.debug_limit = limit;
    }
    if let Some(level) = env_var("FREEZEGUARD_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("FREEZEGUARD_LOG_JSON", config.logging.json);
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `FreezeGuardError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<CollectorConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FreezeGuardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FreezeGuardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(FreezeGuardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search standard paths for configuration files
///
/// Searches the current working directory first, then the directory holding
/// the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn search_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CANDIDATE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CANDIDATE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `FreezeGuardError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| FreezeGuardError::Config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const OVERRIDE_VARS: [&str; 8] = [
        "FREEZEGUARD_CONFIG",
        "FREEZEGUARD_BIND_ADDR",
        "FREEZEGUARD_PROFILE",
        "FREEZEGUARD_RING_CAPACITY",
        "FREEZEGUARD_REPORT_LIMIT",
        "FREEZEGUARD_DEBUG_LIMIT",
        "FREEZEGUARD_LOG_LEVEL",
        "FREEZEGUARD_LOG_JSON",
    ];

    fn clear_overrides() {
        for key in OVERRIDE_VARS {
            std::env::remove_var(key);
        }
    }

    fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("TEST_FG_BOOL_YES", "yes");
        std::env::set_var("TEST_FG_BOOL_UPPER", "TRUE");
        std::env::set_var("TEST_FG_BOOL_OFF", "off");

        assert!(env_bool("TEST_FG_BOOL_YES", false));
        assert!(env_bool("TEST_FG_BOOL_UPPER", false));
        assert!(!env_bool("TEST_FG_BOOL_OFF", true));

        std::env::remove_var("TEST_FG_BOOL_MISSING");
        assert!(env_bool("TEST_FG_BOOL_MISSING", true));
        assert!(!env_bool("TEST_FG_BOOL_MISSING", false));

        std::env::remove_var("TEST_FG_BOOL_YES");
        std::env::remove_var("TEST_FG_BOOL_UPPER");
        std::env::remove_var("TEST_FG_BOOL_OFF");
    }

    #[test]
    fn test_env_overrides_apply_on_top_of_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_overrides();

        std::env::set_var("FREEZEGUARD_BIND_ADDR", "127.0.0.1:9100");
        std::env::set_var("FREEZEGUARD_PROFILE", "vscode");
        std::env::set_var("FREEZEGUARD_RING_CAPACITY", "32");
        std::env::set_var("FREEZEGUARD_LOG_JSON", "1");

        let mut config = CollectorConfig::default();
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:9100");
        assert_eq!(config.profile, MetricProfileKind::VsCode);
        assert_eq!(config.recent.capacity, 32);
        assert_eq!(config.recent.report_limit, 50);
        assert!(config.logging.json);

        clear_overrides();
    }

    #[test]
    fn test_invalid_number_override_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_overrides();

        std::env::set_var("FREEZEGUARD_RING_CAPACITY", "lots");
        let result = apply_env_overrides(&mut CollectorConfig::default());
        assert!(matches!(result, Err(FreezeGuardError::Config(_))), "{:?}", result);

        clear_overrides();
    }

    #[test]
    fn test_unknown_profile_override_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_overrides();

        std::env::set_var("FREEZEGUARD_PROFILE", "emacs");
        let result = apply_env_overrides(&mut CollectorConfig::default());
        assert!(matches!(result, Err(FreezeGuardError::Config(_))));

        clear_overrides();
    }

    #[test]
    fn test_load_uses_explicit_file_then_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_overrides();

        let file = config_file(
            ".toml",
            r#"
profile = "vscode"

[recent]
capacity = 16
"#,
        );
        std::env::set_var("FREEZEGUARD_CONFIG", file.path());
        std::env::set_var("FREEZEGUARD_REPORT_LIMIT", "5");

        let config = load().unwrap();
        assert_eq!(config.profile, MetricProfileKind::VsCode);
        assert_eq!(config.recent.capacity, 16);
        assert_eq!(config.recent.report_limit, 5);
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");

        clear_overrides();
    }

    #[test]
    fn test_load_with_missing_explicit_file_fails() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_overrides();

        std::env::set_var("FREEZEGUARD_CONFIG", "/nonexistent/freezeguard.toml");
        assert!(matches!(load(), Err(FreezeGuardError::Config(_))));

        clear_overrides();
    }

    #[test]
    fn test_load_from_file_json() {
        let file = config_file(
            ".json",
            r#"{ "server": { "bind_addr": "127.0.0.1:7000" }, "logging": { "level": "debug" } }"#,
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:7000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.recent.capacity, 256);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(FreezeGuardError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let file = config_file(".json", r#"{ "this is": "not valid json" "#);
        assert!(load_from_file(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
