//! Configuration loader
//!
//! Loads engine configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Falls back to built-in defaults when neither source exists
//!
//! ## Environment Variables
//! - `QUESTLOG_DB_PATH`: Database file path
//! - `QUESTLOG_DB_POOL_SIZE`: Connection pool size
//! - `QUESTLOG_CLUSTER_RADIUS_M`: Marker grouping radius in meters
//! - `QUESTLOG_TRAIL_ENABLED`: Whether the day trail overlay is on (true/false)
//! - `QUESTLOG_DAILY_GOAL`: Default daily approach goal
//! - `QUESTLOG_TEST_MODE`: Whether captured fixes are scattered (true/false)
//! - `QUESTLOG_TEST_RADIUS_M`: Scatter radius in meters
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./questlog.json` or `./questlog.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use questlog_domain::{
    Config, GoalsConfig, LocationConfig, MapConfig, QuestlogError, Result, StorageConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from a config
/// file found in one of the standard locations. When neither source is
/// usable the built-in defaults are returned, so this never fails.
pub fn load() -> Config {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return config;
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Environment configuration incomplete, trying file");
        }
    }

    match probe_config_paths() {
        Some(path) => match load_from_file(Some(path.clone())) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Config file unreadable, using defaults"
                );
                Config::default()
            }
        },
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `QuestlogError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("QUESTLOG_DB_PATH")?;
    let db_pool_size = env_var("QUESTLOG_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| QuestlogError::Config(format!("Invalid pool size: {}", e)))
    })?;

    let cluster_radius_m = env_var("QUESTLOG_CLUSTER_RADIUS_M").and_then(|s| {
        s.parse::<f64>()
            .map_err(|e| QuestlogError::Config(format!("Invalid cluster radius: {}", e)))
    })?;
    let trail_enabled = env_bool("QUESTLOG_TRAIL_ENABLED", false);

    let default_daily_goal = env_var("QUESTLOG_DAILY_GOAL").and_then(|s| {
        s.parse::<u32>().map_err(|e| QuestlogError::Config(format!("Invalid daily goal: {}", e)))
    })?;

    let test_mode = env_bool("QUESTLOG_TEST_MODE", false);
    let test_radius_m = env_var("QUESTLOG_TEST_RADIUS_M").and_then(|s| {
        s.parse::<f64>().map_err(|e| QuestlogError::Config(format!("Invalid test radius: {}", e)))
    })?;

    Ok(Config {
        storage: StorageConfig { path: db_path, pool_size: db_pool_size },
        map: MapConfig { cluster_radius_m, trail_enabled },
        goals: GoalsConfig { default_daily_goal },
        location: LocationConfig { test_mode, test_radius_m },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `QuestlogError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(QuestlogError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            QuestlogError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| QuestlogError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `QuestlogError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| QuestlogError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| QuestlogError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(QuestlogError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./questlog.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("questlog.json"),
            cwd.join("questlog.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("questlog.json"),
                exe_dir.join("questlog.toml"),
                exe_dir.join("../config.json"),
                exe_dir.join("../config.toml"),
                exe_dir.join("../../config.json"),
                exe_dir.join("../../config.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `QuestlogError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        QuestlogError::Config(format!("Missing required environment variable: {}", key))
    })
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
