//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SKILLBRIDGE_REMOTE_BASE_URL`: Base URL of the document service
//! - `SKILLBRIDGE_REMOTE_TIMEOUT_SECS`: Request timeout in seconds
//! - `SKILLBRIDGE_REMOTE_MAX_RETRIES`: Total attempts for transient failures
//! - `SKILLBRIDGE_REMOTE_API_TOKEN`: Optional bearer token
//! - `SKILLBRIDGE_LOG_LEVEL`: Log level filter (default: `info`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./skillbridge.json` or `./skillbridge.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use skillbridge_domain::{Config, RemoteStoreConfig, Result, SkillBridgeError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SkillBridgeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    // Pick up a local .env file when present.
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `SKILLBRIDGE_REMOTE_BASE_URL` is required; the rest fall back to
/// defaults when unset.
///
/// # Errors
/// Returns `SkillBridgeError::Config` if the base URL is missing or a
/// numeric variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("SKILLBRIDGE_REMOTE_BASE_URL")?;

    let defaults = RemoteStoreConfig::default();
    let timeout_seconds = match std::env::var("SKILLBRIDGE_REMOTE_TIMEOUT_SECS") {
        Ok(s) => s
            .parse::<u64>()
            .map_err(|e| SkillBridgeError::Config(format!("Invalid timeout: {e}")))?,
        Err(_) => defaults.timeout_seconds,
    };
    let max_retries = match std::env::var("SKILLBRIDGE_REMOTE_MAX_RETRIES") {
        Ok(s) => s
            .parse::<usize>()
            .map_err(|e| SkillBridgeError::Config(format!("Invalid retry count: {e}")))?,
        Err(_) => defaults.max_retries,
    };
    let api_token = std::env::var("SKILLBRIDGE_REMOTE_API_TOKEN").ok();
    let log_level =
        std::env::var("SKILLBRIDGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    Ok(Config {
        remote: RemoteStoreConfig { base_url, timeout_seconds, max_retries, api_token },
        log_level,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SkillBridgeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SkillBridgeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SkillBridgeError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SkillBridgeError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SkillBridgeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SkillBridgeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SkillBridgeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("skillbridge.json"),
            cwd.join("skillbridge.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("skillbridge.json"),
                exe_dir.join("skillbridge.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `SkillBridgeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SkillBridgeError::Config(format!("Missing required environment variable: {key}"))
    })
}
