//! Configuration structures for the application

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub remote: RemoteStoreConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Configuration for the remote document service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base URL of the document service, e.g. "https://api.skillbridge.app"
    pub base_url: String,
    /// Timeout for document service requests, in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Total attempts (initial try + retries) for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    /// Optional bearer token for the document service
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: default_timeout_seconds(),
            max_retries: default_max_retries(),
            api_token: None,
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}
