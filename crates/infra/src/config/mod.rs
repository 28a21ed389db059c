//! Configuration loading and management
//!
//! Loads application configuration from environment variables with a
//! config-file fallback.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
