//! # SkillBridge Infra
//!
//! Infrastructure adapters for the SkillBridge core:
//! - REST and in-memory implementations of the remote document store port
//! - Retrying HTTP client plumbing
//! - Configuration loading (environment first, file fallback)
//! - Telemetry initialisation

pub mod config;
pub mod http;
pub mod observability;
pub mod remote;

pub use http::{HttpClient, HttpClientBuilder};
pub use remote::{InMemoryDocumentStore, RestDocumentStore, RestDocumentStoreConfig};
