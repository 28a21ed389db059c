//! # SkillBridge Domain
//!
//! Business domain types and models for SkillBridge.
//!
//! This crate contains:
//! - Per-user document types (profile, badges, reviews, notifications)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Seed data and domain constants
//!
//! ## Architecture
//! - No dependencies on other SkillBridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
