//! # SkillBridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The reactive session store the UI reads from
//! - The document repair engine for schema-drift backfill
//! - The session lifecycle controller (hydration on auth transitions)
//! - The mutation/persistence bridge for optimistic edits
//! - Port/adapter interfaces (traits) for the remote document store
//!
//! ## Architecture Principles
//! - Only depends on `skillbridge-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod mutations;
pub mod ports;
pub mod repair;
pub mod session;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use mutations::{MutationError, MutationService, NewReview};
pub use ports::{NoticeChannel, NoticeSeverity, RemoteDocumentStore};
pub use repair::{repair, repair_at, RepairOutcome};
pub use session::{persist_if_modified, seed_document, SessionController, SessionState};
pub use store::{SessionStore, StoreEvent, StoreSnapshot, SubscriptionId};
