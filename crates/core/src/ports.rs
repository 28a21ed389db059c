//! Port interfaces for session hydration and persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use skillbridge_domain::{DocumentPatch, Result, UserDocument};

/// Trait for the remote per-user document service.
///
/// Documents are schemaless JSON-like structures keyed by the user's
/// stable authentication id.
#[async_trait]
pub trait RemoteDocumentStore: Send + Sync {
    /// Read the document for a user. Returns `None` when no document exists.
    async fn get(&self, key: &str) -> Result<Option<UserDocument>>;

    /// Write a full document, replacing whatever is stored.
    async fn set(&self, key: &str, document: &UserDocument) -> Result<()>;

    /// Merge-write a partial document scoped to the carried fields.
    async fn update(&self, key: &str, patch: DocumentPatch) -> Result<()>;
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Success,
    Error,
}

/// Fire-and-forget channel for user-visible feedback on mutations.
///
/// The presentational layer renders these as toasts; the core never waits
/// on delivery.
pub trait NoticeChannel: Send + Sync {
    /// Emit a notice to the user.
    fn notify(&self, message: &str, severity: NoticeSeverity);
}
