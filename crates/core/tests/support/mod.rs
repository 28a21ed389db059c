//! Shared test doubles for session and mutation integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use skillbridge_core::{NoticeChannel, NoticeSeverity, RemoteDocumentStore};
use skillbridge_domain::{DocumentPatch, Result, SkillBridgeError, UserDocument};
use tokio::sync::Notify;

/// In-memory document store that records every call and can be scripted to
/// fail or to block reads behind a gate.
#[derive(Default)]
pub struct MockDocumentStore {
    documents: Mutex<HashMap<String, UserDocument>>,
    pub sets: Mutex<Vec<(String, UserDocument)>>,
    pub updates: Mutex<Vec<(String, DocumentPatch)>>,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
    fail_update: AtomicBool,
    read_gate: Option<Arc<Notify>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads block until [`Notify::notify_one`] is called.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self { read_gate: Some(gate), ..Self::default() }
    }

    pub fn seed(&self, key: &str, document: UserDocument) {
        self.documents.lock().insert(key.to_string(), document);
    }

    pub fn stored(&self, key: &str) -> Option<UserDocument> {
        self.documents.lock().get(key).cloned()
    }

    pub fn fail_reads(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_set.store(true, Ordering::SeqCst);
        self.fail_update.store(true, Ordering::SeqCst);
    }

    pub fn fail_updates_only(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    /// Recorded merge-writes excluding fire-and-forget last-seen touches.
    pub fn data_updates(&self) -> Vec<(String, DocumentPatch)> {
        self.updates
            .lock()
            .iter()
            .filter(|(_, patch)| patch.last_seen_at.is_none())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RemoteDocumentStore for MockDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<UserDocument>> {
        if let Some(gate) = &self.read_gate {
            gate.notified().await;
        }
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(SkillBridgeError::Remote("document service unreachable".into()));
        }
        Ok(self.documents.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, document: &UserDocument) -> Result<()> {
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(SkillBridgeError::Remote("write rejected".into()));
        }
        self.sets.lock().push((key.to_string(), document.clone()));
        self.documents.lock().insert(key.to_string(), document.clone());
        Ok(())
    }

    async fn update(&self, key: &str, patch: DocumentPatch) -> Result<()> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(SkillBridgeError::Remote("merge write rejected".into()));
        }
        self.updates.lock().push((key.to_string(), patch.clone()));
        let mut documents = self.documents.lock();
        let document = documents.entry(key.to_string()).or_default();
        patch.apply_to(document);
        Ok(())
    }
}

/// Notice channel that records emissions for assertions.
#[derive(Default)]
pub struct RecordingNotices {
    pub emitted: Mutex<Vec<(String, NoticeSeverity)>>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, NoticeSeverity)> {
        self.emitted.lock().clone()
    }
}

impl NoticeChannel for RecordingNotices {
    fn notify(&self, message: &str, severity: NoticeSeverity) {
        self.emitted.lock().push((message.to_string(), severity));
    }
}
