use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use skillbridge_core::RemoteDocumentStore;
use skillbridge_domain::{DocumentPatch, Result, UserDocument};

/// In-memory [`RemoteDocumentStore`] for local development and tests.
///
/// Merge-writes behave like the REST backend: a patch only touches the
/// fields it carries, and patching a missing key creates the document
/// from defaults.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: Mutex<HashMap<String, UserDocument>>,
}

impl InMemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document, bypassing the port.
    pub fn insert(&self, key: impl Into<String>, document: UserDocument) {
        self.documents.lock().insert(key.into(), document);
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }
}

#[async_trait]
impl RemoteDocumentStore for InMemoryDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<UserDocument>> {
        Ok(self.documents.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, document: &UserDocument) -> Result<()> {
        self.documents.lock().insert(key.to_string(), document.clone());
        Ok(())
    }

    async fn update(&self, key: &str, patch: DocumentPatch) -> Result<()> {
        let mut documents = self.documents.lock();
        let document = documents.entry(key.to_string()).or_default();
        patch.apply_to(document);
        Ok(())
    }
}
