//! Session lifecycle controller
//!
//! Reacts to authentication transitions: reads the remote document, runs
//! the repair pass, writes corrections back, and hydrates the session
//! store. Each hydration carries a cancellation token tied to the session,
//! so a response arriving after sign-out (or after a newer sign-in) can
//! never hydrate the store for a stale session.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use skillbridge_domain::constants::PIONEER_BADGE_ID;
use skillbridge_domain::{AuthIdentity, DocumentPatch, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::ports::RemoteDocumentStore;
use crate::repair::{repair_at, RepairOutcome};
use crate::store::SessionStore;

use super::seed::seed_document;

/// Controller states across authentication transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Hydrating,
    Ready,
    Error,
}

enum Hydration {
    Completed,
    Aborted,
}

/// Orchestrates remote read, repair, write-back and store hydration.
///
/// The only component allowed to call [`SessionStore::set_full_data`].
pub struct SessionController {
    store: Arc<SessionStore>,
    remote: Arc<dyn RemoteDocumentStore>,
    state: RwLock<SessionState>,
    hydration_token: Mutex<CancellationToken>,
}

impl SessionController {
    /// Create a controller in the `Unauthenticated` state.
    pub fn new(store: Arc<SessionStore>, remote: Arc<dyn RemoteDocumentStore>) -> Self {
        Self {
            store,
            remote,
            state: RwLock::new(SessionState::Unauthenticated),
            hydration_token: Mutex::new(CancellationToken::new()),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// Handle an identity-change event from the authentication provider.
    ///
    /// A `None` identity is a sign-out: any in-flight hydration is
    /// cancelled and the controller returns to `Unauthenticated`. The store
    /// keeps its last data until the next successful hydration. A non-null
    /// identity starts hydration, replacing whatever was in flight.
    pub async fn on_auth_change(&self, identity: Option<AuthIdentity>) {
        let token = {
            let mut current = self.hydration_token.lock();
            current.cancel();
            *current = CancellationToken::new();
            current.clone()
        };

        let Some(identity) = identity else {
            info!("auth identity cleared; session unauthenticated");
            *self.state.write() = SessionState::Unauthenticated;
            return;
        };

        info!(uid = %identity.uid, "auth identity changed; hydrating session");
        *self.state.write() = SessionState::Hydrating;

        match self.hydrate(&identity, &token).await {
            Ok(Hydration::Completed) => {
                *self.state.write() = SessionState::Ready;
                self.touch_last_seen(&identity);
            }
            Ok(Hydration::Aborted) => {
                debug!(uid = %identity.uid, "hydration aborted; session superseded");
            }
            Err(err) => {
                error!(uid = %identity.uid, error = %err, "session hydration failed");
                if !token.is_cancelled() {
                    *self.state.write() = SessionState::Error;
                }
            }
        }
    }

    async fn hydrate(
        &self,
        identity: &AuthIdentity,
        token: &CancellationToken,
    ) -> Result<Hydration> {
        let existing = self.remote.get(&identity.uid).await?;
        if token.is_cancelled() {
            return Ok(Hydration::Aborted);
        }

        match existing {
            None => {
                // First sign-in: provision the account before hydrating.
                let document = seed_document(identity, Utc::now());
                self.remote.set(&identity.uid, &document).await?;
                if token.is_cancelled() {
                    return Ok(Hydration::Aborted);
                }

                let celebration = document
                    .badges
                    .iter()
                    .find(|badge| badge.id == PIONEER_BADGE_ID)
                    .cloned();
                info!(uid = %identity.uid, "provisioned new account document");
                self.store.set_full_data(document.into(), celebration);
            }
            Some(document) => {
                let outcome = repair_at(document, Utc::now());
                persist_if_modified(self.remote.as_ref(), &identity.uid, &outcome).await?;
                if token.is_cancelled() {
                    return Ok(Hydration::Aborted);
                }

                self.store.set_full_data(outcome.document.into(), None);
            }
        }

        Ok(Hydration::Completed)
    }

    // Fire-and-forget: never gates hydration, failures are only logged.
    fn touch_last_seen(&self, identity: &AuthIdentity) {
        let remote = Arc::clone(&self.remote);
        let uid = identity.uid.clone();
        tokio::spawn(async move {
            let patch = DocumentPatch::new().with_last_seen_at(Utc::now());
            if let Err(err) = remote.update(&uid, patch).await {
                debug!(uid = %uid, error = %err, "failed to touch last-seen timestamp");
            }
        });
    }
}

/// Write the corrected badge and notification collections back to the
/// remote document when the repair pass changed data.
///
/// The write-back is scoped to the two repaired collections; profile,
/// skills, saved content and reviews are never part of it. Returns whether
/// a write was issued.
pub async fn persist_if_modified(
    remote: &dyn RemoteDocumentStore,
    key: &str,
    outcome: &RepairOutcome,
) -> Result<bool> {
    if !outcome.was_modified {
        return Ok(false);
    }

    let patch = DocumentPatch::new()
        .with_badges(outcome.document.badges.clone())
        .with_notifications(outcome.document.notifications.clone());

    match remote.update(key, patch).await {
        Ok(()) => {
            info!(uid = %key, "persisted repaired document collections");
            Ok(true)
        }
        Err(err) => {
            warn!(uid = %key, error = %err, "failed to persist repaired collections");
            Err(err)
        }
    }
}
