//! Integration scenarios for the session lifecycle controller.

mod support;

use std::sync::Arc;

use skillbridge_core::{SessionController, SessionState, SessionStore};
use skillbridge_domain::constants::{BADGE_SET_SIZE, PIONEER_BADGE_ID};
use skillbridge_domain::{AuthIdentity, Badge, Notification, UserDocument};
use support::MockDocumentStore;
use tokio::sync::Notify;

fn identity(uid: &str) -> AuthIdentity {
    AuthIdentity {
        uid: uid.into(),
        display_name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        photo_url: None,
    }
}

fn controller_with(remote: Arc<MockDocumentStore>) -> (Arc<SessionController>, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    let controller = Arc::new(SessionController::new(Arc::clone(&store), remote));
    (controller, store)
}

#[tokio::test]
async fn new_identity_provisions_seed_document_and_celebrates() {
    let remote = Arc::new(MockDocumentStore::new());
    let (controller, store) = controller_with(Arc::clone(&remote));

    controller.on_auth_change(Some(identity("u1"))).await;

    assert_eq!(controller.state(), SessionState::Ready);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.badges.len(), BADGE_SET_SIZE);
    assert!(snapshot.badges[0].earned);
    assert_eq!(snapshot.notifications.len(), 1);
    assert!(snapshot.skills.is_empty());
    assert!(snapshot.reviews.is_empty());
    assert!(snapshot.saved_content.is_empty());
    assert_eq!(snapshot.profile.name, "Ada Lovelace");

    let celebration = store.celebration().expect("new accounts celebrate the Pioneer badge");
    assert_eq!(celebration.id, PIONEER_BADGE_ID);

    let sets = remote.sets.lock().clone();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].0, "u1");
    assert!(remote.data_updates().is_empty(), "seed write should not also merge-write");
}

#[tokio::test]
async fn existing_empty_collections_are_repaired_and_written_back_once() {
    let remote = Arc::new(MockDocumentStore::new());
    let mut document = UserDocument::default();
    document.profile.name = "Zoe".into();
    document.skills = vec!["Rust".into()];
    remote.seed("u2", document);

    let (controller, store) = controller_with(Arc::clone(&remote));
    controller.on_auth_change(Some(identity("u2"))).await;

    assert_eq!(controller.state(), SessionState::Ready);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.badges.len(), BADGE_SET_SIZE);
    assert!(snapshot.badges[0].earned);
    assert_eq!(snapshot.notifications.len(), 1);
    assert_eq!(snapshot.profile.name, "Zoe");
    assert_eq!(snapshot.skills, vec!["Rust".to_string()]);
    assert!(store.celebration().is_none(), "repair does not celebrate");

    let updates = remote.data_updates();
    assert_eq!(updates.len(), 1, "exactly one repair write-back");
    let (key, patch) = &updates[0];
    assert_eq!(key, "u2");
    assert!(patch.badges.is_some());
    assert!(patch.notifications.is_some());
    assert!(patch.profile.is_none(), "write-back must not carry the profile");
    assert!(patch.skills.is_none(), "write-back must not carry skills");
    assert!(remote.sets.lock().is_empty());
}

#[tokio::test]
async fn healthy_document_hydrates_without_write_back() {
    let remote = Arc::new(MockDocumentStore::new());
    let mut document = UserDocument::default();
    document.badges = Badge::seed_set();
    document.badges[0].earned = true;
    document.badges[0].earned_date = Some("May 5, 2025".into());
    document.notifications.push(Notification::welcome(chrono::Utc::now()));
    remote.seed("u3", document);

    let (controller, _store) = controller_with(Arc::clone(&remote));
    controller.on_auth_change(Some(identity("u3"))).await;

    assert_eq!(controller.state(), SessionState::Ready);
    assert!(remote.data_updates().is_empty());
}

#[tokio::test]
async fn read_failure_moves_controller_to_error() {
    let remote = Arc::new(MockDocumentStore::new());
    remote.fail_reads();

    let (controller, store) = controller_with(Arc::clone(&remote));
    controller.on_auth_change(Some(identity("u1"))).await;

    assert_eq!(controller.state(), SessionState::Error);
    assert!(store.snapshot().badges.is_empty(), "failed hydration must not touch the store");
}

#[tokio::test]
async fn repair_write_back_failure_moves_controller_to_error() {
    let remote = Arc::new(MockDocumentStore::new());
    remote.seed("u2", UserDocument::default());
    remote.fail_updates_only();

    let (controller, store) = controller_with(Arc::clone(&remote));
    controller.on_auth_change(Some(identity("u2"))).await;

    assert_eq!(controller.state(), SessionState::Error);
    assert!(store.snapshot().badges.is_empty());
}

#[tokio::test]
async fn seed_write_failure_moves_controller_to_error() {
    let remote = Arc::new(MockDocumentStore::new());
    remote.fail_writes();

    let (controller, store) = controller_with(Arc::clone(&remote));
    controller.on_auth_change(Some(identity("u1"))).await;

    assert_eq!(controller.state(), SessionState::Error);
    assert!(store.snapshot().badges.is_empty());
    assert!(store.celebration().is_none());
}

#[tokio::test]
async fn sign_out_returns_to_unauthenticated_and_keeps_stale_data() {
    let remote = Arc::new(MockDocumentStore::new());
    let (controller, store) = controller_with(Arc::clone(&remote));

    controller.on_auth_change(Some(identity("u1"))).await;
    assert_eq!(controller.state(), SessionState::Ready);

    controller.on_auth_change(None).await;
    assert_eq!(controller.state(), SessionState::Unauthenticated);
    // The store intentionally keeps its data until the next hydration.
    assert_eq!(store.snapshot().badges.len(), BADGE_SET_SIZE);
}

#[tokio::test]
async fn sign_out_during_hydration_discards_the_late_response() {
    let gate = Arc::new(Notify::new());
    let remote = Arc::new(MockDocumentStore::gated(Arc::clone(&gate)));
    remote.seed("u1", UserDocument::default());

    let (controller, store) = controller_with(Arc::clone(&remote));

    let in_flight = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller.on_auth_change(Some(identity("u1"))).await;
        })
    };
    tokio::task::yield_now().await;
    assert_eq!(controller.state(), SessionState::Hydrating);

    controller.on_auth_change(None).await;
    gate.notify_one();
    in_flight.await.expect("hydration task panicked");

    assert_eq!(controller.state(), SessionState::Unauthenticated);
    assert!(store.snapshot().badges.is_empty(), "late response must not hydrate the store");
}

#[tokio::test]
async fn newer_sign_in_supersedes_inflight_hydration() {
    let gate = Arc::new(Notify::new());
    let remote = Arc::new(MockDocumentStore::gated(Arc::clone(&gate)));
    let mut old_doc = UserDocument::default();
    old_doc.profile.name = "Old".into();
    remote.seed("u1", old_doc);
    let mut new_doc = UserDocument::default();
    new_doc.profile.name = "New".into();
    remote.seed("u2", new_doc);

    let (controller, store) = controller_with(Arc::clone(&remote));

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller.on_auth_change(Some(identity("u1"))).await;
        })
    };
    tokio::task::yield_now().await;

    let second = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller.on_auth_change(Some(identity("u2"))).await;
        })
    };
    tokio::task::yield_now().await;

    // Release both pending reads; only the newer session may hydrate.
    gate.notify_one();
    gate.notify_one();
    first.await.expect("first hydration panicked");
    second.await.expect("second hydration panicked");

    assert_eq!(controller.state(), SessionState::Ready);
    assert_eq!(store.snapshot().profile.name, "New");
}
