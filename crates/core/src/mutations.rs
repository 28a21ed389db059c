//! Mutation/persistence bridge
//!
//! Every durable edit follows the same two-phase contract: validate the
//! input, apply it to the session store immediately (optimistic update),
//! then issue a partial merge-write scoped to the changed top-level field.
//! Persistence failures leave the optimistic state in place and surface as
//! `MutationError::Persistence`; reconciling is the caller's decision.

use std::sync::Arc;

use chrono::Utc;
use skillbridge_domain::constants::{EARNED_DATE_FORMAT, MAX_RATING, MIN_RATING};
use skillbridge_domain::{DocumentPatch, ProfileUpdate, Review, SkillBridgeError};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::ports::{NoticeChannel, NoticeSeverity, RemoteDocumentStore};
use crate::store::SessionStore;

/// Failure modes of a bridge mutation.
#[derive(Debug, Error)]
pub enum MutationError {
    /// Input rejected before any store mutation; no I/O was attempted.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// The optimistic store update was applied but the remote write
    /// failed. Local and remote state have diverged.
    #[error("persistence failed: {0}")]
    Persistence(#[from] SkillBridgeError),
}

/// Input for a new mentor review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub mentor_id: u32,
    pub rating: u8,
    pub comment: String,
}

/// Applies optimistic edits to the store and persists them as partial
/// merge-writes, one service instance per signed-in session.
pub struct MutationService {
    store: Arc<SessionStore>,
    remote: Arc<dyn RemoteDocumentStore>,
    notices: Arc<dyn NoticeChannel>,
    user_key: String,
}

impl MutationService {
    /// Create a bridge bound to the signed-in user's document key.
    pub fn new(
        store: Arc<SessionStore>,
        remote: Arc<dyn RemoteDocumentStore>,
        notices: Arc<dyn NoticeChannel>,
        user_key: impl Into<String>,
    ) -> Self {
        Self { store, remote, notices, user_key: user_key.into() }
    }

    /// Apply a profile edit and persist the merged profile.
    ///
    /// Sanitization runs twice: once on the form snapshot and once on the
    /// merged profile, since either input can carry absent values through a
    /// different path and the document service rejects them.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<(), MutationError> {
        let update = update.sanitized();
        if update.name.as_deref().is_some_and(str::is_empty) {
            return Err(MutationError::Invalid("profile name cannot be empty".into()));
        }

        let merged = update.apply_to(&self.store.snapshot().profile).sanitized();
        self.store.set_profile(merged.clone());

        let patch = DocumentPatch::new().with_profile(merged);
        match self.remote.update(&self.user_key, patch).await {
            Ok(()) => {
                self.notices.notify("Profile updated", NoticeSeverity::Success);
                Ok(())
            }
            Err(err) => {
                warn!(uid = %self.user_key, error = %err, "profile write failed");
                self.notices.notify("Could not save your profile", NoticeSeverity::Error);
                Err(err.into())
            }
        }
    }

    /// Add a skill. Empty and duplicate (exact-match) skills are rejected
    /// before any store mutation.
    pub async fn add_skill(&self, skill: &str) -> Result<(), MutationError> {
        let skill = skill.trim().to_string();
        if skill.is_empty() {
            return Err(MutationError::Invalid("skill cannot be empty".into()));
        }
        if !self.store.add_skill(&skill) {
            return Err(MutationError::Invalid(format!("skill '{skill}' already added")));
        }

        self.persist_skills().await
    }

    /// Remove a skill. Removal is permanent and immediate.
    pub async fn remove_skill(&self, skill: &str) -> Result<(), MutationError> {
        if !self.store.remove_skill(skill) {
            return Err(MutationError::Invalid(format!("skill '{skill}' is not present")));
        }

        self.persist_skills().await
    }

    async fn persist_skills(&self) -> Result<(), MutationError> {
        let patch = DocumentPatch::new().with_skills(self.store.snapshot().skills);
        match self.remote.update(&self.user_key, patch).await {
            Ok(()) => {
                self.notices.notify("Skills updated", NoticeSeverity::Success);
                Ok(())
            }
            Err(err) => {
                warn!(uid = %self.user_key, error = %err, "skills write failed");
                self.notices.notify("Could not save your skills", NoticeSeverity::Error);
                Err(err.into())
            }
        }
    }

    /// Mark a badge as earned and persist the badge collection. Already
    /// earned badges are a no-op; unknown ids are rejected.
    pub async fn unlock_badge(&self, badge_id: u32) -> Result<(), MutationError> {
        let known = self.store.snapshot().badges.iter().any(|badge| badge.id == badge_id);
        if !known {
            return Err(MutationError::Invalid(format!("unknown badge id {badge_id}")));
        }

        let earned_date = Utc::now().format(EARNED_DATE_FORMAT).to_string();
        if self.store.unlock_badge(badge_id, earned_date).is_none() {
            return Ok(());
        }

        let patch = DocumentPatch::new().with_badges(self.store.snapshot().badges);
        self.remote.update(&self.user_key, patch).await.map_err(|err| {
            warn!(uid = %self.user_key, badge_id, error = %err, "badge write failed");
            MutationError::Persistence(err)
        })
    }

    /// Submit a mentor review, denormalizing the current profile's display
    /// name and avatar into the review.
    pub async fn submit_review(&self, review: NewReview) -> Result<(), MutationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
            return Err(MutationError::Invalid(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        let comment = review.comment.trim().to_string();
        if comment.is_empty() {
            return Err(MutationError::Invalid("review comment cannot be empty".into()));
        }

        let profile = self.store.snapshot().profile;
        let entry = Review {
            id: Uuid::new_v4(),
            mentor_id: review.mentor_id,
            author_name: profile.name,
            author_avatar: profile.avatar_url,
            rating: review.rating,
            comment,
            date: Utc::now().format(EARNED_DATE_FORMAT).to_string(),
        };
        self.store.add_review(entry);

        let patch = DocumentPatch::new().with_reviews(self.store.snapshot().reviews);
        self.remote.update(&self.user_key, patch).await.map_err(|err| {
            warn!(uid = %self.user_key, mentor_id = review.mentor_id, error = %err, "review write failed");
            MutationError::Persistence(err)
        })
    }

    /// Toggle saved-content membership for a catalog item.
    pub async fn toggle_saved(&self, content_id: u32) -> Result<(), MutationError> {
        self.store.toggle_saved(content_id);

        let patch = DocumentPatch::new().with_saved_content(self.store.snapshot().saved_content);
        self.remote.update(&self.user_key, patch).await.map_err(|err| {
            warn!(uid = %self.user_key, content_id, error = %err, "saved-content write failed");
            MutationError::Persistence(err)
        })
    }

    /// Flip a notification's read flag. Already-read notifications are a
    /// no-op; unknown ids are rejected.
    pub async fn mark_notification_read(&self, notification_id: u32) -> Result<(), MutationError> {
        let known = self
            .store
            .snapshot()
            .notifications
            .iter()
            .any(|notification| notification.id == notification_id);
        if !known {
            return Err(MutationError::Invalid(format!(
                "unknown notification id {notification_id}"
            )));
        }

        if !self.store.mark_notification_read(notification_id) {
            return Ok(());
        }

        let patch = DocumentPatch::new().with_notifications(self.store.snapshot().notifications);
        self.remote.update(&self.user_key, patch).await.map_err(|err| {
            warn!(uid = %self.user_key, notification_id, error = %err, "notification write failed");
            MutationError::Persistence(err)
        })
    }
}
