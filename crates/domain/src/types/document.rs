//! Remote per-user document and the merge-write patch
//!
//! The document service stores one schemaless JSON document per user. Older
//! documents may be missing entire collections, so every top-level field
//! decodes with a default; the repair pass backfills what schema evolution
//! left behind.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::badge::Badge;
use super::notification::Notification;
use super::profile::UserProfile;
use super::review::Review;

/// The per-user remote document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub saved_content: BTreeSet<u32>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}

/// Partial merge-write payload scoped to changed top-level fields.
///
/// Mutations never overwrite the whole document; they send a patch carrying
/// only the fields they own so unrelated concurrent fields are not
/// clobbered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_content: Option<BTreeSet<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl DocumentPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = Some(skills);
        self
    }

    #[must_use]
    pub fn with_badges(mut self, badges: Vec<Badge>) -> Self {
        self.badges = Some(badges);
        self
    }

    #[must_use]
    pub fn with_saved_content(mut self, saved_content: BTreeSet<u32>) -> Self {
        self.saved_content = Some(saved_content);
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = Some(reviews);
        self
    }

    #[must_use]
    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    #[must_use]
    pub fn with_last_seen_at(mut self, last_seen_at: DateTime<Utc>) -> Self {
        self.last_seen_at = Some(last_seen_at);
        self
    }

    /// True if the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.skills.is_none()
            && self.badges.is_none()
            && self.saved_content.is_none()
            && self.reviews.is_none()
            && self.notifications.is_none()
            && self.last_seen_at.is_none()
    }

    /// Merge this patch into a document, replacing only the carried fields.
    pub fn apply_to(&self, document: &mut UserDocument) {
        if let Some(profile) = &self.profile {
            document.profile = profile.clone();
        }
        if let Some(skills) = &self.skills {
            document.skills = skills.clone();
        }
        if let Some(badges) = &self.badges {
            document.badges = badges.clone();
        }
        if let Some(saved_content) = &self.saved_content {
            document.saved_content = saved_content.clone();
        }
        if let Some(reviews) = &self.reviews {
            document.reviews = reviews.clone();
        }
        if let Some(notifications) = &self.notifications {
            document.notifications = notifications.clone();
        }
        if let Some(last_seen_at) = self.last_seen_at {
            document.last_seen_at = Some(last_seen_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_decodes_to_default_document() {
        let document: UserDocument = serde_json::from_str("{}").expect("empty doc should decode");
        assert!(document.badges.is_empty());
        assert!(document.notifications.is_empty());
        assert!(document.skills.is_empty());
        assert!(document.last_seen_at.is_none());
    }

    #[test]
    fn patch_serializes_only_carried_fields() {
        let patch = DocumentPatch::new().with_skills(vec!["Rust".into()]);
        let json = serde_json::to_value(&patch).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["skills"]);
    }

    #[test]
    fn patch_apply_replaces_only_carried_fields() {
        let mut document = UserDocument { skills: vec!["Go".into()], ..UserDocument::default() };
        document.saved_content.insert(7);

        let patch = DocumentPatch::new().with_skills(vec!["Rust".into(), "SQL".into()]);
        patch.apply_to(&mut document);

        assert_eq!(document.skills, vec!["Rust".to_string(), "SQL".to_string()]);
        assert!(document.saved_content.contains(&7));
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(DocumentPatch::new().is_empty());
        assert!(!DocumentPatch::new().with_badges(Vec::new()).is_empty());
    }
}
