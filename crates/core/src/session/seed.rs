//! First sign-in account provisioning

use chrono::{DateTime, Utc};
use skillbridge_domain::constants::{EARNED_DATE_FORMAT, PIONEER_BADGE_ID};
use skillbridge_domain::{AuthIdentity, Badge, Notification, UserDocument, UserProfile};

/// Build the seed document for a brand-new account.
///
/// Profile fields come from the authentication identity where available and
/// placeholder values otherwise. The full badge catalogue is seeded with
/// the Pioneer badge pre-earned and dated; a welcome notification is the
/// only notification. Skills, reviews and saved content start empty.
#[must_use]
pub fn seed_document(identity: &AuthIdentity, now: DateTime<Utc>) -> UserDocument {
    let mut profile = UserProfile::default();
    if let Some(display_name) = &identity.display_name {
        if !display_name.is_empty() {
            profile.name = display_name.clone();
        }
    }
    if let Some(email) = &identity.email {
        profile.email = email.clone();
    }
    profile.avatar_url = identity.photo_url.clone();

    let mut badges = Badge::seed_set();
    if let Some(pioneer) = badges.iter_mut().find(|badge| badge.id == PIONEER_BADGE_ID) {
        pioneer.earned = true;
        pioneer.earned_date = Some(now.format(EARNED_DATE_FORMAT).to_string());
        pioneer.progress = None;
    }

    UserDocument {
        profile,
        skills: Vec::new(),
        badges,
        saved_content: Default::default(),
        reviews: Vec::new(),
        notifications: vec![Notification::welcome(now)],
        last_seen_at: None,
    }
}
