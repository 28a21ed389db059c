//! Document repair engine
//!
//! Heals structural drift in remote documents introduced by schema
//! evolution: accounts created before the badge or notification features
//! existed are backfilled on their next sign-in. Pure and idempotent; the
//! session controller decides separately whether to persist the result.

use chrono::{DateTime, Utc};
use skillbridge_domain::constants::{EARNED_DATE_FORMAT, PIONEER_BADGE_ID};
use skillbridge_domain::{Badge, Notification, UserDocument};

/// Result of a repair pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    pub document: UserDocument,
    /// True when the Pioneer correction or the welcome-notification
    /// synthesis changed data. Timestamp normalization happens at decode
    /// time and never counts.
    pub was_modified: bool,
}

/// Repair a document against the current clock.
#[must_use]
pub fn repair(document: UserDocument) -> RepairOutcome {
    repair_at(document, Utc::now())
}

/// Repair a document with an explicit clock, for deterministic tests.
///
/// Rules, applied in order:
/// 1. Empty badge collection is replaced with the default seed set.
/// 2. An existing unearned Pioneer badge (id 0) is marked earned and
///    stamped with today's date. An entirely absent Pioneer badge inside a
///    non-empty collection is left alone.
/// 3. An empty notification collection gains a single welcome notification.
///
/// Existing entries are never removed or reordered; profile, skills, saved
/// content and reviews pass through untouched.
#[must_use]
pub fn repair_at(mut document: UserDocument, now: DateTime<Utc>) -> RepairOutcome {
    let mut was_modified = false;

    if document.badges.is_empty() {
        document.badges = Badge::seed_set();
    }

    if let Some(pioneer) = document.badges.iter_mut().find(|badge| badge.id == PIONEER_BADGE_ID) {
        if !pioneer.earned {
            pioneer.earned = true;
            pioneer.earned_date = Some(now.format(EARNED_DATE_FORMAT).to_string());
            pioneer.progress = None;
            was_modified = true;
        }
    }

    if document.notifications.is_empty() {
        document.notifications.push(Notification::welcome(now));
        was_modified = true;
    }

    RepairOutcome { document, was_modified }
}
