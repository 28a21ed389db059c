//! Reactive session store
//!
//! Holds the in-process working copy of the signed-in user's document and
//! notifies subscribers synchronously on every change. The store performs
//! no remote I/O; persistence is the mutation bridge's concern, and full
//! hydration is reserved for the session controller.
//!
//! The store is an explicitly constructed value with its own lifecycle
//! (create, hydrate, reset) rather than a process-wide global, so tests can
//! instantiate isolated instances.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use skillbridge_domain::{Badge, Notification, Review, UserDocument, UserProfile};

/// Full working set held by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub profile: UserProfile,
    pub skills: Vec<String>,
    pub badges: Vec<Badge>,
    pub saved_content: BTreeSet<u32>,
    pub reviews: Vec<Review>,
    pub notifications: Vec<Notification>,
}

impl From<UserDocument> for StoreSnapshot {
    fn from(document: UserDocument) -> Self {
        Self {
            profile: document.profile,
            skills: document.skills,
            badges: document.badges,
            saved_content: document.saved_content,
            reviews: document.reviews,
            notifications: document.notifications,
        }
    }
}

/// Change event delivered synchronously to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Hydrated,
    ProfileUpdated,
    SkillsChanged,
    BadgeUnlocked(u32),
    SavedContentChanged,
    ReviewAdded,
    NotificationsChanged,
    Reset,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Reactive state container for the currently authenticated user.
pub struct SessionStore {
    state: RwLock<StoreSnapshot>,
    /// One-shot badge unlock signal, cleared by explicit acknowledgment.
    celebration: Mutex<Option<Badge>>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreSnapshot::default()),
            celebration: Mutex::new(None),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Clone of the full current state.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.read().clone()
    }

    /// Total replacement of the working set, used only by the session
    /// controller during hydration. An optional celebration badge is held
    /// as a one-shot side value until acknowledged.
    pub fn set_full_data(&self, snapshot: StoreSnapshot, celebration: Option<Badge>) {
        *self.state.write() = snapshot;
        if celebration.is_some() {
            *self.celebration.lock() = celebration;
        }
        self.notify(&StoreEvent::Hydrated);
    }

    /// Clear all state, e.g. when a test or composition root recycles the
    /// store. Sign-out does not call this; see the session controller.
    pub fn reset(&self) {
        *self.state.write() = StoreSnapshot::default();
        *self.celebration.lock() = None;
        self.notify(&StoreEvent::Reset);
    }

    /// The pending celebration badge, if any.
    #[must_use]
    pub fn celebration(&self) -> Option<Badge> {
        self.celebration.lock().clone()
    }

    /// Acknowledge the celebration so it is shown exactly once.
    pub fn clear_celebration(&self) {
        *self.celebration.lock() = None;
    }

    /// Replace the profile slice.
    pub fn set_profile(&self, profile: UserProfile) {
        self.state.write().profile = profile;
        self.notify(&StoreEvent::ProfileUpdated);
    }

    /// Add a skill. Returns false without notifying when the skill is
    /// already present (case-sensitive exact match) or empty.
    pub fn add_skill(&self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }
        {
            let mut state = self.state.write();
            if state.skills.iter().any(|existing| existing == skill) {
                return false;
            }
            state.skills.push(skill.to_string());
        }
        self.notify(&StoreEvent::SkillsChanged);
        true
    }

    /// Remove a skill. Removal is permanent and immediate.
    pub fn remove_skill(&self, skill: &str) -> bool {
        let removed = {
            let mut state = self.state.write();
            let before = state.skills.len();
            state.skills.retain(|existing| existing != skill);
            state.skills.len() != before
        };
        if removed {
            self.notify(&StoreEvent::SkillsChanged);
        }
        removed
    }

    /// Mark a badge as earned. Returns the updated badge, or `None` when
    /// the id is unknown or the badge was already earned.
    pub fn unlock_badge(&self, badge_id: u32, earned_date: String) -> Option<Badge> {
        let unlocked = {
            let mut state = self.state.write();
            let badge = state.badges.iter_mut().find(|badge| badge.id == badge_id)?;
            if badge.earned {
                return None;
            }
            badge.earned = true;
            badge.earned_date = Some(earned_date);
            badge.progress = None;
            badge.clone()
        };
        self.notify(&StoreEvent::BadgeUnlocked(badge_id));
        Some(unlocked)
    }

    /// Toggle saved-content membership. Returns the new membership state.
    pub fn toggle_saved(&self, content_id: u32) -> bool {
        let saved = {
            let mut state = self.state.write();
            if state.saved_content.remove(&content_id) {
                false
            } else {
                state.saved_content.insert(content_id);
                true
            }
        };
        self.notify(&StoreEvent::SavedContentChanged);
        saved
    }

    /// Append a review. Reviews are append-only.
    pub fn add_review(&self, review: Review) {
        self.state.write().reviews.push(review);
        self.notify(&StoreEvent::ReviewAdded);
    }

    /// Flip a notification's read flag to true. Returns false when the id
    /// is unknown or the notification was already read.
    pub fn mark_notification_read(&self, notification_id: u32) -> bool {
        let changed = {
            let mut state = self.state.write();
            match state
                .notifications
                .iter_mut()
                .find(|notification| notification.id == notification_id)
            {
                Some(notification) if !notification.read => {
                    notification.read = true;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.notify(&StoreEvent::NotificationsChanged);
        }
        changed
    }

    /// Count of unread notifications, computed on demand.
    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.state.read().notifications.iter().filter(|n| !n.read).count()
    }

    /// Register a synchronous change callback.
    pub fn subscribe(&self, callback: impl Fn(&StoreEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().retain(|(existing, _)| *existing != id.0);
    }

    // Subscribers run outside the state lock so callbacks can read the
    // store without deadlocking.
    fn notify(&self, event: &StoreEvent) {
        let subscribers = self.subscribers.lock();
        for (_, callback) in subscribers.iter() {
            callback(event);
        }
    }
}
