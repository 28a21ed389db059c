//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Badge catalogue
pub const PIONEER_BADGE_ID: u32 = 0;
pub const BADGE_SET_SIZE: usize = 8;

/// Display format for badge earned dates, e.g. "March 5, 2026".
pub const EARNED_DATE_FORMAT: &str = "%B %-d, %Y";

// Welcome notification synthesized for accounts without any notifications
pub const WELCOME_NOTIFICATION_ID: u32 = 1;
pub const WELCOME_NOTIFICATION_TITLE: &str = "Welcome to SkillBridge!";
pub const WELCOME_NOTIFICATION_MESSAGE: &str =
    "Your learning journey starts here. Explore courses and find a mentor that fits you.";
pub const EXPLORE_LINK: &str = "/explore";

// Profile seed defaults for first sign-in
pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_LEVEL_NAME: &str = "Newcomer";
pub const DEFAULT_NEXT_LEVEL_XP: u32 = 100;
pub const PLACEHOLDER_NAME: &str = "New Member";
pub const PLACEHOLDER_TITLE: &str = "Learner";

// Review validation bounds
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
