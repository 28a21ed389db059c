//! Achievement badge types and the default seed catalogue

use serde::{Deserialize, Serialize};

use crate::constants::PIONEER_BADGE_ID;

/// Achievement badge stored in the per-user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub earned_date: Option<String>,
    /// Progress toward unlocking, 0-100. Meaningful only while unearned.
    #[serde(default)]
    pub progress: Option<u8>,
}

impl Badge {
    fn new(id: u32, name: &str, description: &str, icon: &str, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            earned: false,
            earned_date: None,
            progress: Some(0),
        }
    }

    /// The default badge catalogue seeded into every new account.
    ///
    /// All badges start unearned; the Pioneer badge (id 0) is earned by the
    /// repair pass or during account provisioning.
    #[must_use]
    pub fn seed_set() -> Vec<Self> {
        vec![
            Self::new(PIONEER_BADGE_ID, "Pioneer", "Joined SkillBridge", "rocket", "amber"),
            Self::new(1, "First Steps", "Complete your first lesson", "footprints", "emerald"),
            Self::new(2, "Bookworm", "Finish 10 courses", "book", "sky"),
            Self::new(3, "Connector", "Post in the community for the first time", "users", "violet"),
            Self::new(4, "Mentor's Pick", "Receive an endorsement from a mentor", "star", "rose"),
            Self::new(5, "Streak Week", "Learn 7 days in a row", "flame", "orange"),
            Self::new(6, "Rising Star", "Reach level 5", "trending-up", "teal"),
            Self::new(7, "Critic", "Write 10 mentor reviews", "pen", "indigo"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BADGE_SET_SIZE;

    #[test]
    fn seed_set_has_expected_shape() {
        let badges = Badge::seed_set();
        assert_eq!(badges.len(), BADGE_SET_SIZE);
        assert_eq!(badges[0].id, PIONEER_BADGE_ID);
        assert!(badges.iter().all(|b| !b.earned));
        assert!(badges.iter().all(|b| b.earned_date.is_none()));
    }

    #[test]
    fn seed_set_ids_are_unique_and_stable() {
        let badges = Badge::seed_set();
        let ids: Vec<u32> = badges.iter().map(|b| b.id).collect();
        assert_eq!(ids, (0..BADGE_SET_SIZE as u32).collect::<Vec<_>>());
    }
}
