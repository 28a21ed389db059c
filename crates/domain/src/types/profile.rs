//! User profile types
//!
//! The profile lives inside the per-user remote document and is hydrated
//! into the session store on sign-in.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LEVEL, DEFAULT_LEVEL_NAME, DEFAULT_NEXT_LEVEL_XP, PLACEHOLDER_NAME, PLACEHOLDER_TITLE,
};

/// User profile stored in the remote document.
///
/// `xp` is not clamped to `next_level_xp` at the data layer; the progress
/// bar clamps at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Professional network link (e.g. LinkedIn)
    #[serde(default)]
    pub network_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_level_name")]
    pub level_name: String,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_next_level_xp")]
    pub next_level_xp: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            email: String::new(),
            phone: None,
            network_url: None,
            bio: None,
            avatar_url: None,
            level: default_level(),
            level_name: default_level_name(),
            xp: 0,
            next_level_xp: default_next_level_xp(),
        }
    }
}

impl UserProfile {
    /// Return a copy with every absent optional field coerced to an empty
    /// string. The document service rejects absent values in merge payloads,
    /// so outgoing profile writes must never carry `None`.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut profile = self.clone();
        for field in [
            &mut profile.phone,
            &mut profile.network_url,
            &mut profile.bio,
            &mut profile.avatar_url,
        ] {
            if field.is_none() {
                *field = Some(String::new());
            }
        }
        profile
    }
}

/// Editable profile fields captured from the profile form.
///
/// Fields the form did not populate arrive as `None` and are coerced to
/// empty strings by [`ProfileUpdate::sanitized`] before merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub network_url: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Coerce absent fields to empty strings and trim the rest.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let clean = |field: &Option<String>| {
            Some(field.as_deref().map(str::trim).unwrap_or_default().to_string())
        };
        Self {
            name: clean(&self.name),
            title: clean(&self.title),
            email: clean(&self.email),
            phone: clean(&self.phone),
            network_url: clean(&self.network_url),
            bio: clean(&self.bio),
            avatar_url: clean(&self.avatar_url),
        }
    }

    /// Merge this update over an existing profile, leaving level and xp
    /// fields untouched. Expects a sanitized update; unset fields fall back
    /// to the current value as a guard against partial snapshots.
    #[must_use]
    pub fn apply_to(&self, current: &UserProfile) -> UserProfile {
        let mut profile = current.clone();
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = Some(phone.clone());
        }
        if let Some(network_url) = &self.network_url {
            profile.network_url = Some(network_url.clone());
        }
        if let Some(bio) = &self.bio {
            profile.bio = Some(bio.clone());
        }
        if let Some(avatar_url) = &self.avatar_url {
            profile.avatar_url = Some(avatar_url.clone());
        }
        profile
    }
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

fn default_level_name() -> String {
    DEFAULT_LEVEL_NAME.to_string()
}

fn default_next_level_xp() -> u32 {
    DEFAULT_NEXT_LEVEL_XP
}
