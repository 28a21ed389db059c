//! Authentication identity emitted by the auth provider

use serde::{Deserialize, Serialize};

/// Identity payload from the authentication provider.
///
/// `uid` is the stable key addressing the user's remote document. The
/// display fields are best-effort and may be absent depending on the
/// sign-in method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl AuthIdentity {
    /// Convenience constructor for an identity with only a key.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into(), display_name: None, email: None, photo_url: None }
    }
}
