//! In-app notification types
//!
//! Notification timestamps in legacy documents appear in several serialized
//! forms (RFC 3339 strings, epoch milliseconds, or `{seconds, nanos}` maps
//! written by the document store SDK). Decoding normalizes all of them to a
//! structured UTC timestamp, so the rest of the system only ever sees
//! `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    EXPLORE_LINK, WELCOME_NOTIFICATION_ID, WELCOME_NOTIFICATION_MESSAGE,
    WELCOME_NOTIFICATION_TITLE,
};

/// Closed category tag for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Success,
    Info,
    Message,
}

/// Notification stored in the per-user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// True ordering timestamp, distinct from any display string.
    #[serde(with = "timestamp_codec")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    /// Optional deep-link target within the app.
    #[serde(default)]
    pub link: Option<String>,
}

impl Notification {
    /// The welcome notification synthesized for accounts that have none.
    #[must_use]
    pub fn welcome(now: DateTime<Utc>) -> Self {
        Self {
            id: WELCOME_NOTIFICATION_ID,
            title: WELCOME_NOTIFICATION_TITLE.to_string(),
            message: WELCOME_NOTIFICATION_MESSAGE.to_string(),
            kind: NotificationKind::Info,
            timestamp: now,
            read: false,
            link: Some(EXPLORE_LINK.to_string()),
        }
    }
}

/// Serde codec normalizing the timestamp forms found in remote documents.
mod timestamp_codec {
    use chrono::{DateTime, Utc};
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Rfc3339(String),
        Structured {
            seconds: i64,
            #[serde(default)]
            nanos: u32,
        },
        Millis(i64),
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Rfc3339(text) => DateTime::parse_from_rfc3339(&text)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|err| D::Error::custom(format!("invalid timestamp '{text}': {err}"))),
            RawTimestamp::Structured { seconds, nanos } => DateTime::from_timestamp(seconds, nanos)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}s"))),
            RawTimestamp::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}ms"))),
        }
    }
}
