//! Mentor review types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A review left for a mentor.
///
/// Author fields are denormalized copies of the reviewing user's profile at
/// the time of writing; reviews never reference the live profile. Reviews
/// are append-only from this subsystem's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub mentor_id: u32,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    /// Rating from 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Display timestamp, e.g. "March 5, 2026".
    pub date: String,
}
