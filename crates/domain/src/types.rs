//! Domain data types for the per-user document and session state

pub mod badge;
pub mod document;
pub mod identity;
pub mod notification;
pub mod profile;
pub mod review;

pub use badge::Badge;
pub use document::{DocumentPatch, UserDocument};
pub use identity::AuthIdentity;
pub use notification::{Notification, NotificationKind};
pub use profile::{ProfileUpdate, UserProfile};
pub use review::Review;
