//! Session lifecycle: hydration, repair persistence, account provisioning

mod controller;
mod seed;

pub use controller::{persist_if_modified, SessionController, SessionState};
pub use seed::seed_document;
