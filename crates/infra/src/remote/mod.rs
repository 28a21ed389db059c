//! Remote document store adapters

mod memory;
mod rest;

pub use memory::InMemoryDocumentStore;
pub use rest::{RestDocumentStore, RestDocumentStoreConfig};
