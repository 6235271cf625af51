//! SQLite storage implementation for the session's key-value store.

mod model;
mod repository;

pub use model::KeyValueDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use clinicdesk_core::storage::KeyValueStoreTrait;
