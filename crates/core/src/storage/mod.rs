//! Key-value storage seam.
//!
//! The session persists each collection as one serialized JSON value under a
//! fixed key. Storage crates implement [`KeyValueStoreTrait`]; the in-memory
//! implementation here backs tests and throwaway sessions.

mod memory_store;
mod storage_traits;

pub use memory_store::InMemoryKeyValueStore;
pub use storage_traits::KeyValueStoreTrait;
