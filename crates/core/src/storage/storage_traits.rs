use crate::errors::Result;

/// Trait for the key-value store backing a session.
///
/// Writes are last-writer-wins: two sessions writing the same key overwrite
/// each other without merging.
pub trait KeyValueStoreTrait: Send + Sync {
    /// Get the stored value for a key, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value for a key.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
