use serde::Deserializer;
use uuid::Uuid;

use super::serde_utils::{deserialize_optional_string_or_number, deserialize_string_or_number};

/// Generates a new record id.
///
/// UUID v7 ids sort by creation time and stay unique when several records are
/// created within the same millisecond.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Deserializes an id stored either as a JSON string or a JSON number.
///
/// Older data wrote millisecond timestamps as ids, sometimes as numbers and
/// sometimes as strings. Both become the same canonical `String`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_string_or_number(deserializer)
}

/// Same as [`deserialize_id`] for optional ids.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_string_or_number(deserializer)
}
