pub mod id_utils;
pub mod serde_utils;
pub mod time_utils;

pub use id_utils::{deserialize_id, deserialize_optional_id, new_id};
pub use serde_utils::{deserialize_optional_string_or_number, deserialize_string_or_number};
pub use time_utils::{local_today, SlotTime, TimeOfDay};
