//! Database model for stored collections.

use diesel::prelude::*;

/// One row of `kv_store`: a storage key and its JSON value.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_store)]
pub struct KeyValueDB {
    pub store_key: String,
    pub store_value: String,
}
