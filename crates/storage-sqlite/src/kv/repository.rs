use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KeyValueDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::kv_store::dsl::*;
use clinicdesk_core::errors::Result;
use clinicdesk_core::storage::KeyValueStoreTrait;

/// `KeyValueStoreTrait` backed by the `kv_store` table.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }
}

impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        kv_store
            .filter(store_key.eq(key))
            .select(store_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(kv_store)
            .values(&KeyValueDB {
                store_key: key.to_string(),
                store_value: value.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        debug!("Stored '{}' ({} bytes)", key, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations};
    use clinicdesk_core::appointments::{AppointmentStatus, NewAppointment};
    use clinicdesk_core::events::SilentEventSink;
    use clinicdesk_core::ClinicSession;
    use tempfile::tempdir;

    /// Creates a store over a migrated temp database.
    /// Returns the store and the temp dir (to keep it alive).
    fn create_test_store() -> (SqliteKeyValueStore, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("db").join("test.db");
        let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");

        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        (SqliteKeyValueStore::new(pool), temp_dir)
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.get("appointments").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let (store, _temp_dir) = create_test_store();

        store.set("timeGroups", "[]").unwrap();
        assert_eq!(store.get("timeGroups").unwrap().as_deref(), Some("[]"));

        store.set("timeGroups", r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(
            store.get("timeGroups").unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[test]
    fn test_session_reloads_from_sqlite() {
        let (store, _temp_dir) = create_test_store();
        let store: Arc<dyn KeyValueStoreTrait> = Arc::new(store);

        let mut session =
            ClinicSession::load(store.clone(), Arc::new(SilentEventSink)).unwrap();
        let appointment = session
            .create_appointment(NewAppointment {
                customer_name: "Alice".to_string(),
                date: "2024-06-01".parse().unwrap(),
                time: "10:00".parse().unwrap(),
                service: "Massage".to_string(),
                notes: String::new(),
                client_id: None,
                client_phone: None,
            })
            .unwrap();
        session
            .update_appointment_status(&appointment.id, AppointmentStatus::Confirmed)
            .unwrap();

        let reloaded = ClinicSession::load(store, Arc::new(SilentEventSink)).unwrap();
        assert_eq!(
            reloaded.get_appointment(&appointment.id).map(|a| a.status),
            Some(AppointmentStatus::Confirmed)
        );
    }
}
