use std::sync::{Arc, Mutex, MutexGuard};

use clinicdesk_core::{
    events::DomainEventSink, storage::KeyValueStoreTrait, ClinicSession,
};
use clinicdesk_storage_sqlite::{db, SqliteKeyValueStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, domain_events::TracingDomainEventSink, error::ApiError};

pub struct AppState {
    /// The one session all handlers share. Core operations are synchronous,
    /// so the lock is never held across an await.
    session: Mutex<ClinicSession>,
}

impl AppState {
    pub fn session(&self) -> Result<MutexGuard<'_, ClinicSession>, ApiError> {
        self.session
            .lock()
            .map_err(|e| ApiError::Internal(format!("Session lock poisoned: {}", e)))
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("CD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let store: Arc<dyn KeyValueStoreTrait> = Arc::new(SqliteKeyValueStore::new(pool));
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(TracingDomainEventSink);
    let session = ClinicSession::load(store, event_sink)?;

    Ok(Arc::new(AppState {
        session: Mutex::new(session),
    }))
}
