//! SQLite storage implementation for Clinic Desk.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the key-value store trait defined in `clinicdesk-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The `kv_store` table and its store implementation
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with `KeyValueStoreTrait`.
//!
//! ```text
//!   core (domain, session)
//!            │
//!            ▼
//!  storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use kv::SqliteKeyValueStore;

// Re-export from clinicdesk-core for convenience
pub use clinicdesk_core::errors::{DatabaseError, Error, Result};
