//! Core error types for the Clinic Desk scheduling core.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::appointments::AppointmentError;
use crate::time_groups::TimeGroupError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the scheduling core.
///
/// Every variant is recoverable by the user: operations that return one of
/// these leave the session's collections exactly as they were.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Time group operation failed: {0}")]
    TimeGroup(#[from] TimeGroupError),

    #[error("Appointment operation failed: {0}")]
    Appointment(#[from] AppointmentError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Failed to serialize stored collection '{key}': {message}")]
    Serialization { key: String, message: String },
}

/// Coarse classification of an [`Error`], used by front-ends to pick a
/// status code or message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An end time is not after its start time.
    Order,
    /// A slot or window is already taken.
    Conflict,
    /// The referenced id does not exist.
    NotFound,
    /// Malformed or missing input.
    Validation,
    /// The key-value store failed or returned unreadable data.
    Storage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TimeGroup(TimeGroupError::InvalidOrder { .. }) => ErrorKind::Order,
            Error::TimeGroup(TimeGroupError::Overlap { .. }) => ErrorKind::Conflict,
            Error::TimeGroup(TimeGroupError::NotFound(_)) => ErrorKind::NotFound,
            Error::Appointment(AppointmentError::SlotTaken { .. }) => ErrorKind::Conflict,
            Error::Appointment(AppointmentError::NotFound(_)) => ErrorKind::NotFound,
            Error::Validation(ValidationError::InvalidRange { .. }) => ErrorKind::Order,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Database(DatabaseError::NotFound(_)) => ErrorKind::NotFound,
            Error::Database(_) | Error::Serialization { .. } => ErrorKind::Storage,
        }
    }
}

/// Storage-agnostic error type for key-value store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("End time {end} must be later than start time {start}")]
    InvalidRange { start: String, end: String },
}
