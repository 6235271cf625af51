//! Clinic Desk Core - scheduling domain, session, and storage traits.
//!
//! This crate contains the scheduling logic of the clinic front-desk tool:
//! time groups, appointment booking and its status lifecycle, the treatment
//! record hand-off and follow-up appointments. It is storage-agnostic and
//! defines the key-value store trait implemented by the `storage-sqlite`
//! crate.

pub mod appointments;
pub mod constants;
pub mod customers;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod portal;
pub mod records;
pub mod session;
pub mod storage;
pub mod time_groups;
pub mod time_settings;
pub mod utils;

pub use session::ClinicSession;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
