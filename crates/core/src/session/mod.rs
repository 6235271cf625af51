//! Session module - the context object every front-end drives.

mod clinic_session;


pub use clinic_session::ClinicSession;
