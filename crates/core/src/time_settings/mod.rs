//! Fixed-interval appointment times, the predecessor of time groups.

mod time_settings_model;

pub use time_settings_model::{AppointmentTimeSettings, DEFAULT_INTERVAL_MINUTES};
