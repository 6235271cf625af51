use thiserror::Error;

/// Errors raised by the time-group registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeGroupError {
    #[error("End time {end} must be later than start time {start}")]
    InvalidOrder { start: String, end: String },

    #[error("Time window {window} overlaps existing time group '{conflicting_name}' ({conflicting_window})")]
    Overlap {
        window: String,
        conflicting_name: String,
        conflicting_window: String,
    },

    #[error("Time group '{0}' not found")]
    NotFound(String),
}
