use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the appointment scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("The slot {date} {time} is already booked by {customer_name}")]
    SlotTaken {
        date: NaiveDate,
        time: String,
        customer_name: String,
    },

    #[error("Appointment '{0}' not found")]
    NotFound(String),
}
