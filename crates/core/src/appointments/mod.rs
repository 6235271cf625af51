//! Appointments module - booking, slot-conflict detection and the status lifecycle.

mod appointments_errors;
mod appointments_migration;
mod appointments_model;
mod appointments_scheduler;

#[cfg(test)]
mod appointments_scheduler_tests;

pub use appointments_errors::AppointmentError;
pub use appointments_migration::migrate_legacy_appointments;
pub use appointments_model::{
    Appointment, AppointmentFilter, AppointmentStatus, NewAppointment, StatusChange,
};
pub use appointments_scheduler::AppointmentScheduler;
