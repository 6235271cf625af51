use chrono::{NaiveDate, Utc};
use log::{debug, warn};

use super::appointments_errors::AppointmentError;
use super::appointments_model::{
    Appointment, AppointmentFilter, AppointmentStatus, NewAppointment, StatusChange,
};
use crate::constants::{FOLLOW_UP_NOTES, FOLLOW_UP_TIME};
use crate::errors::{Result, ValidationError};
use crate::records::{TreatmentRecord, TreatmentRecordDraft};
use crate::utils::{new_id, SlotTime};

/// Owns the appointment collection.
///
/// Slot conflicts are decided by exact equality of the canonical `(date, time)`
/// pair among active appointments. A point time and a window, or two windows
/// with different bounds, never conflict even when their clock spans overlap.
#[derive(Debug, Clone, Default)]
pub struct AppointmentScheduler {
    appointments: Vec<Appointment>,
}

impl AppointmentScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// All appointments in booking order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Active appointments holding exactly this `(date, time)` slot.
    pub fn list_active_conflicts(&self, date: NaiveDate, time: &SlotTime) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status.is_active() && a.date == date && a.time == *time)
            .cloned()
            .collect()
    }

    /// Books a new pending appointment unless an active one already holds the slot.
    pub fn create_appointment(&mut self, new_appointment: NewAppointment) -> Result<Appointment> {
        new_appointment.validate()?;

        if let Some(holder) = self
            .list_active_conflicts(new_appointment.date, &new_appointment.time)
            .into_iter()
            .next()
        {
            return Err(AppointmentError::SlotTaken {
                date: new_appointment.date,
                time: new_appointment.time.to_string(),
                customer_name: holder.customer_name,
            }
            .into());
        }

        if let Some(neighbour) = self.appointments.iter().find(|a| {
            a.status.is_active()
                && a.date == new_appointment.date
                && a.time != new_appointment.time
                && a.time.overlaps(&new_appointment.time)
        }) {
            warn!(
                "Booking {} {} overlaps active appointment {} at {} under a different time label",
                new_appointment.date, new_appointment.time, neighbour.id, neighbour.time
            );
        }

        let appointment = Appointment {
            id: new_id(),
            customer_name: new_appointment.customer_name.trim().to_string(),
            client_id: new_appointment.client_id,
            client_phone: new_appointment.client_phone,
            date: new_appointment.date,
            time: new_appointment.time,
            service: new_appointment.service,
            status: AppointmentStatus::Pending,
            notes: new_appointment.notes,
            created_at: Some(Utc::now()),
        };
        debug!(
            "Booked appointment {} for '{}' at {} {}",
            appointment.id, appointment.customer_name, appointment.date, appointment.time
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Sets an appointment's status.
    ///
    /// Any target status is accepted. Moving into `completed` from any other
    /// status yields a treatment-record draft; setting `completed` again on an
    /// already completed appointment does not.
    pub fn update_status(
        &mut self,
        appointment_id: &str,
        new_status: AppointmentStatus,
    ) -> Result<StatusChange> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        let previous_status = appointment.status;
        appointment.status = new_status;

        let record_draft = (new_status == AppointmentStatus::Completed
            && previous_status != AppointmentStatus::Completed)
            .then(|| TreatmentRecordDraft::from_appointment(appointment));

        debug!(
            "Appointment {} status {} -> {}",
            appointment_id, previous_status, new_status
        );

        Ok(StatusChange {
            appointment: appointment.clone(),
            previous_status,
            record_draft,
        })
    }

    /// Removes an appointment regardless of its status.
    pub fn delete_appointment(&mut self, appointment_id: &str) -> Result<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;
        Ok(self.appointments.remove(index))
    }

    /// Books the follow-up visit named by a treatment record.
    ///
    /// No conflict check is made: the follow-up is always created at the
    /// default time, even when that slot is already held.
    pub fn create_follow_up(&mut self, record: &TreatmentRecord) -> Result<Appointment> {
        let next_visit = record
            .next_visit
            .ok_or_else(|| ValidationError::MissingField("nextVisit".to_string()))?;
        let time: SlotTime = FOLLOW_UP_TIME.parse()?;

        let appointment = Appointment {
            id: new_id(),
            customer_name: record.customer_name.clone(),
            client_id: None,
            client_phone: None,
            date: next_visit,
            time,
            service: record.treatment.clone(),
            status: AppointmentStatus::Pending,
            notes: FOLLOW_UP_NOTES.to_string(),
            created_at: Some(Utc::now()),
        };
        debug!(
            "Follow-up {} for '{}' on {} from record {}",
            appointment.id, appointment.customer_name, next_visit, record.id
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    pub fn filter(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// Appointments booked through the portal by one client.
    pub fn for_client(&self, client_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.client_id.as_deref() == Some(client_id))
            .cloned()
            .collect()
    }
}
