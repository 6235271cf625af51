//! Domain event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::appointments::AppointmentStatus;

/// Domain events emitted by the session after successful mutations.
///
/// These events represent facts about scheduling data changes. Front-ends
/// translate them into platform-specific actions (opening the treatment-record
/// form, offering a follow-up booking, refreshing time options, etc.).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Time groups were added, updated, or deleted.
    TimeGroupsChanged { group_ids: Vec<String> },

    /// The legacy fixed-interval time settings were replaced.
    AppointmentTimeSettingsChanged,

    /// A new appointment was booked (front desk, portal, or follow-up).
    AppointmentCreated {
        appointment_id: String,
        date: NaiveDate,
        time: String,
    },

    /// An appointment's status was set.
    AppointmentStatusChanged {
        appointment_id: String,
        old_status: AppointmentStatus,
        new_status: AppointmentStatus,
    },

    /// An appointment was removed.
    AppointmentDeleted { appointment_id: String },

    /// An appointment just became completed; a treatment record should be
    /// filled in with these defaults. Fired once per completion.
    TreatmentRecordRequested {
        appointment_id: String,
        customer_name: String,
        date: NaiveDate,
        service: String,
    },

    /// A treatment record was saved.
    TreatmentRecordSaved {
        record_id: String,
        customer_name: String,
    },

    /// A saved treatment record names a next visit; the front-end may offer
    /// to book it.
    FollowUpSuggested {
        record_id: String,
        customer_name: String,
        next_visit: NaiveDate,
    },
}

impl DomainEvent {
    /// Creates a TimeGroupsChanged event.
    pub fn time_groups_changed(group_ids: Vec<String>) -> Self {
        Self::TimeGroupsChanged { group_ids }
    }

    /// Creates an AppointmentCreated event.
    pub fn appointment_created(appointment_id: String, date: NaiveDate, time: String) -> Self {
        Self::AppointmentCreated {
            appointment_id,
            date,
            time,
        }
    }

    /// Creates an AppointmentStatusChanged event.
    pub fn appointment_status_changed(
        appointment_id: String,
        old_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Self {
        Self::AppointmentStatusChanged {
            appointment_id,
            old_status,
            new_status,
        }
    }

    /// Creates an AppointmentDeleted event.
    pub fn appointment_deleted(appointment_id: String) -> Self {
        Self::AppointmentDeleted { appointment_id }
    }

    /// Creates a TreatmentRecordRequested event.
    pub fn treatment_record_requested(
        appointment_id: String,
        customer_name: String,
        date: NaiveDate,
        service: String,
    ) -> Self {
        Self::TreatmentRecordRequested {
            appointment_id,
            customer_name,
            date,
            service,
        }
    }

    /// Creates a TreatmentRecordSaved event.
    pub fn treatment_record_saved(record_id: String, customer_name: String) -> Self {
        Self::TreatmentRecordSaved {
            record_id,
            customer_name,
        }
    }

    /// Creates a FollowUpSuggested event.
    pub fn follow_up_suggested(
        record_id: String,
        customer_name: String,
        next_visit: NaiveDate,
    ) -> Self {
        Self::FollowUpSuggested {
            record_id,
            customer_name,
            next_visit,
        }
    }
}
