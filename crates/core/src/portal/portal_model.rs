use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::appointments::{AppointmentScheduler, NewAppointment};
use crate::constants::DEFAULT_SERVICE;
use crate::customers::Client;
use crate::time_groups::TimeGroupRegistry;
use crate::utils::SlotTime;

/// A booking request submitted by a portal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalBooking {
    pub client_id: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    #[serde(default)]
    pub symptoms: String,
}

impl PortalBooking {
    /// The appointment this request books for `client`. The symptoms double as
    /// the service label (or the default label when empty) and as the notes.
    pub fn to_new_appointment(&self, client: &Client) -> NewAppointment {
        let symptoms = self.symptoms.trim();
        let service = if symptoms.is_empty() {
            DEFAULT_SERVICE
        } else {
            symptoms
        };

        NewAppointment {
            customer_name: client.name.clone(),
            date: self.date,
            time: self.time,
            service: service.to_string(),
            notes: symptoms.to_string(),
            client_id: Some(client.id.clone()),
            client_phone: Some(client.phone.clone()).filter(|p| !p.is_empty()),
        }
    }
}

/// A time-group option as shown in the portal's picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortalTimeOption {
    pub value: String,
    pub label: String,
    /// An active appointment already holds this window on the chosen date.
    pub booked: bool,
}

/// One option per time group. Without a date nothing is flagged as booked.
pub fn portal_time_options(
    registry: &TimeGroupRegistry,
    scheduler: &AppointmentScheduler,
    date: Option<NaiveDate>,
) -> Vec<PortalTimeOption> {
    registry
        .list_groups()
        .iter()
        .zip(registry.time_options())
        .map(|(group, option)| {
            let booked = date.is_some_and(|d| {
                !scheduler.list_active_conflicts(d, &group.slot()).is_empty()
            });
            PortalTimeOption {
                value: option.value,
                label: option.label,
                booked,
            }
        })
        .collect()
}
