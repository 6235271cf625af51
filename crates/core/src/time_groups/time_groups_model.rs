//! Time group domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_id, SlotTime, TimeOfDay};

/// A named bookable time-of-day window, e.g. "Morning 09:00-10:00".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeGroup {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TimeGroup {
    /// The appointment time value this group books, `HH:MM-HH:MM`.
    pub fn slot(&self) -> SlotTime {
        SlotTime::Window {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// Half-open interval overlap against another window.
    pub fn overlaps(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start < self.end_time && end > self.start_time
    }
}

/// Input model for creating or editing a time group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeGroup {
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// One entry of the booking form's time picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeOption {
    /// Value stored on the appointment.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}
