use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::TimeOfDay;

pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

/// Opening hours sliced into equal steps.
///
/// Missing fields in stored data fall back to 09:00-18:00 every 60 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentTimeSettings {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Step in minutes.
    pub interval: u32,
}

impl Default for AppointmentTimeSettings {
    fn default() -> Self {
        Self {
            start_time: TimeOfDay::at(9, 0),
            end_time: TimeOfDay::at(18, 0),
            interval: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

impl AppointmentTimeSettings {
    pub fn validate(&self) -> Result<()> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::InvalidRange {
                start: self.start_time.to_string(),
                end: self.end_time.to_string(),
            }
            .into());
        }
        if self.interval == 0 {
            return Err(ValidationError::InvalidInput(
                "Interval must be at least one minute".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// `HH:MM` values from the start time, stepping by the interval while
    /// earlier than the end time. A stored interval of 0 steps by the default.
    pub fn time_options(&self) -> Vec<String> {
        let step = if self.interval == 0 {
            DEFAULT_INTERVAL_MINUTES
        } else {
            self.interval
        };

        let mut options = Vec::new();
        let mut current = Some(self.start_time);
        while let Some(time) = current.filter(|t| *t < self.end_time) {
            options.push(time.to_string());
            current = time.checked_add_minutes(step);
        }
        options
    }
}
