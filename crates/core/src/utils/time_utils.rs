use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute precision.
///
/// Always rendered as zero-padded `HH:MM`, so the rendered form sorts the same
/// way the minute value does. Parsing accepts `H:MM`, `HH:MM` and `HH:MM:SS`
/// (seconds are dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Crate-internal constructor for known-good constants.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        TimeOfDay(hour * 60 + minute)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Returns the time `minutes` later on the same day, or `None` past midnight.
    pub fn checked_add_minutes(&self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.0) + minutes;
        if total < u32::from(MINUTES_PER_DAY) {
            Some(TimeOfDay(total as u16))
        } else {
            None
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;
        TimeOfDay::from_hm(parsed.hour(), parsed.minute())
            .ok_or_else(|| ValidationError::InvalidTime(s.to_string()).into())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// The `time` field of an appointment.
///
/// Either a single point in time (`09:00`) or a booked time-group window
/// (`09:00-10:00`). Both forms are stored in canonical zero-padded text, and
/// two slot times are equal exactly when their canonical texts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SlotTime {
    At(TimeOfDay),
    Window { start: TimeOfDay, end: TimeOfDay },
}

impl SlotTime {
    pub fn window(start: TimeOfDay, end: TimeOfDay) -> Result<Self, Error> {
        if start >= end {
            return Err(ValidationError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            }
            .into());
        }
        Ok(SlotTime::Window { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        match self {
            SlotTime::At(t) => *t,
            SlotTime::Window { start, .. } => *start,
        }
    }

    /// Clock span covered by this slot, half-open, in minutes since midnight.
    /// A point time covers its single minute.
    fn span(&self) -> (u16, u16) {
        match self {
            SlotTime::At(t) => (t.minutes(), t.minutes() + 1),
            SlotTime::Window { start, end } => (start.minutes(), end.minutes()),
        }
    }

    /// True when the two slots share any clock minute, regardless of label.
    pub fn overlaps(&self, other: &SlotTime) -> bool {
        let (a_start, a_end) = self.span();
        let (b_start, b_end) = other.span();
        a_start < b_end && a_end > b_start
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotTime::At(t) => write!(f, "{}", t),
            SlotTime::Window { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

impl FromStr for SlotTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((start, end)) => SlotTime::window(start.parse()?, end.parse()?),
            None => Ok(SlotTime::At(s.parse()?)),
        }
    }
}

impl TryFrom<String> for SlotTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(value: SlotTime) -> Self {
        value.to_string()
    }
}

/// The local calendar date, used as "today" by the front-ends.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
