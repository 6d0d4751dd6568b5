use std::{fmt, str::FromStr};

use thiserror::Error;
use time::OffsetDateTime;

/// A wall-clock time of day without date or time zone.
///
/// Ordered by clock order within one calendar day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TimeOfDayParseError {
    #[error("Expected \"HH:MM\"")]
    Format,
    #[error("Hours out of range")]
    Hours,
    #[error("Minutes out of range")]
    Minutes,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The current time of day on the local clock (UTC if the local
    /// offset cannot be determined).
    pub fn now_local() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.time().into()
    }
}

impl From<time::Time> for TimeOfDay {
    fn from(from: time::Time) -> Self {
        Self {
            hour: from.hour(),
            minute: from.minute(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hh, mm) = s.split_once(':').ok_or(TimeOfDayParseError::Format)?;
        let hour: u8 = hh.parse().map_err(|_| TimeOfDayParseError::Format)?;
        let minute: u8 = mm.parse().map_err(|_| TimeOfDayParseError::Format)?;
        if hour > 23 {
            return Err(TimeOfDayParseError::Hours);
        }
        if minute > 59 {
            return Err(TimeOfDayParseError::Minutes);
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
