//! Minute-granular time of day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A wall-clock time of day at minute granularity.
///
/// This is the resolution the whole system operates at: the poll loop samples
/// the clock as `HH:MM` and the persisted record stores `HH:MM` strings.
/// Seconds only re-enter the picture when the evaluation buffer is applied
/// (see [`Schedule::evaluate`](crate::schedule::Schedule::evaluate)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build a time of day, validating both components.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::new("hour", format!("{hour} > 23")));
        }
        if minute > 59 {
            return Err(ValidationError::new("minute", format!("{minute} > 59")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0–23).
    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0–59).
    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Seconds elapsed since midnight, with the seconds component at zero.
    #[must_use]
    pub fn seconds_of_day(self) -> i64 {
        (i64::from(self.hour) * 60 + i64::from(self.minute)) * 60
    }

    /// The current local wall-clock time, truncated to the minute.
    #[must_use]
    pub fn now_local() -> Self {
        use chrono::Timelike;
        let now = chrono::Local::now();
        Self {
            hour: u8::try_from(now.hour()).unwrap_or(0),
            minute: u8::try_from(now.minute()).unwrap_or(0),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ValidationError::new("time", format!("expected HH:MM, got {s:?}")))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| ValidationError::new("hour", format!("not a number: {hour:?}")))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ValidationError::new("minute", format!("not a number: {minute:?}")))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
