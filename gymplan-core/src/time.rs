//! Clock-time arithmetic for weekly workouts.
//!
//! Workouts are anchored to a day of the week and a local wall-clock time, so
//! everything here is time-zone naive. Times are `HH:MM` strings on the wire;
//! [`ClockTime`] is the parsed form.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FormatError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A local time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Time of day `minutes` after midnight, wrapping past 24h.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        ClockTime {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// Minutes since local midnight (0..1440).
    pub fn minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Start and end instants when this time is placed on `date`.
    /// The end moves onto later calendar days when the duration crosses midnight.
    pub fn span_on(&self, date: NaiveDate, duration_min: u32) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(self.to_naive_time());
        let end = start + Duration::minutes(i64::from(duration_min));
        (start, end)
    }
}

impl FromStr for ClockTime {
    type Err = FormatError;

    /// Accepts `H:MM` or `HH:MM`. Minutes must always be two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| FormatError::MissingColon(s.to_string()))?;

        let is_digits = |part: &str, widths: &[usize]| {
            widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_digits(hour, &[1, 2]) || !is_digits(minute, &[2]) {
            return Err(FormatError::NotNumeric(s.to_string()));
        }

        let hour: u8 = hour
            .parse()
            .map_err(|_| FormatError::NotNumeric(s.to_string()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| FormatError::NotNumeric(s.to_string()))?;

        if hour > 23 {
            return Err(FormatError::HourOutOfRange(s.to_string()));
        }
        if minute > 59 {
            return Err(FormatError::MinuteOutOfRange(s.to_string()));
        }

        Ok(ClockTime { hour, minute })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Minutes since local midnight for an `HH:MM` string.
pub fn to_minutes(time: &str) -> Result<u32, FormatError> {
    Ok(time.parse::<ClockTime>()?.minutes())
}

/// Clock time `duration_min` after `time`, wrapped into a single day.
///
/// Whether the result lands on the next day is not reported; use
/// [`crosses_midnight`] for that.
pub fn add_minutes(time: &str, duration_min: u32) -> Result<String, FormatError> {
    let start = to_minutes(time)?;
    Ok(ClockTime::from_minutes(start + duration_min % MINUTES_PER_DAY).to_string())
}

/// Canonical zero-padded `HH:MM` form. Idempotent.
pub fn format_time(time: &str) -> Result<String, FormatError> {
    Ok(time.parse::<ClockTime>()?.to_string())
}

/// True when a workout starting at `time` ends on a later calendar day.
pub fn crosses_midnight(time: &str, duration_min: u32) -> Result<bool, FormatError> {
    Ok(to_minutes(time)?.saturating_add(duration_min) >= MINUTES_PER_DAY)
}
