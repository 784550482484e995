//! Workout events.
//!
//! A `WorkoutEvent` is a weekly recurring slot: a day of the week, a local
//! start time, and a duration. Field names serialize in camelCase so that the
//! JSON form matches what shared links and exported plan files carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, ValidationError};
use crate::time::{self, ClockTime};

/// Short day labels, indexed by day number (Monday = 0).
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Label used wherever a workout has no muscle group.
pub const DEFAULT_GROUP_LABEL: &str = "Workout";

pub const DEFAULT_COLOR: &str = "#5ad67d";
pub const DEFAULT_START_TIME: &str = "18:00";
pub const DEFAULT_DURATION_MIN: u32 = 60;

/// A single weekly workout slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEvent {
    /// Opaque identifier, stable across edits.
    pub id: String,
    pub name: String,
    /// 0 = Monday ... 6 = Sunday
    pub day: u8,
    /// Local clock time, `HH:MM`
    pub start_time: String,
    pub duration_min: u32,
    #[serde(default)]
    pub muscle_group: String,
    #[serde(default = "Intensity::blank")]
    pub intensity: Intensity,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: String,
}

impl WorkoutEvent {
    /// New event with a fresh id and the entry form's defaults for the optional fields.
    pub fn new(name: impl Into<String>, day: u8, start: ClockTime, duration_min: u32) -> Self {
        WorkoutEvent {
            id: fresh_id(),
            name: name.into(),
            day,
            start_time: start.to_string(),
            duration_min,
            muscle_group: String::new(),
            intensity: Intensity::default(),
            color: DEFAULT_COLOR.to_string(),
            notes: String::new(),
        }
    }

    pub fn clock_time(&self) -> Result<ClockTime, FormatError> {
        self.start_time.parse()
    }

    /// Muscle group for display and grouping; blank shows as "Workout".
    pub fn group_label(&self) -> &str {
        let group = self.muscle_group.trim();
        if group.is_empty() {
            DEFAULT_GROUP_LABEL
        } else {
            group
        }
    }

    pub fn color_or_default(&self) -> &str {
        if self.color.trim().is_empty() {
            DEFAULT_COLOR
        } else {
            &self.color
        }
    }

    /// End clock time, wrapped into the same 24h window.
    pub fn end_time(&self) -> Result<String, FormatError> {
        time::add_minutes(&self.start_time, self.duration_min)
    }
}

impl fmt::Display for WorkoutEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = day_label(self.day).unwrap_or("?");
        write!(f, "{} ({} {})", self.name, day, self.start_time)
    }
}

/// Check an event against the plan invariants.
///
/// On success the event comes back normalized: name, muscle group and notes
/// trimmed, start time in canonical `HH:MM` form.
pub fn validate_event(mut event: WorkoutEvent) -> Result<WorkoutEvent, ValidationError> {
    let name = event.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    event.name = name.to_string();

    if event.day > 6 {
        return Err(ValidationError::DayOutOfRange(event.day));
    }

    event.start_time = time::format_time(&event.start_time)?;

    if event.duration_min == 0 {
        return Err(ValidationError::ZeroDuration);
    }

    event.muscle_group = event.muscle_group.trim().to_string();
    event.notes = event.notes.trim().to_string();

    Ok(event)
}

/// A fresh, never-reused event id.
pub fn fresh_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// How hard a workout is meant to be.
///
/// The known labels are suggestions only: anything else found in shared or
/// imported data is kept verbatim in `Custom`, and a blank label is
/// `Custom("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    Easy,
    #[default]
    Moderate,
    Hard,
    Max,
    Custom(String),
}

impl Intensity {
    pub fn blank() -> Self {
        Intensity::Custom(String::new())
    }

    pub fn label(&self) -> &str {
        match self {
            Intensity::Easy => "Easy",
            Intensity::Moderate => "Moderate",
            Intensity::Hard => "Hard",
            Intensity::Max => "Max",
            Intensity::Custom(label) => label,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label().trim().is_empty()
    }
}

impl From<String> for Intensity {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Easy" => Intensity::Easy,
            "Moderate" => Intensity::Moderate,
            "Hard" => Intensity::Hard,
            "Max" => Intensity::Max,
            _ => Intensity::Custom(label),
        }
    }
}

impl From<&str> for Intensity {
    fn from(label: &str) -> Self {
        Intensity::from(label.to_string())
    }
}

impl From<Intensity> for String {
    fn from(intensity: Intensity) -> Self {
        match intensity {
            Intensity::Custom(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn day_label(day: u8) -> Option<&'static str> {
    DAY_LABELS.get(usize::from(day)).copied()
}

/// Parse a day given as an index (`0`-`6`), a short label (`tue`) or a full name (`tuesday`).
pub fn parse_day(input: &str) -> Option<u8> {
    let input = input.trim().to_lowercase();

    if let Ok(n) = input.parse::<u8>() {
        return (n <= 6).then_some(n);
    }

    DAY_NAMES
        .iter()
        .position(|name| *name == input || (input.len() == 3 && name.starts_with(&input)))
        .map(|i| i as u8)
}
