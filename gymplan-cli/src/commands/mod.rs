pub mod add;
pub mod agenda;
pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export_ics;
pub mod json;
pub mod open;
pub mod share;
pub mod week;

use anyhow::{Result, anyhow};
use gymplan_core::event::{Intensity, WorkoutEvent, parse_day};
use gymplan_core::time::ClockTime;

use crate::WorkoutArgs;

/// Apply whichever fields were given on the command line to `event`.
pub fn apply_fields(event: &mut WorkoutEvent, fields: WorkoutArgs) -> Result<()> {
    if let Some(day) = fields.day {
        event.day = parse_day(&day).ok_or_else(|| {
            anyhow!("Unknown day '{}'. Use mon..sun, a full day name, or 0-6", day)
        })?;
    }
    if let Some(start) = fields.start {
        let time: ClockTime = start.parse()?;
        event.start_time = time.to_string();
    }
    if let Some(duration) = fields.duration {
        event.duration_min = duration;
    }
    if let Some(group) = fields.group {
        event.muscle_group = group;
    }
    if let Some(intensity) = fields.intensity {
        event.intensity = Intensity::from(intensity);
    }
    if let Some(color) = fields.color {
        event.color = color;
    }
    if let Some(notes) = fields.notes {
        event.notes = notes;
    }
    Ok(())
}
