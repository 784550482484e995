//! Plans: an ordered collection of workout events.
//!
//! Order is insertion order. Display order (day, then start time) is derived
//! on demand by [`group_by_day`] and never stored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, PlanError, PlanResult};
use crate::event::{Intensity, WorkoutEvent, fresh_id, validate_event};
use crate::time;

/// A user's weekly plan.
///
/// Ids are expected to be unique but this is not enforced; lookups by id
/// resolve to the last matching event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    events: Vec<WorkoutEvent>,
}

impl Plan {
    pub fn new(events: Vec<WorkoutEvent>) -> Self {
        Plan { events }
    }

    /// The plan shown to a first-time user: push/pull/legs on Mon/Wed/Fri.
    pub fn starter() -> Self {
        let slot = |name: &str, day: u8, start: &str, duration_min: u32| WorkoutEvent {
            id: fresh_id(),
            name: name.to_string(),
            day,
            start_time: start.to_string(),
            duration_min,
            muscle_group: String::new(),
            intensity: Intensity::Hard,
            color: String::new(),
            notes: String::new(),
        };

        Plan::new(vec![
            WorkoutEvent {
                muscle_group: "Chest".into(),
                color: "#5ad67d".into(),
                notes: "Barbell bench, incline DB, dips, rope pushdowns".into(),
                ..slot("Push (Chest/Tris)", 0, "18:00", 75)
            },
            WorkoutEvent {
                muscle_group: "Back".into(),
                color: "#66c2ff".into(),
                notes: "Weighted pull-ups, rows, curls".into(),
                ..slot("Pull (Back/Bis)", 2, "18:00", 75)
            },
            WorkoutEvent {
                muscle_group: "Legs".into(),
                color: "#ffb86b".into(),
                notes: "Squat, RDL, lunges, calves".into(),
                ..slot("Legs", 4, "10:00", 80)
            },
        ])
    }

    pub fn events(&self) -> &[WorkoutEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Last event carrying `id`.
    pub fn find(&self, id: &str) -> Option<&WorkoutEvent> {
        self.events.iter().rev().find(|e| e.id == id)
    }

    /// Validate `event`, give it a fresh id and append it. Returns the new id.
    pub fn add(&mut self, event: WorkoutEvent) -> PlanResult<String> {
        let mut event = validate_event(event)?;
        event.id = fresh_id();
        let id = event.id.clone();
        self.events.push(event);
        Ok(id)
    }

    /// Replace the event with `id` in place, keeping its id and position.
    pub fn update(&mut self, id: &str, event: WorkoutEvent) -> PlanResult<()> {
        let mut event = validate_event(event)?;
        let slot = self
            .events
            .iter_mut()
            .rev()
            .find(|e| e.id == id)
            .ok_or_else(|| PlanError::EventNotFound(id.to_string()))?;

        event.id = id.to_string();
        *slot = event;
        Ok(())
    }

    /// Remove every event carrying `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        before - self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Pretty JSON for the "export plan" file.
    pub fn to_pretty_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    /// Parse a plan from JSON text. Only a JSON array of workouts is accepted.
    pub fn from_json(text: &str) -> Result<Plan, DecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DecodeError::Json(e.to_string()))?;

        if !value.is_array() {
            return Err(DecodeError::NotAPlan);
        }

        let events: Vec<WorkoutEvent> =
            serde_json::from_value(value).map_err(|e| DecodeError::InvalidEvent(e.to_string()))?;

        Ok(Plan::new(events))
    }
}

impl From<Vec<WorkoutEvent>> for Plan {
    fn from(events: Vec<WorkoutEvent>) -> Self {
        Plan::new(events)
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a WorkoutEvent;
    type IntoIter = std::slice::Iter<'a, WorkoutEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Events grouped by day (all seven days present), each day ordered by start time.
///
/// The sort is stable, so events with the same start time keep their plan
/// order. Events with an unreadable start time sort last within their day;
/// events with an out-of-range day are left out.
pub fn group_by_day(plan: &Plan) -> BTreeMap<u8, Vec<&WorkoutEvent>> {
    let mut days: BTreeMap<u8, Vec<&WorkoutEvent>> = (0..7).map(|d| (d, Vec::new())).collect();

    for event in plan {
        match days.get_mut(&event.day) {
            Some(list) => list.push(event),
            None => tracing::warn!(
                "Leaving '{}' out of the week view: day {} is out of range",
                event.name,
                event.day
            ),
        }
    }

    for list in days.values_mut() {
        list.sort_by_key(|e| time::to_minutes(&e.start_time).unwrap_or(u32::MAX));
    }

    days
}

/// One legend entry: a muscle group and the color it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Distinct muscle groups in first-seen order, colored by their first event.
pub fn legend(plan: &Plan) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = Vec::new();

    for event in plan {
        let label = event.group_label();
        if entries.iter().all(|entry| entry.label != label) {
            entries.push(LegendEntry {
                label: label.to_string(),
                color: event.color_or_default().to_string(),
            });
        }
    }

    entries
}
