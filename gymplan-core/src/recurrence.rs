//! Weekly recurrence rules and their expansion into concrete occurrences.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rrule::RRuleSet;

use crate::error::{PlanError, PlanResult};
use crate::event::WorkoutEvent;
use crate::plan::Plan;

/// RFC 5545 BYDAY codes, indexed by day number (Monday = 0).
const BYDAY_CODES: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

/// Upper bound on occurrences produced for one workout in one expansion.
const MAX_OCCURRENCES: u16 = 366;

/// Never-ending weekly RRULE value for `day`, e.g. `FREQ=WEEKLY;BYDAY=FR`.
pub fn weekly_rule(day: u8) -> Option<String> {
    BYDAY_CODES
        .get(usize::from(day))
        .map(|code| format!("FREQ=WEEKLY;BYDAY={}", code))
}

/// One concrete session of a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub event_id: String,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Sessions of `event` starting within `[from, to]` (local, time-zone naive).
///
/// The end of a session moves onto the next day when the workout runs past
/// midnight.
pub fn occurrences(
    event: &WorkoutEvent,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> PlanResult<Vec<Occurrence>> {
    let time = event.clock_time()?;
    let rule = weekly_rule(event.day).ok_or_else(|| {
        PlanError::Recurrence(format!("day {} of '{}' is out of range", event.day, event.name))
    })?;

    if to < from {
        return Ok(Vec::new());
    }

    // The rrule crate wants a zoned DTSTART; floating times are treated as UTC
    // and converted back afterwards.
    let dtstart = from.date().and_time(time.to_naive_time());
    let rrule_str = format!(
        "DTSTART:{}Z\nRRULE:{}",
        dtstart.format("%Y%m%dT%H%M%S"),
        rule
    );

    let rrule_set: RRuleSet = rrule_str.parse().map_err(|e| {
        PlanError::Recurrence(format!("Failed to parse RRULE for '{}': {}", event.name, e))
    })?;

    // after/before are exclusive, widen by a second to make the range inclusive
    let tz: rrule::Tz = Utc.into();
    let after = (as_utc(from) - Duration::seconds(1)).with_timezone(&tz);
    let before = (as_utc(to) + Duration::seconds(1)).with_timezone(&tz);

    let result = rrule_set.after(after).before(before).all(MAX_OCCURRENCES);
    let duration = Duration::minutes(i64::from(event.duration_min));

    Ok(result
        .dates
        .iter()
        .map(|dt| {
            let start = dt.naive_utc();
            Occurrence {
                event_id: event.id.clone(),
                name: event.name.clone(),
                start,
                end: start + duration,
            }
        })
        .collect())
}

/// Sessions of every workout in `plan` within `[from, to]`, ordered by start.
///
/// Workouts that cannot be expanded are skipped with a warning.
pub fn plan_agenda(plan: &Plan, from: NaiveDateTime, to: NaiveDateTime) -> Vec<Occurrence> {
    let mut agenda: Vec<Occurrence> = plan
        .events()
        .iter()
        .filter_map(|event| match occurrences(event, from, to) {
            Ok(found) => Some(found),
            Err(e) => {
                tracing::warn!("Leaving '{}' out of the agenda: {}", event.name, e);
                None
            }
        })
        .flatten()
        .collect();

    agenda.sort_by_key(|o| o.start);
    agenda
}

fn as_utc(dt: NaiveDateTime) -> DateTime<Utc> {
    dt.and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Intensity;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn at(day: u8, start: &str, duration_min: u32) -> WorkoutEvent {
        WorkoutEvent {
            id: format!("evt-{}-{}", day, start),
            name: "Session".to_string(),
            day,
            start_time: start.to_string(),
            duration_min,
            muscle_group: String::new(),
            intensity: Intensity::Moderate,
            color: String::new(),
            notes: String::new(),
        }
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn weekly_rule_maps_days_to_byday() {
        assert_eq!(weekly_rule(0).as_deref(), Some("FREQ=WEEKLY;BYDAY=MO"));
        assert_eq!(weekly_rule(4).as_deref(), Some("FREQ=WEEKLY;BYDAY=FR"));
        assert_eq!(weekly_rule(6).as_deref(), Some("FREQ=WEEKLY;BYDAY=SU"));
        assert_eq!(weekly_rule(7), None);
    }

    #[test]
    fn expands_one_session_per_week() {
        // Four weeks starting Monday 2024-01-01
        let found = occurrences(&at(2, "18:00", 60), midnight(2024, 1, 1), midnight(2024, 1, 29)).unwrap();

        assert_eq!(found.len(), 4);
        for occ in &found {
            assert_eq!(occ.start.weekday(), Weekday::Wed);
            assert_eq!(occ.start.format("%H:%M").to_string(), "18:00");
        }
        assert_eq!(found[1].start - found[0].start, Duration::days(7));
    }

    #[test]
    fn late_sessions_end_the_next_day() {
        let found = occurrences(&at(4, "23:00", 120), midnight(2024, 1, 1), midnight(2024, 1, 8)).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start.weekday(), Weekday::Fri);
        assert_eq!(found[0].end.weekday(), Weekday::Sat);
        assert_eq!(found[0].end.format("%H:%M").to_string(), "01:00");
    }

    #[test]
    fn invalid_events_are_errors_and_skipped_in_agenda() {
        let from = midnight(2024, 1, 1);
        let to = midnight(2024, 1, 7);

        assert!(occurrences(&at(1, "99:99", 30), from, to).is_err());
        assert!(occurrences(&at(9, "10:00", 30), from, to).is_err());

        let plan = Plan::new(vec![at(1, "99:99", 30), at(0, "07:00", 30)]);
        assert_eq!(plan_agenda(&plan, from, to).len(), 1);
    }

    #[test]
    fn agenda_is_sorted_by_start() {
        let plan = Plan::new(vec![at(3, "09:00", 30), at(0, "19:00", 30), at(0, "06:00", 30)]);
        let agenda = plan_agenda(&plan, midnight(2024, 1, 1), midnight(2024, 1, 7));

        let starts: Vec<String> = agenda
            .iter()
            .map(|o| o.start.format("%a %H:%M").to_string())
            .collect();
        assert_eq!(starts, vec!["Mon 06:00", "Mon 19:00", "Thu 09:00"]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let found = occurrences(&at(0, "07:00", 30), midnight(2024, 1, 8), midnight(2024, 1, 1)).unwrap();
        assert!(found.is_empty());
    }
}
