//! ICS document generation.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, Property, ValueType};
use thiserror::Error;
use uuid::Uuid;

use super::DEFAULT_PRODUCT_ID;
use crate::error::FormatError;
use crate::event::{DEFAULT_GROUP_LABEL, WorkoutEvent};
use crate::plan::Plan;
use crate::recurrence::weekly_rule;

/// Namespace for exported UIDs, so they never collide with workout ids.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a7e_93d4_4b8a_a51e_07c2_d9e3_f418);
const UID_DOMAIN: &str = "gymplan";

/// Last year an RFC 5545 DATE-TIME can express.
const MAX_ICS_YEAR: i32 = 9999;

const DESCRIPTION_SEPARATOR: &str = " · ";

/// Everything the exporter needs besides the plan itself.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Any day in the week whose dates anchor the recurrences.
    pub week_of: NaiveDate,
    /// DTSTAMP for every entry.
    pub stamp: DateTime<Utc>,
    pub calendar_name: String,
    pub product_id: String,
}

impl ExportOptions {
    /// Anchor recurrences in the week containing `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        ExportOptions {
            week_of: today - Duration::days(i64::from(today.weekday().num_days_from_monday())),
            stamp: now,
            calendar_name: "Gym Plan".to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }

    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    /// Concrete date for `day` (0 = Monday) in the anchor week.
    fn anchor_date(&self, day: u8) -> NaiveDate {
        let offset = i64::from(self.week_of.weekday().num_days_from_monday());
        self.week_of - Duration::days(offset) + Duration::days(i64::from(day))
    }
}

/// Why a workout was left out of an export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("unreadable start time: {0}")]
    InvalidStartTime(FormatError),

    #[error("day {0} is not a day of the week")]
    DayOutOfRange(u8),

    #[error("a {0}-minute session ends after the year 9999")]
    EndOutOfRange(u32),
}

/// A workout the exporter skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportWarning {
    pub event_id: String,
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped '{}' ({}): {}", self.name, self.event_id, self.reason)
    }
}

/// The exported document plus what had to be left out.
#[derive(Debug, Clone)]
pub struct CalendarExport {
    pub document: String,
    pub exported: usize,
    pub warnings: Vec<ExportWarning>,
}

/// Export `plan` as an .ics document.
///
/// Workouts that cannot be placed on the calendar are skipped and reported in
/// `warnings`; they never abort the export.
pub fn export_plan(plan: &Plan, options: &ExportOptions) -> CalendarExport {
    // Calendar::new() would bring its own PRODID
    let mut cal = Calendar::empty();
    cal.append_property(Property::new("VERSION", "2.0"));
    cal.append_property(Property::new("PRODID", &options.product_id));
    cal.append_property(Property::new("CALSCALE", "GREGORIAN"));
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.name(&options.calendar_name);

    let dtstamp = options.stamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut warnings = Vec::new();
    let mut seen_uids = HashSet::new();
    let mut exported = 0;

    for (position, event) in plan.events().iter().enumerate() {
        let (start, end, rrule) = match placement(event, options) {
            Ok(placed) => placed,
            Err(reason) => {
                tracing::warn!("Skipping '{}' in calendar export: {}", event.name, reason);
                warnings.push(ExportWarning {
                    event_id: event.id.clone(),
                    name: event.name.clone(),
                    reason,
                });
                continue;
            }
        };

        // Repeated ids get a remixed UID; keep remixing until it is unused
        let mut uid = uid_for(&event.id);
        let mut salt = position;
        while !seen_uids.insert(uid.clone()) {
            uid = uid_for(&format!("{}#{}", event.id, salt));
            salt += 1;
        }

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&uid);
        ics_event.add_property("DTSTAMP", &dtstamp);

        // Floating times: no Z, no TZID
        ics_event.add_property("DTSTART", floating(start));
        ics_event.add_property("DTEND", floating(end));
        ics_event.add_property("RRULE", &rrule);

        ics_event.append_property(text_property("SUMMARY", summary(event)));
        ics_event.append_property(text_property("DESCRIPTION", &describe(event)));
        ics_event.append_property(text_property("CATEGORIES", event.group_label()));
        if !event.color.trim().is_empty() {
            ics_event.append_property(text_property("X-WORKOUT-COLOR", event.color.trim()));
        }

        cal.push(ics_event.done());
        exported += 1;
    }

    let document = cal.done().to_string();

    tracing::debug!(
        "Exported {} of {} workouts to calendar ({} bytes)",
        exported,
        plan.len(),
        document.len()
    );

    CalendarExport {
        document,
        exported,
        warnings,
    }
}

/// Stable calendar UID for a workout id, distinct from the id itself.
pub fn uid_for(event_id: &str) -> String {
    let uuid = Uuid::new_v5(&UID_NAMESPACE, event_id.as_bytes());
    format!("{}@{}", uuid, UID_DOMAIN)
}

/// Start, end and RRULE for an event, or why it cannot be placed.
fn placement(
    event: &WorkoutEvent,
    options: &ExportOptions,
) -> Result<(NaiveDateTime, NaiveDateTime, String), SkipReason> {
    let time = event.clock_time().map_err(SkipReason::InvalidStartTime)?;
    let rrule = weekly_rule(event.day).ok_or(SkipReason::DayOutOfRange(event.day))?;

    let (start, end) = time.span_on(options.anchor_date(event.day), event.duration_min);
    if end.year() > MAX_ICS_YEAR {
        return Err(SkipReason::EndOutOfRange(event.duration_min));
    }

    Ok((start, end, rrule))
}

/// A TEXT property; the VALUE=TEXT parameter makes icalendar escape it.
fn text_property(name: &str, value: &str) -> Property {
    let mut prop = Property::new(name, normalize_line_breaks(value));
    prop.append_parameter(ValueType::Text);
    prop.done()
}

/// CRLF and lone CR both become `\n`, the only break TEXT escaping knows.
fn normalize_line_breaks(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

fn summary(event: &WorkoutEvent) -> &str {
    let name = event.name.trim();
    if name.is_empty() { DEFAULT_GROUP_LABEL } else { name }
}

/// "<group> · <intensity>" on the first line, notes below.
/// Blank intensity drops the separator; blank notes drop the second line.
fn describe(event: &WorkoutEvent) -> String {
    let mut text = event.group_label().to_string();

    if !event.intensity.is_blank() {
        text.push_str(DESCRIPTION_SEPARATOR);
        text.push_str(event.intensity.label().trim());
    }

    let notes = event.notes.trim();
    if !notes.is_empty() {
        text.push('\n');
        text.push_str(notes);
    }

    text
}

fn floating(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}
