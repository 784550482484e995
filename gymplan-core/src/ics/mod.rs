//! Calendar (.ics) export.
//!
//! Writes an RFC 5545 calendar with one weekly, never-ending VEVENT per
//! workout. Times are floating local times since a plan has no time zone.

mod generate;

pub use generate::{
    CalendarExport, ExportOptions, ExportWarning, SkipReason, export_plan, uid_for,
};

/// MIME type of the exported document.
pub const MIME_TYPE: &str = "text/calendar; charset=utf-8";

/// Suggested file name for downloads.
pub const FILE_NAME: &str = "gym-plan.ics";

pub const DEFAULT_PRODUCT_ID: &str = "-//gymplan//Weekly Workout Planner//EN";
