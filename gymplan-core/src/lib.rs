//! Core of gymplan, a weekly workout planner.
//!
//! This crate provides:
//! - `time`: clock-time arithmetic (`HH:MM`, durations, midnight rollover)
//! - `event` and `plan`: the plan model, validation and the day-grouped view
//! - `token`: share tokens that carry a whole plan in a URL fragment
//! - `ics`: weekly recurring calendar export
//! - `recurrence`: expansion of the weekly rules into concrete sessions
//! - `config` and `store`: configuration and local plan storage

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod plan;
pub mod recurrence;
pub mod store;
pub mod time;
pub mod token;

pub use error::{DecodeError, FormatError, PlanError, PlanResult, ValidationError};
pub use event::{Intensity, WorkoutEvent, validate_event};
pub use plan::{LegendEntry, Plan, group_by_day, legend};
