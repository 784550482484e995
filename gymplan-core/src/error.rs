//! Error types for gymplan.

use thiserror::Error;

/// A clock-time string that is not `HH:MM`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("time '{0}' is missing the ':' separator")]
    MissingColon(String),

    #[error("time '{0}' must be HH:MM with numeric parts")]
    NotNumeric(String),

    #[error("hour in '{0}' must be between 00 and 23")]
    HourOutOfRange(String),

    #[error("minute in '{0}' must be between 00 and 59")]
    MinuteOutOfRange(String),
}

/// A workout event that breaks the plan model's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("workout name cannot be empty")]
    EmptyName,

    #[error("day {0} is out of range (expected 0 = Mon through 6 = Sun)")]
    DayOutOfRange(u8),

    #[error("invalid start time: {0}")]
    InvalidStartTime(#[from] FormatError),

    #[error("duration must be at least one minute")]
    ZeroDuration,
}

/// A string that carries a share token but cannot be turned back into a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("share token has a malformed percent escape: {0}")]
    Percent(String),

    #[error("share token is not valid base64: {0}")]
    Base64(String),

    #[error("share token does not contain UTF-8 text")]
    Utf8,

    #[error("share token does not contain valid JSON: {0}")]
    Json(String),

    #[error("plan data must be a list of workouts")]
    NotAPlan,

    #[error("plan contains an invalid workout: {0}")]
    InvalidEvent(String),
}

/// Errors from the collaborator side of gymplan (storage, config, agenda).
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error("No workout with id '{0}'")]
    EventNotFound(String),
}

/// Result type alias for gymplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
