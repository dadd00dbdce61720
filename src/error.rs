//! Error types shared across the crate

use thiserror::Error;

/// The expected duration of an agenda page could not be read as a number of seconds
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed expected duration: {raw:?}")]
pub struct MalformedDurationError {
    pub raw: String,
}

/// Failures of the rolling date-range window calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window start {start} is after window end {end}")]
    InvertedWindow { start: i64, end: i64 },

    #[error("timestamp {0} is outside the supported calendar range")]
    TimestampOutOfRange(i64),

    #[error("unknown reporting frequency: {0}")]
    UnknownFrequency(String),

    #[error("unknown step direction: {0}")]
    UnknownDirection(String),
}

/// Failures of the meeting runtime that owns the page timers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingError {
    #[error("no agenda page with id {0}")]
    UnknownPage(String),

    #[error("agenda page id {0} appears more than once")]
    DuplicatePage(String),

    #[error("timestamp {0} is not a valid start time")]
    InvalidTimestamp(i64),

    #[error("meeting is already paused")]
    AlreadyPaused,

    #[error("meeting is not paused")]
    NotPaused,

    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),

    #[error(transparent)]
    Window(#[from] WindowError),
}
