//! Error types for time conversion and parsing.

use thiserror::Error;

/// Errors from calendar conversion, time-zone lookup, or clock parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The IANA zone identifier is not in the tz database.
    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),
    /// A calendar date string could not be parsed.
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    /// A clock time string could not be parsed.
    #[error("invalid time {0:?}: expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// Local wall-clock time does not exist in the zone (DST gap) and
    /// no later time within the gap window resolved.
    #[error("local time {0} does not exist in zone {1}")]
    NonexistentLocalTime(String, &'static str),
    /// Julian Day cannot be represented as a chrono timestamp.
    #[error("julian day {0} is outside the representable timestamp range")]
    JulianDayOutOfRange(f64),
}
