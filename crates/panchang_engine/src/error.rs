//! Error types for panchang computation.

use panchang_time::TimeError;
use panchang_vedic_base::VedicError;
use thiserror::Error;

/// Errors from building a [`Moment`](crate::Moment) or computing its panchang.
///
/// Polar days without sunrise are not errors: they surface as absent
/// timestamps in the result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// A request field outside its valid range, rejected before any computation.
    #[error("{field} out of range: {value}")]
    InputOutOfRange { field: &'static str, value: String },
    /// The IANA zone identifier is not in the tz database.
    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),
    /// Civil-time conversion failed.
    #[error("time error: {0}")]
    Time(TimeError),
    /// Classification or day-division failed.
    #[error("vedic error: {0}")]
    Vedic(#[from] VedicError),
    /// A new-moon search failed to settle.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::UnknownTimezone(id) => Self::UnknownTimezone(id),
            TimeError::InvalidDate(s) => Self::InputOutOfRange { field: "date", value: s },
            other => Self::Time(other),
        }
    }
}
