//! Error types for Vedic calculations.

use panchang_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Index outside the cardinality of a named table.
    #[error("{what} index {value} out of range")]
    IndexOutOfRange { what: &'static str, value: u8 },
    /// Day segments whose end precedes their start.
    #[error("invalid day span: end {end_jd} precedes start {start_jd}")]
    InvalidSpan { start_jd: f64, end_jd: f64 },
    /// An angular rate that cannot carry an element across its bucket.
    #[error("non-positive angular rate {0} deg/day")]
    NonPositiveRate(f64),
    /// A rise/set event passed to the solver for the other body.
    #[error("{0} is not handled by this solver")]
    UnsupportedEvent(&'static str),
}
