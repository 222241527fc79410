//! Time and angle utilities for the panchang engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - ΔT (TT − UT) polynomials for evaluating ephemeris series in TT
//! - Greenwich and local mean sidereal time
//! - IANA time-zone handling (`CivilZone`) mapping civil dates to UT Julian Days
//! - Degree normalization and linear time-from-angle interpolation
//! - Clock-time formatting and parsing helpers

pub mod angle;
pub mod delta_t;
pub mod error;
pub mod format;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use angle::{Dms, days_to_traverse, deg_to_dms, normalize_360, normalize_pm180};
pub use delta_t::{decimal_year, delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use format::{format_duration_hm, format_hm, format_hms, format_local, parse_date, parse_hm};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, weekday_index_from_jd,
};
pub use sidereal::{SIDEREAL_RATE_DEG_PER_DAY, gmst_deg, local_sidereal_time_deg};
pub use zone::{CivilZone, jd_to_utc, utc_to_jd};
