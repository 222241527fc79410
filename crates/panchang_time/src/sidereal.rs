//! Greenwich and local mean sidereal time.
//!
//! Needed by the moonrise/moonset solver to turn the Moon's right ascension
//! into an hour angle. Arguments are UT Julian Days.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 12.4 (IAU 1982 expression
//! in degrees).

use crate::angle::normalize_360;
use crate::julian::{J2000_JD, jd_to_centuries};

/// Rate at which the hour angle of a fixed point advances, in degrees per
/// mean solar day (one sidereal revolution takes 0.99727 solar days).
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time at a UT Julian Day.
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let gmst = 280.460_618_37
        + SIDEREAL_RATE_DEG_PER_DAY * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(gmst)
}

/// Local Sidereal Time from GMST and observer east longitude, in degrees [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg + longitude_east_deg)
}
