//! Linear start/end estimates for an angular bucket.
//!
//! Each panchanga element advances with its own relative motion; the rate
//! used for one element must never be reused for another.

use panchang_ephem::LuniSolar;
use panchang_time::{days_to_traverse, normalize_360};
use serde::Serialize;

use crate::classify::Segment;
use crate::error::VedicError;

/// The angle an element is classified on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelativeMotion {
    /// Moon − Sun: tithi and karana.
    Elongation,
    /// Sidereal Moon: nakshatra.
    Moon,
    /// Sidereal Moon + Sun: yoga.
    Sum,
    /// Sidereal Sun: rashi of the Sun, sankranti.
    Sun,
}

impl RelativeMotion {
    /// Current angle in degrees [0, 360).
    pub fn angle(self, ls: &LuniSolar) -> f64 {
        match self {
            Self::Elongation => ls.elongation_deg(),
            Self::Moon => ls.moon_sidereal.longitude_deg,
            Self::Sum => ls.sidereal_sum_deg(),
            Self::Sun => ls.sun_sidereal.longitude_deg,
        }
    }

    /// Rate of the angle in degrees per day.
    pub fn rate(self, ls: &LuniSolar) -> f64 {
        match self {
            Self::Elongation => ls.elongation_rate(),
            Self::Moon => ls.moon_sidereal.daily_rate_deg,
            Self::Sum => ls.sidereal_sum_rate(),
            Self::Sun => ls.sun_sidereal.daily_rate_deg,
        }
    }

    /// Signed distance in degrees from `target_deg` to the current angle,
    /// in (-180, 180]. Zero at the crossing.
    pub fn offset_from(self, ls: &LuniSolar, target_deg: f64) -> f64 {
        let d = normalize_360(self.angle(ls) - target_deg);
        if d > 180.0 { d - 360.0 } else { d }
    }
}

/// Estimated bucket boundaries as UT Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TransitionWindow {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Project a classified segment back and forward in time at a constant rate.
///
/// `start = reference − degrees_in / rate`, `end = reference + remaining / rate`.
pub fn linear_transition(
    segment: &Segment,
    rate_deg_per_day: f64,
    reference_jd: f64,
) -> Result<TransitionWindow, VedicError> {
    let back = days_to_traverse(segment.degrees_in, rate_deg_per_day);
    let ahead = days_to_traverse(segment.degrees_remaining(), rate_deg_per_day);
    if !back.is_finite() || !ahead.is_finite() {
        return Err(VedicError::NonPositiveRate(rate_deg_per_day));
    }
    Ok(TransitionWindow {
        start_jd: reference_jd - back,
        end_jd: reference_jd + ahead,
    })
}
