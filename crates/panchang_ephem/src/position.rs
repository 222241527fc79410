//! Longitude-and-rate snapshots of the Sun and Moon.
//!
//! Every panchanga element is a function of one or both sidereal longitudes,
//! and every transition estimate divides a remaining angle by a rate, so a
//! position always travels with its daily motion.

use panchang_time::{normalize_360, normalize_pm180};
use serde::{Deserialize, Serialize};

use crate::ayanamsha::{AyanamshaSystem, PRECESSION_DAILY_RATE_DEG, ayanamsha_deg};
use crate::moon::moon_longitude;
use crate::sun::sun_apparent_longitude;

/// Mean daily motion of the Sun in degrees.
pub const SUN_MEAN_DAILY_RATE: f64 = 0.985_647_3;

/// Mean daily motion of the Moon in degrees.
pub const MOON_MEAN_DAILY_RATE: f64 = 13.176_358;

/// Half-width of the central difference used for instantaneous rates, in days.
const RATE_HALF_STEP_DAYS: f64 = 0.05;

/// The two bodies the engine tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Long-run average motion in degrees per day.
    pub const fn mean_daily_rate(self) -> f64 {
        match self {
            Self::Sun => SUN_MEAN_DAILY_RATE,
            Self::Moon => MOON_MEAN_DAILY_RATE,
        }
    }

    /// Apparent tropical longitude at a UT Julian Day.
    pub fn tropical_longitude(self, jd_ut: f64) -> f64 {
        match self {
            Self::Sun => sun_apparent_longitude(jd_ut),
            Self::Moon => moon_longitude(jd_ut),
        }
    }

    /// Instantaneous tropical motion in degrees per day, by central difference.
    pub fn true_daily_rate(self, jd_ut: f64) -> f64 {
        let before = self.tropical_longitude(jd_ut - RATE_HALF_STEP_DAYS);
        let after = self.tropical_longitude(jd_ut + RATE_HALF_STEP_DAYS);
        normalize_pm180(after - before) / (2.0 * RATE_HALF_STEP_DAYS)
    }
}

/// Which daily rate accompanies a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateModel {
    /// Fixed long-run average motion.
    Mean,
    /// Motion at the instant, from the position series.
    #[default]
    True,
}

/// A longitude together with its daily motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    /// Longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Motion in degrees per day.
    pub daily_rate_deg: f64,
}

fn daily_rate(body: Body, jd_ut: f64, rate: RateModel) -> f64 {
    match rate {
        RateModel::Mean => body.mean_daily_rate(),
        RateModel::True => body.true_daily_rate(jd_ut),
    }
}

/// Tropical longitude and rate of a body.
pub fn tropical_position(body: Body, jd_ut: f64, rate: RateModel) -> BodyPosition {
    BodyPosition {
        longitude_deg: body.tropical_longitude(jd_ut),
        daily_rate_deg: daily_rate(body, jd_ut, rate),
    }
}

/// Tropical position of the Sun.
pub fn sun_position(jd_ut: f64, rate: RateModel) -> BodyPosition {
    tropical_position(Body::Sun, jd_ut, rate)
}

/// Tropical position of the Moon.
pub fn moon_position(jd_ut: f64, rate: RateModel) -> BodyPosition {
    tropical_position(Body::Moon, jd_ut, rate)
}

/// Sidereal longitude and rate of a body.
///
/// Under [`RateModel::True`] the rate is reduced by the precession of the
/// equinox. Mean rates are used as given.
pub fn sidereal_position(
    body: Body,
    jd_ut: f64,
    system: AyanamshaSystem,
    rate: RateModel,
) -> BodyPosition {
    let aya = ayanamsha_deg(system, jd_ut);
    let tropical = tropical_position(body, jd_ut, rate);
    to_sidereal(tropical, aya, rate)
}

fn to_sidereal(tropical: BodyPosition, ayanamsha: f64, rate: RateModel) -> BodyPosition {
    let daily_rate_deg = match rate {
        RateModel::Mean => tropical.daily_rate_deg,
        RateModel::True => tropical.daily_rate_deg - PRECESSION_DAILY_RATE_DEG,
    };
    BodyPosition {
        longitude_deg: normalize_360(tropical.longitude_deg - ayanamsha),
        daily_rate_deg,
    }
}

/// Sun and Moon at one instant, in both zodiacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LuniSolar {
    /// UT Julian Day of the snapshot.
    pub jd_ut: f64,
    /// Ayanamsha applied, degrees.
    pub ayanamsha_deg: f64,
    pub sun_tropical: BodyPosition,
    pub moon_tropical: BodyPosition,
    pub sun_sidereal: BodyPosition,
    pub moon_sidereal: BodyPosition,
}

impl LuniSolar {
    /// Compute both bodies at `jd_ut`.
    pub fn at(jd_ut: f64, system: AyanamshaSystem, rate: RateModel) -> Self {
        let aya = ayanamsha_deg(system, jd_ut);
        let sun_tropical = sun_position(jd_ut, rate);
        let moon_tropical = moon_position(jd_ut, rate);
        Self {
            jd_ut,
            ayanamsha_deg: aya,
            sun_tropical,
            moon_tropical,
            sun_sidereal: to_sidereal(sun_tropical, aya, rate),
            moon_sidereal: to_sidereal(moon_tropical, aya, rate),
        }
    }

    /// Moon minus Sun in degrees [0, 360). Zodiac-independent.
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.moon_tropical.longitude_deg - self.sun_tropical.longitude_deg)
    }

    /// Rate of change of the elongation, degrees per day.
    pub fn elongation_rate(&self) -> f64 {
        self.moon_tropical.daily_rate_deg - self.sun_tropical.daily_rate_deg
    }

    /// Sidereal Sun plus sidereal Moon in degrees [0, 360).
    pub fn sidereal_sum_deg(&self) -> f64 {
        normalize_360(self.sun_sidereal.longitude_deg + self.moon_sidereal.longitude_deg)
    }

    /// Rate of change of the sidereal sum, degrees per day.
    pub fn sidereal_sum_rate(&self) -> f64 {
        self.sun_sidereal.daily_rate_deg + self.moon_sidereal.daily_rate_deg
    }
}
