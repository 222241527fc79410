//! Apparent solar position from the low-precision solar theory.
//!
//! Source: Meeus, _Astronomical Algorithms_, ch. 25 (equation of center with
//! three harmonics, aberration and nutation folded into one correction) and
//! ch. 28 (equation of time). Accuracy ~0.01°.

use panchang_time::{J2000_JD, normalize_360, normalize_pm180, ut_to_tt_jd};

use crate::equatorial::{
    EquatorialCoords, apparent_obliquity_deg, ecliptic_to_equatorial, lunar_node_deg,
};

/// Intermediate and final quantities of the solar theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Geometric mean longitude L0, degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, degrees [0, 360).
    pub mean_anomaly_deg: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
    /// True geometric longitude, degrees [0, 360).
    pub true_longitude_deg: f64,
    /// Apparent longitude (aberration and nutation applied), degrees [0, 360).
    pub apparent_longitude_deg: f64,
    /// Sun-Earth distance in AU.
    pub distance_au: f64,
}

pub(crate) fn solar_coordinates_tt(t: f64) -> SolarCoordinates {
    let t2 = t * t;
    let l0 = normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2);
    let m = normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2);
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = lunar_node_deg(t).to_radians();
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    SolarCoordinates {
        mean_longitude_deg: l0,
        mean_anomaly_deg: m,
        eccentricity: e,
        true_longitude_deg: normalize_360(true_lon),
        apparent_longitude_deg: normalize_360(apparent),
        distance_au: r,
    }
}

fn centuries_tt(jd_ut: f64) -> f64 {
    (ut_to_tt_jd(jd_ut) - J2000_JD) / 36_525.0
}

/// Solar coordinates at a UT Julian Day.
pub fn solar_coordinates(jd_ut: f64) -> SolarCoordinates {
    solar_coordinates_tt(centuries_tt(jd_ut))
}

/// Apparent tropical longitude of the Sun in degrees [0, 360).
pub fn sun_apparent_longitude(jd_ut: f64) -> f64 {
    solar_coordinates(jd_ut).apparent_longitude_deg
}

/// Apparent right ascension and declination of the Sun.
pub fn sun_equatorial(jd_ut: f64) -> EquatorialCoords {
    let t = centuries_tt(jd_ut);
    let sun = solar_coordinates_tt(t);
    ecliptic_to_equatorial(sun.apparent_longitude_deg, 0.0, apparent_obliquity_deg(t))
}

fn equation_of_time_tt(t: f64) -> f64 {
    let sun = solar_coordinates_tt(t);
    let eps = apparent_obliquity_deg(t).to_radians();
    let y = (eps / 2.0).tan().powi(2);
    let l0 = sun.mean_longitude_deg.to_radians();
    let m = sun.mean_anomaly_deg.to_radians();
    let e = sun.eccentricity;

    let eot_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    // 1° of hour angle = 4 minutes of time
    normalize_pm180(eot_rad.to_degrees()) * 4.0
}

/// Equation of time (apparent minus mean solar time) in minutes.
///
/// Positive when the true Sun transits before local mean noon.
pub fn equation_of_time_minutes(jd_ut: f64) -> f64 {
    equation_of_time_tt(centuries_tt(jd_ut))
}
