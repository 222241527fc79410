//! Geocentric lunar position from the leading terms of the lunar theory.
//!
//! Source: Meeus, _Astronomical Algorithms_, ch. 47 (Tables 47.A and 47.B),
//! truncated to the largest terms. Residual error is a few hundredths of a
//! degree in longitude, well under a minute of tithi time.

use panchang_time::{J2000_JD, normalize_360, ut_to_tt_jd};

use crate::equatorial::{
    EquatorialCoords, apparent_obliquity_deg, ecliptic_to_equatorial, nutation_longitude_arcsec,
};

/// One periodic term: multiples of D, M, M', F and the amplitude.
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> Term {
    Term { d, m, mp, f, coeff }
}

/// Longitude terms, amplitude in 1e-6 degrees.
const LONGITUDE_TERMS: [Term; 30] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
];

/// Distance terms, amplitude in 1e-3 km.
const DISTANCE_TERMS: [Term; 13] = [
    term(0, 0, 1, 0, -20_905_355.0),
    term(2, 0, -1, 0, -3_699_111.0),
    term(2, 0, 0, 0, -2_955_968.0),
    term(0, 0, 2, 0, -569_925.0),
    term(0, 1, 0, 0, 48_888.0),
    term(0, 0, 0, 2, -3_149.0),
    term(2, 0, -2, 0, 246_158.0),
    term(2, -1, -1, 0, -152_138.0),
    term(2, 0, 1, 0, -170_733.0),
    term(2, -1, 0, 0, -204_586.0),
    term(0, 1, -1, 0, -129_620.0),
    term(1, 0, 0, 0, 108_743.0),
    term(0, 1, 1, 0, 104_755.0),
];

/// Latitude terms, amplitude in 1e-6 degrees.
const LATITUDE_TERMS: [Term; 14] = [
    term(0, 0, 0, 1, 5_128_122.0),
    term(0, 0, 1, 1, 280_602.0),
    term(0, 0, 1, -1, 277_693.0),
    term(2, 0, 0, -1, 173_237.0),
    term(2, 0, -1, 1, 55_413.0),
    term(2, 0, -1, -1, 46_271.0),
    term(2, 0, 0, 1, 32_573.0),
    term(0, 0, 2, 1, 17_198.0),
    term(2, 0, 1, -1, 9_266.0),
    term(0, 0, 2, -1, 8_822.0),
    term(2, -1, 0, -1, 8_216.0),
    term(2, 0, -2, -1, 4_324.0),
    term(2, 0, 1, 1, 4_200.0),
    term(2, 1, 0, -1, -3_359.0),
];

/// Geocentric lunar coordinates referred to the mean equinox of date,
/// plus the apparent longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoordinates {
    /// Mean longitude L', degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Geometric ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Apparent longitude (nutation applied), degrees [0, 360).
    pub apparent_longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Earth-Moon distance in km.
    pub distance_km: f64,
}

impl LunarCoordinates {
    /// Equatorial horizontal parallax in degrees.
    pub fn horizontal_parallax_deg(&self) -> f64 {
        (6_378.14 / self.distance_km).asin().to_degrees()
    }
}

fn series(terms: &[Term], args: [f64; 4], e: f64, trig: fn(f64) -> f64) -> f64 {
    let [d, m, mp, f] = args;
    terms
        .iter()
        .map(|t| {
            let arg = t.d as f64 * d + t.m as f64 * m + t.mp as f64 * mp + t.f as f64 * f;
            // terms involving the Sun's anomaly shrink with Earth's eccentricity
            let scale = match t.m.unsigned_abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            t.coeff * scale * trig(arg)
        })
        .sum()
}

pub(crate) fn lunar_coordinates_tt(t: f64) -> LunarCoordinates {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = normalize_360(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
    );
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let args = [d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians()];
    let lp_rad = lp.to_radians();
    let f_rad = args[3];
    let mp_rad = args[2];

    let sigma_l = series(&LONGITUDE_TERMS, args, e, f64::sin)
        + 3958.0 * a1.sin()
        + 1962.0 * (lp_rad - f_rad).sin()
        + 318.0 * a2.sin();
    let sigma_b = series(&LATITUDE_TERMS, args, e, f64::sin) - 2235.0 * lp_rad.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_rad).sin()
        + 175.0 * (a1 + f_rad).sin()
        + 127.0 * (lp_rad - mp_rad).sin()
        - 115.0 * (lp_rad + mp_rad).sin();
    let sigma_r = series(&DISTANCE_TERMS, args, e, f64::cos);

    let longitude = normalize_360(lp + sigma_l / 1e6);
    let apparent = normalize_360(longitude + nutation_longitude_arcsec(t) / 3600.0);

    LunarCoordinates {
        mean_longitude_deg: lp,
        longitude_deg: longitude,
        apparent_longitude_deg: apparent,
        latitude_deg: sigma_b / 1e6,
        distance_km: 385_000.56 + sigma_r / 1000.0,
    }
}

fn centuries_tt(jd_ut: f64) -> f64 {
    (ut_to_tt_jd(jd_ut) - J2000_JD) / 36_525.0
}

/// Lunar coordinates at a UT Julian Day.
pub fn lunar_coordinates(jd_ut: f64) -> LunarCoordinates {
    lunar_coordinates_tt(centuries_tt(jd_ut))
}

/// Apparent tropical longitude of the Moon in degrees [0, 360).
pub fn moon_longitude(jd_ut: f64) -> f64 {
    lunar_coordinates(jd_ut).apparent_longitude_deg
}

/// Ecliptic latitude of the Moon in degrees.
pub fn moon_latitude(jd_ut: f64) -> f64 {
    lunar_coordinates(jd_ut).latitude_deg
}

/// Apparent geocentric right ascension and declination of the Moon,
/// with the coordinates they were derived from.
pub fn moon_equatorial(jd_ut: f64) -> (EquatorialCoords, LunarCoordinates) {
    let t = centuries_tt(jd_ut);
    let moon = lunar_coordinates_tt(t);
    let eq = ecliptic_to_equatorial(
        moon.apparent_longitude_deg,
        moon.latitude_deg,
        apparent_obliquity_deg(t),
    );
    (eq, moon)
}
