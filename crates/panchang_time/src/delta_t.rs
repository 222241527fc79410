//! ΔT = TT − UT.
//!
//! The Sun and Moon series are defined in Terrestrial Time while civil
//! clocks run on UT. Over the supported range ΔT stays within a couple of
//! minutes, which moves the Moon by about half an arcminute per minute.
//!
//! Polynomials: Espenak & Meeus (NASA "Five Millennium Canon", 2006) for
//! 1900–2150, with the Morrison–Stephenson long-term parabola outside.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Decimal Gregorian year for a Julian Day (mean year length).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Long-term parabola, valid far from the telescopic era.
fn long_term_parabola(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        let t2 = t * t;
        let t3 = t2 * t;
        63.86 + 0.3345 * t - 0.060374 * t2 + 0.0017275 * t3 + 0.000651814 * t2 * t2
            + 0.00002373599 * t3 * t2
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t
    } else if (2050.0..2150.0).contains(&year) {
        long_term_parabola(year) - 0.5628 * (2150.0 - year)
    } else {
        long_term_parabola(year)
    }
}

/// Convert a UT Julian Day to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}
