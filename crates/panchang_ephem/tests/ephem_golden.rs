//! Golden-value tests for solar and lunar positions and ayanamsha against
//! published almanac values.

use panchang_ephem::{
    AyanamshaSystem, LuniSolar, RateModel, ayanamsha_deg, equation_of_time_minutes,
    moon_longitude, sun_apparent_longitude,
};
use panchang_time::{calendar_to_jd, normalize_pm180};

fn jd_utc(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    calendar_to_jd(year, month, day as f64 + hour / 24.0)
}

#[test]
fn lahiri_at_2024() {
    // Rashtriya Panchang 2024: Lahiri ayanamsha ~24°11'
    let val = ayanamsha_deg(AyanamshaSystem::Lahiri, jd_utc(2024, 1, 1, 0.0));
    assert!(
        (val - 24.19).abs() < 0.05,
        "Lahiri at 2024-01-01 = {val}, expected ~24.19"
    );
}

#[test]
fn all_systems_within_three_degrees_of_lahiri() {
    let jd = jd_utc(2024, 1, 1, 0.0);
    let lahiri = ayanamsha_deg(AyanamshaSystem::Lahiri, jd);
    for &sys in AyanamshaSystem::all() {
        let val = ayanamsha_deg(sys, jd);
        assert!((val - lahiri).abs() < 3.0, "{sys:?}: {val} vs Lahiri {lahiri}");
    }
}

#[test]
fn equinox_march_2024() {
    // 2024-03-20 03:06 UT
    let lon = sun_apparent_longitude(jd_utc(2024, 3, 20, 3.1));
    assert!(normalize_pm180(lon).abs() < 0.02, "λ☉ = {lon}");
}

#[test]
fn september_equinox_2023() {
    // 2023-09-23 06:50 UT
    let lon = sun_apparent_longitude(jd_utc(2023, 9, 23, 6.83));
    assert!((lon - 180.0).abs() < 0.02, "λ☉ = {lon}");
}

#[test]
fn new_moon_april_2024_eclipse() {
    // Total solar eclipse new moon: 2024-04-08 18:21 UT
    let jd = jd_utc(2024, 4, 8, 18.35);
    let diff = normalize_pm180(moon_longitude(jd) - sun_apparent_longitude(jd));
    assert!(diff.abs() < 0.1, "Moon - Sun at new moon = {diff}");
}

#[test]
fn full_moon_march_2024() {
    // 2024-03-25 07:00 UT
    let ls = LuniSolar::at(jd_utc(2024, 3, 25, 7.0), AyanamshaSystem::Lahiri, RateModel::True);
    let diff = normalize_pm180(ls.elongation_deg() - 180.0);
    assert!(diff.abs() < 0.1, "elongation at full moon off by {diff}");
}

#[test]
fn equation_of_time_november_peak() {
    // Early November: ~+16.4 min
    let eot = equation_of_time_minutes(jd_utc(2024, 11, 3, 12.0));
    assert!((eot - 16.4).abs() < 0.2, "EoT = {eot}");
}

#[test]
fn equation_of_time_february_trough() {
    // Mid February: ~-14.2 min
    let eot = equation_of_time_minutes(jd_utc(2024, 2, 11, 12.0));
    assert!((eot + 14.2).abs() < 0.2, "EoT = {eot}");
}
