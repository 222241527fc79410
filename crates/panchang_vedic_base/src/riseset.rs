//! Sunrise/sunset, twilight and moonrise/moonset.
//!
//! Hour-angle method: the body's declination and target altitude give the
//! semi-diurnal arc through `cos(H) = (sin h0 − sin φ sin δ) / (cos φ cos δ)`;
//! the transit is found from local sidereal time and the body's right
//! ascension, and the event estimate is refined by re-evaluating the body
//! at the estimated instant. `|cos H| > 1` means the body does not cross
//! the target altitude that day.

use log::{debug, trace};
use panchang_ephem::{MOON_MEAN_DAILY_RATE, equation_of_time_minutes, moon_equatorial, sun_equatorial};
use panchang_time::{SIDEREAL_RATE_DEG_PER_DAY, gmst_deg, local_sidereal_time_deg, normalize_pm180};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SOLAR_EVENTS};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 6;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour-angle rate of the Moon: Earth rotation minus the Moon's eastward drift.
const MOON_HOUR_ANGLE_RATE: f64 = SIDEREAL_RATE_DEG_PER_DAY - MOON_MEAN_DAILY_RATE;

/// Mean synodic interval between successive lunar transits, days.
const LUNAR_DAY: f64 = 360.0 / MOON_HOUR_ANGLE_RATE;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Apparent solar noon (meridian transit) on the day starting at `jd_ut_midnight`.
///
/// Mean local noon corrected by the equation of time, evaluated twice so
/// the correction is taken at the transit itself.
pub fn solar_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    let mean_noon = approximate_local_noon_jd(jd_ut_midnight, longitude_deg);
    let mut noon = mean_noon;
    for _ in 0..2 {
        noon = mean_noon - equation_of_time_minutes(noon) / 1440.0;
    }
    noon
}

/// Body state needed by the hour-angle solver.
struct Apparent {
    ra_deg: f64,
    dec_deg: f64,
    h0_deg: f64,
}

enum Crossing {
    At(f64),
    Never(RiseSetResult),
}

fn cos_hour_angle(lat_deg: f64, dec_deg: f64, h0_deg: f64) -> f64 {
    let phi = lat_deg.to_radians();
    let dec = dec_deg.to_radians();
    (h0_deg.to_radians().sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

fn polar(cos_h: f64) -> Option<RiseSetResult> {
    if cos_h > 1.0 {
        Some(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Some(RiseSetResult::NeverSets)
    } else {
        None
    }
}

fn hour_angle_deg(jd_ut: f64, longitude_deg: f64, ra_deg: f64) -> f64 {
    normalize_pm180(local_sidereal_time_deg(gmst_deg(jd_ut), longitude_deg) - ra_deg)
}

/// Solve for the crossing nearest the transit closest to `jd_anchor`.
fn solve_crossing<F>(
    location: &GeoLocation,
    rising: bool,
    jd_anchor: f64,
    ha_rate: f64,
    body: F,
) -> Crossing
where
    F: Fn(f64) -> Apparent,
{
    let lat = location.latitude_deg;
    let a = body(jd_anchor);
    let cos_h0 = cos_hour_angle(lat, a.dec_deg, a.h0_deg);
    if let Some(never) = polar(cos_h0) {
        return Crossing::Never(never);
    }
    let h0 = cos_h0.acos().to_degrees();

    let ha_anchor = hour_angle_deg(jd_anchor, location.longitude_deg, a.ra_deg);
    let transit = jd_anchor - ha_anchor / ha_rate;
    let mut jd = if rising { transit - h0 / ha_rate } else { transit + h0 / ha_rate };

    for i in 0..MAX_ITERATIONS {
        let a = body(jd);
        let cos_h = cos_hour_angle(lat, a.dec_deg, a.h0_deg);
        if let Some(never) = polar(cos_h) {
            return Crossing::Never(never);
        }
        let h = cos_h.acos().to_degrees();
        let target = if rising { -h } else { h };
        let actual = hour_angle_deg(jd, location.longitude_deg, a.ra_deg);
        let correction = normalize_pm180(target - actual) / ha_rate;
        jd += correction;
        trace!("rise/set iteration {i}: jd={jd:.7} correction={correction:.3e} d");
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Crossing::At(jd)
}

/// Compute a single solar rise/set or twilight event.
///
/// `jd_ut_noon` is the approximate local noon of the desired date; use
/// [`approximate_local_noon_jd`] to derive it from the 0h UT date and
/// longitude.
pub fn compute_sun_event(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;
    if event.is_lunar() {
        return Err(VedicError::UnsupportedEvent(event.name()));
    }
    let h0_deg = config.target_altitude_deg(event, location.altitude_m, 0.0);
    let body = |jd: f64| {
        let eq = sun_equatorial(jd);
        Apparent {
            ra_deg: eq.ra_deg,
            dec_deg: eq.dec_deg,
            h0_deg,
        }
    };
    let result = match solve_crossing(location, event.is_rising(), jd_ut_noon, SIDEREAL_RATE_DEG_PER_DAY, &body) {
        Crossing::At(jd_ut) => RiseSetResult::Event { jd_ut, event },
        Crossing::Never(never) => {
            debug!(
                "{} does not occur at lat {:.3}: {never:?}",
                event.name(),
                location.latitude_deg
            );
            never
        }
    };
    Ok(result)
}

/// Compute all 8 solar events for a day, in chronological order.
///
/// Each event is computed independently; at high latitudes some entries may
/// be `NeverRises`/`NeverSets` while others are events.
pub fn compute_all_events(
    location: &GeoLocation,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, VedicError> {
    SOLAR_EVENTS
        .iter()
        .map(|&evt| compute_sun_event(location, evt, jd_ut_noon, config))
        .collect()
}

/// Compute moonrise or moonset within the civil day `[jd_ut_day_start, +1)`.
///
/// The Moon transits about 50 minutes later each day, so once a month a
/// civil day has no moonrise (or moonset); that day yields
/// [`RiseSetResult::NoEventOnDay`].
pub fn compute_moon_event(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_day_start: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;
    if !event.is_lunar() {
        return Err(VedicError::UnsupportedEvent(event.name()));
    }
    let body = |jd: f64| {
        let (eq, moon) = moon_equatorial(jd);
        Apparent {
            ra_deg: eq.ra_deg,
            dec_deg: eq.dec_deg,
            h0_deg: config.target_altitude_deg(event, location.altitude_m, moon.horizontal_parallax_deg()),
        }
    };

    let day_end = jd_ut_day_start + 1.0;
    let mid = jd_ut_day_start + 0.5;
    let mut never = None;
    for anchor in [mid, mid - LUNAR_DAY, mid + LUNAR_DAY] {
        match solve_crossing(location, event.is_rising(), anchor, MOON_HOUR_ANGLE_RATE, &body) {
            Crossing::At(jd_ut) if (jd_ut_day_start..day_end).contains(&jd_ut) => {
                return Ok(RiseSetResult::Event { jd_ut, event });
            }
            Crossing::At(jd_ut) => {
                trace!("{} at {jd_ut:.5} falls outside the day", event.name());
            }
            Crossing::Never(n) => never = never.or(Some(n)),
        }
    }
    let result = never.unwrap_or(RiseSetResult::NoEventOnDay);
    debug!("{}: {result:?} for day starting {jd_ut_day_start:.5}", event.name());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_time::calendar_to_jd;

    #[test]
    fn local_noon_greenwich() {
        let jd_0h = 2_460_000.5;
        let noon = approximate_local_noon_jd(jd_0h, 0.0);
        assert!((noon - (jd_0h + 0.5)).abs() < 1e-10);
    }

    #[test]
    fn local_noon_east_90() {
        let jd_0h = 2_460_000.5;
        let noon = approximate_local_noon_jd(jd_0h, 90.0);
        // 90 deg east → noon is 6 hours earlier in UT
        assert!((noon - (jd_0h + 0.25)).abs() < 1e-10);
    }

    #[test]
    fn solar_noon_follows_equation_of_time() {
        // mid-February the Sun transits Greenwich about 14 minutes late
        let jd_0h = calendar_to_jd(2024, 2, 11.0);
        let noon = solar_noon_jd(jd_0h, 0.0);
        let minutes_after = (noon - (jd_0h + 0.5)) * 1440.0;
        assert!((minutes_after - 14.2).abs() < 1.0, "noon offset {minutes_after} min");
    }

    #[test]
    fn sunrise_before_sunset() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        let jd_0h = calendar_to_jd(2024, 3, 20.0);
        let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
        let cfg = RiseSetConfig::default();
        let rise = compute_sun_event(&loc, RiseSetEvent::Sunrise, noon, &cfg).unwrap();
        let set = compute_sun_event(&loc, RiseSetEvent::Sunset, noon, &cfg).unwrap();
        let (r, s) = (rise.jd_ut().unwrap(), set.jd_ut().unwrap());
        assert!(r < noon && noon < s);
        let hours = (s - r) * 24.0;
        assert!((hours - 12.1).abs() < 0.2, "day length {hours} h");
    }

    #[test]
    fn twilight_ordering() {
        let loc = GeoLocation::new(40.0, -74.0, 0.0);
        let jd_0h = calendar_to_jd(2024, 9, 15.0);
        let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
        let all = compute_all_events(&loc, noon, &RiseSetConfig::default()).unwrap();
        let jds: Vec<f64> = all.iter().map(|r| r.jd_ut().unwrap()).collect();
        for w in jds.windows(2) {
            assert!(w[0] < w[1], "events out of order: {jds:?}");
        }
    }

    #[test]
    fn polar_night_and_midnight_sun() {
        let tromso = GeoLocation::new(69.65, 18.96, 0.0);
        let cfg = RiseSetConfig::default();
        let dec = approximate_local_noon_jd(calendar_to_jd(2024, 12, 21.0), tromso.longitude_deg);
        let jun = approximate_local_noon_jd(calendar_to_jd(2024, 6, 21.0), tromso.longitude_deg);
        assert_eq!(
            compute_sun_event(&tromso, RiseSetEvent::Sunrise, dec, &cfg).unwrap(),
            RiseSetResult::NeverRises
        );
        assert_eq!(
            compute_sun_event(&tromso, RiseSetEvent::Sunset, jun, &cfg).unwrap(),
            RiseSetResult::NeverSets
        );
    }

    #[test]
    fn wrong_body_rejected() {
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let cfg = RiseSetConfig::default();
        assert!(compute_sun_event(&loc, RiseSetEvent::Moonrise, 2_460_000.0, &cfg).is_err());
        assert!(compute_moon_event(&loc, RiseSetEvent::Sunset, 2_460_000.0, &cfg).is_err());
    }

    #[test]
    fn invalid_location_rejected() {
        let loc = GeoLocation::new(95.0, 0.0, 0.0);
        let r = compute_sun_event(&loc, RiseSetEvent::Sunrise, 2_460_000.0, &RiseSetConfig::default());
        assert!(matches!(r, Err(VedicError::InvalidLocation(_))));
    }

    #[test]
    fn moon_events_inside_day_or_skipped() {
        let loc = GeoLocation::new(19.076, 72.8777, 0.0);
        let cfg = RiseSetConfig::default();
        let mut skipped = 0;
        for d in 0..30 {
            let start = calendar_to_jd(2024, 1, 1.0) + d as f64 - 5.5 / 24.0;
            let r = compute_moon_event(&loc, RiseSetEvent::Moonrise, start, &cfg).unwrap();
            match r.jd_ut() {
                Some(jd) => assert!(jd >= start && jd < start + 1.0, "day {d}: {jd}"),
                None => {
                    assert_eq!(r, RiseSetResult::NoEventOnDay);
                    skipped += 1;
                }
            }
        }
        assert!(skipped <= 2, "{skipped} days without moonrise");
    }
}
