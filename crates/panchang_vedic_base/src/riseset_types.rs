//! Observer location, horizon settings and event kinds shared by the
//! sunrise, moonrise and twilight searches.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Earth radius used for horizon dip, m.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Observer on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
    /// Height above sea level, m.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location without range checks.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn try_new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Result<Self, VedicError> {
        let loc = Self::new(latitude_deg, longitude_deg, altitude_m);
        loc.validate()?;
        Ok(loc)
    }

    /// Check latitude ∈ [-90, 90], longitude ∈ [-180, 180] and finite altitude.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Rise/set event types, including twilight variants and the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun at the horizon, with refraction.
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon.
    Sunset,
    /// Sun center at -6 deg below horizon.
    CivilDawn,
    /// Sun center at -6 deg below horizon.
    CivilDusk,
    /// Sun center at -12 deg below horizon.
    NauticalDawn,
    /// Sun center at -12 deg below horizon.
    NauticalDusk,
    /// Sun center at -18 deg below horizon.
    AstronomicalDawn,
    /// Sun center at -18 deg below horizon.
    AstronomicalDusk,
    /// Upper limb of the Moon at the horizon.
    Moonrise,
    /// Upper limb of the Moon disappears below the horizon.
    Moonset,
}

/// Solar events of one day in chronological order.
pub const SOLAR_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

impl RiseSetEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDawn => "Civil dawn",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
            Self::Moonrise => "Moonrise",
            Self::Moonset => "Moonset",
        }
    }

    /// Fixed depression of the body's center for twilight events, in degrees.
    ///
    /// `None` for events whose horizon depends on refraction and disk size.
    pub const fn twilight_depression_deg(self) -> Option<f64> {
        match self {
            Self::CivilDawn | Self::CivilDusk => Some(6.0),
            Self::NauticalDawn | Self::NauticalDusk => Some(12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(18.0),
            _ => None,
        }
    }

    /// True for rising and dawn events.
    pub const fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise
                | Self::CivilDawn
                | Self::NauticalDawn
                | Self::AstronomicalDawn
                | Self::Moonrise
        )
    }

    pub const fn is_lunar(self) -> bool {
        matches!(self, Self::Moonrise | Self::Moonset)
    }
}

/// Horizon model for rise/set searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Horizon refraction, arcmin (34).
    pub refraction_arcmin: f64,
    /// Solar semidiameter, arcmin (16).
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer altitude: dip = sqrt(2h/R) radians.
    /// Default: true.
    pub altitude_correction: bool,
    /// Correct the Moon's horizon for its parallax (h0 = 0.7275·π − refraction).
    /// When false the Moon uses the solar horizon of about -0.833°.
    /// Default: true.
    pub moon_parallax: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
            moon_parallax: true,
        }
    }
}

impl RiseSetConfig {
    /// Depression of the Sun's center at sunrise/sunset, degrees, dip included.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m)
    }

    fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Geocentric altitude of the body's center at the event, in degrees.
    ///
    /// `moon_parallax_deg` is only read for lunar events.
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64, moon_parallax_deg: f64) -> f64 {
        if let Some(depression) = event.twilight_depression_deg() {
            return -depression;
        }
        if event.is_lunar() && self.moon_parallax {
            return 0.7275 * moon_parallax_deg - self.refraction_arcmin / 60.0 - self.dip_deg(altitude_m);
        }
        -self.horizon_depression_deg(altitude_m)
    }
}

/// Outcome of one rise/set search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RiseSetResult {
    /// Event occurs at the given UT Julian Day.
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Body stays below the target altitude all day (polar night).
    NeverRises,
    /// Body stays above the target altitude all day (midnight sun).
    NeverSets,
    /// The event skips this civil day (the Moon's ~50 min daily lag).
    NoEventOnDay,
}

impl RiseSetResult {
    /// Event time, if one occurs.
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::Event { jd_ut, .. } => Some(*jd_ut),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depression_sea_level() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(0.0);
        let expected = (34.0 + 16.0) / 60.0;
        assert!((d - expected).abs() < 1e-10, "sea level: {d}, expected {expected}");
    }

    #[test]
    fn depression_1000m() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        let base = (34.0 + 16.0) / 60.0;
        // sqrt(2*1000/6371000) ≈ 0.01772 rad ≈ 1.015 deg
        assert!(d > base + 0.9 && d < base + 1.2, "1000m depression {d}");
    }

    #[test]
    fn no_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        let d = c.horizon_depression_deg(10_000.0);
        assert!((d - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn twilight_targets() {
        let c = RiseSetConfig::default();
        assert_eq!(c.target_altitude_deg(RiseSetEvent::CivilDawn, 500.0, 0.0), -6.0);
        assert_eq!(c.target_altitude_deg(RiseSetEvent::AstronomicalDusk, 0.0, 0.0), -18.0);
    }

    #[test]
    fn moon_target_altitude() {
        let c = RiseSetConfig::default();
        // mean parallax 0.95° gives about +0.125°
        let h0 = c.target_altitude_deg(RiseSetEvent::Moonrise, 0.0, 0.950_7);
        assert!((h0 - 0.125).abs() < 0.01, "h0 = {h0}");
        let flat = RiseSetConfig {
            moon_parallax: false,
            ..Default::default()
        };
        let h0 = flat.target_altitude_deg(RiseSetEvent::Moonset, 0.0, 0.950_7);
        assert!((h0 + 0.8333).abs() < 0.001, "h0 = {h0}");
    }

    #[test]
    fn is_rising_correct() {
        for e in SOLAR_EVENTS {
            assert_eq!(e.is_rising(), SOLAR_EVENTS[..4].contains(&e), "{e:?}");
        }
        assert!(RiseSetEvent::Moonrise.is_rising());
        assert!(!RiseSetEvent::Moonset.is_rising());
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::try_new(13.08, 80.27, 0.0).is_ok());
        assert!(GeoLocation::try_new(91.0, 0.0, 0.0).is_err());
        assert!(GeoLocation::try_new(0.0, -180.5, 0.0).is_err());
        assert!(GeoLocation::try_new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn result_jd_accessor() {
        let r = RiseSetResult::Event {
            jd_ut: 2_460_000.25,
            event: RiseSetEvent::Sunrise,
        };
        assert_eq!(r.jd_ut(), Some(2_460_000.25));
        assert_eq!(RiseSetResult::NeverRises.jd_ut(), None);
    }
}
