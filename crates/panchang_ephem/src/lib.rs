//! Analytic Sun and Moon ephemeris for day-level panchang work.
//!
//! This crate provides:
//! - Apparent geocentric ecliptic longitude of the Sun (equation of center,
//!   three harmonics) and its equation of time
//! - Geocentric ecliptic longitude, latitude and distance of the Moon from the
//!   largest periodic terms of the lunar theory
//! - Mean obliquity, nutation in longitude and ecliptic → equatorial rotation
//! - Ayanamsha for several sidereal reference systems
//! - `BodyPosition` / `LuniSolar` snapshots carrying tropical and sidereal
//!   longitudes together with daily rates
//!
//! All public functions take UT Julian Days; series are evaluated in TT.
//! Accuracy is a few arcminutes for the Sun and roughly a quarter arcminute
//! for the Moon, adequate for tithi/nakshatra boundaries to within minutes.

pub mod ayanamsha;
pub mod equatorial;
pub mod moon;
pub mod position;
pub mod sun;

pub use ayanamsha::{
    AyanamshaSystem, PRECESSION_DAILY_RATE_DEG, ayanamsha_deg, ayanamsha_mean_deg,
    ayanamsha_true_deg, general_precession_longitude_deg,
};
pub use equatorial::{
    EquatorialCoords, apparent_obliquity_deg, ecliptic_to_equatorial, mean_obliquity_deg,
    nutation_longitude_arcsec,
};
pub use moon::{
    LunarCoordinates, lunar_coordinates, moon_equatorial, moon_latitude, moon_longitude,
};
pub use position::{
    Body, BodyPosition, LuniSolar, MOON_MEAN_DAILY_RATE, RateModel, SUN_MEAN_DAILY_RATE,
    moon_position, sidereal_position, sun_position, tropical_position,
};
pub use sun::{
    SolarCoordinates, equation_of_time_minutes, solar_coordinates, sun_apparent_longitude,
    sun_equatorial,
};
