//! The request: a civil date at a place, in a time zone.

use chrono::{Datelike, Days, NaiveDate};
use panchang_time::{CivilZone, parse_date};
use panchang_vedic_base::GeoLocation;

use crate::error::PanchangError;

/// Earliest and latest Gregorian years the analytic ephemeris is trusted for.
pub const MIN_YEAR: i32 = 1600;
pub const MAX_YEAR: i32 = 2400;

/// A validated civil date, location and time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    date: NaiveDate,
    location: GeoLocation,
    zone: CivilZone,
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), PanchangError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PanchangError::InputOutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

fn check_date(date: NaiveDate) -> Result<(), PanchangError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(PanchangError::InputOutOfRange {
            field: "date",
            value: date.to_string(),
        })
    }
}

impl Moment {
    /// Validate and build a moment at sea level.
    ///
    /// Latitude must lie in [-90, 90], longitude in [-180, 180] (east
    /// positive), and `timezone` must be an IANA identifier.
    pub fn new(
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: &str,
    ) -> Result<Self, PanchangError> {
        check_range("latitude", latitude_deg, -90.0, 90.0)?;
        check_range("longitude", longitude_deg, -180.0, 180.0)?;
        check_date(date)?;
        let zone = CivilZone::parse(timezone)?;
        Ok(Self {
            date,
            location: GeoLocation::new(latitude_deg, longitude_deg, 0.0),
            zone,
        })
    }

    /// Like [`new`](Self::new) with the date given as `YYYY-MM-DD`.
    pub fn parse(
        date: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: &str,
    ) -> Result<Self, PanchangError> {
        Self::new(parse_date(date)?, latitude_deg, longitude_deg, timezone)
    }

    /// Build from an already resolved location and zone.
    pub fn from_parts(date: NaiveDate, location: GeoLocation, zone: CivilZone) -> Result<Self, PanchangError> {
        check_range("latitude", location.latitude_deg, -90.0, 90.0)?;
        check_range("longitude", location.longitude_deg, -180.0, 180.0)?;
        check_range("altitude", location.altitude_m, -500.0, 10_000.0)?;
        check_date(date)?;
        Ok(Self { date, location, zone })
    }

    /// Observer height above sea level, in meters.
    pub fn with_altitude(self, altitude_m: f64) -> Result<Self, PanchangError> {
        check_range("altitude", altitude_m, -500.0, 10_000.0)?;
        Ok(Self {
            location: GeoLocation::new(self.location.latitude_deg, self.location.longitude_deg, altitude_m),
            ..self
        })
    }

    /// Same place and zone on another date.
    pub fn with_date(self, date: NaiveDate) -> Result<Self, PanchangError> {
        check_date(date)?;
        Ok(Self { date, ..self })
    }

    /// The following civil day.
    pub fn next_day(self) -> Result<Self, PanchangError> {
        let date = self
            .date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| PanchangError::InputOutOfRange {
                field: "date",
                value: self.date.to_string(),
            })?;
        self.with_date(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn zone(&self) -> &CivilZone {
        &self.zone
    }
}
