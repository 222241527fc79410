//! Civil time zones: mapping between local wall-clock time and UT Julian Days.
//!
//! Every timestamp the engine hands out is a `DateTime<Tz>`, so an event
//! after local midnight carries the next calendar date with it instead of
//! wrapping to a bare clock string.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// Largest DST gap we step across when a local time does not exist.
const MAX_GAP_MINUTES: i64 = 180;

/// Convert a UTC timestamp to a UT Julian Day.
pub fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + utc.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Convert a UT Julian Day to a UTC timestamp with millisecond resolution.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimeError::JulianDayOutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::JulianDayOutOfRange(jd))
}

/// An IANA time zone used to interpret civil dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilZone {
    tz: Tz,
}

impl CivilZone {
    /// Look up an IANA identifier such as `"Asia/Kolkata"`.
    pub fn parse(id: &str) -> Result<Self, TimeError> {
        id.parse::<Tz>()
            .map(|tz| Self { tz })
            .map_err(|_| TimeError::UnknownTimezone(id.to_string()))
    }

    /// Wrap an already-resolved chrono-tz zone.
    pub fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The underlying chrono-tz zone.
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// IANA identifier.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Resolve local wall-clock time to an absolute instant.
    ///
    /// Ambiguous times (DST fall-back) resolve to the earlier instant;
    /// nonexistent times (spring-forward gap) resolve to the first valid
    /// minute after the gap.
    pub fn resolve_local(&self, local: NaiveDateTime) -> Result<DateTime<Tz>, TimeError> {
        let mut probe = local;
        let mut stepped = 0;
        loop {
            if let Some(dt) = self.tz.from_local_datetime(&probe).earliest() {
                return Ok(dt);
            }
            if stepped >= MAX_GAP_MINUTES {
                return Err(TimeError::NonexistentLocalTime(
                    local.to_string(),
                    self.tz.name(),
                ));
            }
            probe += Duration::minutes(1);
            stepped += 1;
        }
    }

    /// UT Julian Day of a local wall-clock time.
    pub fn local_to_jd(&self, local: NaiveDateTime) -> Result<f64, TimeError> {
        let dt = self.resolve_local(local)?;
        Ok(utc_to_jd(&dt.with_timezone(&Utc)))
    }

    /// UT Julian Day at the start of the civil date in this zone.
    pub fn local_midnight_jd(&self, date: NaiveDate) -> Result<f64, TimeError> {
        self.local_to_jd(date.and_time(NaiveTime::MIN))
    }

    /// Local timestamp for a UT Julian Day.
    pub fn jd_to_local(&self, jd_ut: f64) -> Result<DateTime<Tz>, TimeError> {
        Ok(jd_to_utc(jd_ut)?.with_timezone(&self.tz))
    }

    /// UTC offset in hours in effect at the given instant.
    pub fn utc_offset_hours(&self, jd_ut: f64) -> Result<f64, TimeError> {
        let local = self.jd_to_local(jd_ut)?;
        Ok(local.offset().fix().local_minus_utc() as f64 / 3600.0)
    }
}
