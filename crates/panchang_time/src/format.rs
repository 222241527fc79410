//! Clock-time formatting and parsing.
//!
//! Formatting always starts from a zoned timestamp so a caller cannot drop
//! the date by accident; `format_local` prints both.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use crate::error::TimeError;

/// `HH:MM` wall-clock time (seconds rounded to the nearest minute).
pub fn format_hm<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let rounded = dt.clone() + chrono::Duration::seconds(30);
    rounded.format("%H:%M").to_string()
}

/// `HH:MM:SS` wall-clock time.
pub fn format_hms<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M:%S").to_string()
}

/// `YYYY-MM-DD HH:MM:SS ±hh:mm` local timestamp.
pub fn format_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}

/// `"1h 36m"` style rendering of a span in minutes.
pub fn format_duration_hm(minutes: f64) -> String {
    let total = minutes.round().max(0.0) as i64;
    format!("{}h {:02}m", total / 60, total % 60)
}

/// Parse a `YYYY-MM-DD` civil date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.into()))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_hm(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn ist(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(19_800)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 21, h, m, s)
            .unwrap()
    }

    #[test]
    fn hm_rounds_to_nearest_minute() {
        assert_eq!(format_hm(&ist(5, 47, 29)), "05:47");
        assert_eq!(format_hm(&ist(5, 47, 31)), "05:48");
    }

    #[test]
    fn local_includes_date_and_offset() {
        assert_eq!(format_local(&ist(23, 59, 0)), "2024-06-21 23:59:00 +05:30");
    }

    #[test]
    fn duration() {
        assert_eq!(format_duration_hm(96.0), "1h 36m");
        assert_eq!(format_duration_hm(-3.0), "0h 00m");
    }

    #[test]
    fn parse_date_ok_and_err() {
        let d = parse_date("2024-06-21").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert!(matches!(parse_date("21/06/2024"), Err(TimeError::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn parse_hm_variants() {
        assert_eq!(parse_hm("06:05").unwrap().minute(), 5);
        assert_eq!(parse_hm("06:05:09").unwrap().second(), 9);
        assert!(matches!(parse_hm("25:00"), Err(TimeError::InvalidTime(_))));
    }
}
