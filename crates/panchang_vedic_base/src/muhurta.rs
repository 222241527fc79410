//! Day divisions and the named windows derived from them.
//!
//! Rahu Kaal, Yamaganda and Gulika each occupy one of eight equal parts of
//! the daylight span, chosen by weekday. Dur Muhurat uses fifteen parts.
//! Abhijit and Brahma Muhurta are fixed offsets from noon and sunrise;
//! Varjyam and Amrit Kaal hang off the nakshatra span.

use serde::Serialize;

use crate::error::VedicError;
use crate::nakshatra::Nakshatra;
use crate::vaar::Vaar;

/// Minutes per day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Rahu Kaal segment (0-based, of 8 daylight parts), indexed Sunday..Saturday.
pub const RAHU_KAAL_SEGMENT: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Yamaganda segment (0-based, of 8 daylight parts), indexed Sunday..Saturday.
pub const YAMAGANDA_SEGMENT: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Gulika Kaal segment (0-based, of 8 daylight parts), indexed Sunday..Saturday.
pub const GULIKA_SEGMENT: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Dur Muhurat muhurtas (1-based, of 15 daylight parts), indexed Sunday..Saturday.
pub const DUR_MUHURTA: [&[u8]; 7] = [&[14], &[9, 12], &[4], &[8], &[6, 12], &[4, 9], &[1, 2]];

/// Varjyam start in ghatis (1/60 of the nakshatra span) after the
/// nakshatra begins, Ashwini..Revati.
pub const VARJYAM_GHATI: [f64; 27] = [
    50.0, 24.0, 30.0, 40.0, 14.0, 21.0, 30.0, 20.0, 32.0, 30.0, 20.0, 18.0, 21.0, 20.0, 14.0, 14.0,
    10.0, 14.0, 20.0, 24.0, 20.0, 10.0, 10.0, 18.0, 16.0, 24.0, 30.0,
];

/// Amrit Kaal start in ghatis after the nakshatra begins, Ashwini..Revati.
pub const AMRIT_KAAL_GHATI: [f64; 27] = [
    42.0, 48.0, 54.0, 52.0, 38.0, 35.0, 54.0, 44.0, 56.0, 54.0, 44.0, 42.0, 45.0, 44.0, 38.0, 38.0,
    34.0, 38.0, 44.0, 48.0, 44.0, 34.0, 34.0, 42.0, 40.0, 48.0, 54.0,
];

/// Both Varjyam and Amrit Kaal last 4 ghatis.
const WINDOW_GHATIS: f64 = 4.0;

/// A half-open interval of UT Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JdSpan {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl JdSpan {
    pub fn new(start_jd: f64, end_jd: f64) -> Result<Self, VedicError> {
        if start_jd.is_nan() || end_jd.is_nan() || end_jd <= start_jd {
            return Err(VedicError::InvalidSpan { start_jd, end_jd });
        }
        Ok(Self { start_jd, end_jd })
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start_jd + self.end_jd)
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// A span cut into equal parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySegments {
    span: JdSpan,
    count: u8,
}

impl DaySegments {
    /// Divide `[start_jd, end_jd)` into `count` equal parts.
    pub fn new(start_jd: f64, end_jd: f64, count: u8) -> Result<Self, VedicError> {
        if count == 0 {
            return Err(VedicError::IndexOutOfRange { what: "segment count", value: 0 });
        }
        Ok(Self {
            span: JdSpan::new(start_jd, end_jd)?,
            count,
        })
    }

    /// The daylight span in eighths.
    pub fn daylight_eighths(sunrise_jd: f64, sunset_jd: f64) -> Result<Self, VedicError> {
        Self::new(sunrise_jd, sunset_jd, 8)
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn span(&self) -> JdSpan {
        self.span
    }

    /// Length of one part in days.
    pub fn part_days(&self) -> f64 {
        self.span.duration_days() / self.count as f64
    }

    /// Part `index` (0-based).
    pub fn segment(&self, index: u8) -> Result<JdSpan, VedicError> {
        if index >= self.count {
            return Err(VedicError::IndexOutOfRange { what: "day segment", value: index });
        }
        let start = self.span.start_jd + index as f64 * self.part_days();
        // last part ends exactly on the span end
        let end = if index + 1 == self.count {
            self.span.end_jd
        } else {
            self.span.start_jd + (index as f64 + 1.0) * self.part_days()
        };
        Ok(JdSpan { start_jd: start, end_jd: end })
    }

    /// All parts in order.
    pub fn iter(&self) -> impl Iterator<Item = JdSpan> + '_ {
        (0..self.count).filter_map(move |i| self.segment(i).ok())
    }

    /// Which part contains `jd`, if any.
    pub fn index_of(&self, jd: f64) -> Option<u8> {
        if !self.span.contains(jd) {
            return None;
        }
        let i = ((jd - self.span.start_jd) / self.part_days()).floor() as u8;
        Some(i.min(self.count - 1))
    }
}

/// Named time windows of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Muhurta {
    RahuKaal,
    Yamaganda,
    Gulika,
    DurMuhurat,
    Varjyam,
    Abhijit,
    BrahmaMuhurta,
    AmritKaal,
}

impl Muhurta {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika Kaal",
            Self::DurMuhurat => "Dur Muhurat",
            Self::Varjyam => "Varjyam",
            Self::Abhijit => "Abhijit Muhurta",
            Self::BrahmaMuhurta => "Brahma Muhurta",
            Self::AmritKaal => "Amrit Kaal",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Abhijit | Self::BrahmaMuhurta | Self::AmritKaal)
    }
}

fn weekday_eighth(table: &[u8; 7], sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Result<JdSpan, VedicError> {
    DaySegments::daylight_eighths(sunrise_jd, sunset_jd)?.segment(table[vaar.index() as usize])
}

/// Rahu Kaal for the weekday.
pub fn rahu_kaal(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Result<JdSpan, VedicError> {
    weekday_eighth(&RAHU_KAAL_SEGMENT, sunrise_jd, sunset_jd, vaar)
}

/// Yamaganda for the weekday.
pub fn yamaganda(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Result<JdSpan, VedicError> {
    weekday_eighth(&YAMAGANDA_SEGMENT, sunrise_jd, sunset_jd, vaar)
}

/// Gulika Kaal for the weekday.
pub fn gulika_kaal(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Result<JdSpan, VedicError> {
    weekday_eighth(&GULIKA_SEGMENT, sunrise_jd, sunset_jd, vaar)
}

/// Dur Muhurat windows for the weekday (one or two).
pub fn dur_muhurat(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> Result<Vec<JdSpan>, VedicError> {
    let parts = DaySegments::new(sunrise_jd, sunset_jd, 15)?;
    DUR_MUHURTA[vaar.index() as usize]
        .iter()
        .map(|&n| parts.segment(n - 1))
        .collect()
}

/// Abhijit Muhurta: 24 minutes either side of the sunrise/sunset midpoint.
pub fn abhijit_muhurta(sunrise_jd: f64, sunset_jd: f64) -> Result<JdSpan, VedicError> {
    let noon = JdSpan::new(sunrise_jd, sunset_jd)?.midpoint();
    let half = 24.0 / MINUTES_PER_DAY;
    JdSpan::new(noon - half, noon + half)
}

/// Brahma Muhurta: from 96 to 48 minutes before sunrise.
pub fn brahma_muhurta(sunrise_jd: f64) -> JdSpan {
    JdSpan {
        start_jd: sunrise_jd - 96.0 / MINUTES_PER_DAY,
        end_jd: sunrise_jd - 48.0 / MINUTES_PER_DAY,
    }
}

fn ghati_window(ghati: f64, nakshatra_start_jd: f64, nakshatra_end_jd: f64) -> Result<JdSpan, VedicError> {
    let span = JdSpan::new(nakshatra_start_jd, nakshatra_end_jd)?;
    let ghati_days = span.duration_days() / 60.0;
    let start = span.start_jd + ghati * ghati_days;
    JdSpan::new(start, start + WINDOW_GHATIS * ghati_days)
}

/// Varjyam during a nakshatra spanning `[start, end)`.
pub fn varjyam(nakshatra: Nakshatra, nakshatra_start_jd: f64, nakshatra_end_jd: f64) -> Result<JdSpan, VedicError> {
    ghati_window(VARJYAM_GHATI[nakshatra.index() as usize], nakshatra_start_jd, nakshatra_end_jd)
}

/// Amrit Kaal during a nakshatra spanning `[start, end)`.
pub fn amrit_kaal(nakshatra: Nakshatra, nakshatra_start_jd: f64, nakshatra_end_jd: f64) -> Result<JdSpan, VedicError> {
    ghati_window(AMRIT_KAAL_GHATI[nakshatra.index() as usize], nakshatra_start_jd, nakshatra_end_jd)
}
