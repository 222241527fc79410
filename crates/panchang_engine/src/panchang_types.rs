//! Result types for panchang computation.
//!
//! Every timestamp is a `DateTime<Tz>` in the request's zone, so a boundary
//! after local midnight carries the next calendar date.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use panchang_vedic_base::{
    Ayana, Choghadiya, Festival, GeoLocation, Graha, Karana, Masa, MonthSystem, Muhurta, Nakshatra, Paksha,
    Quality, Rashi, RiseSetEvent, Ritu, Tithi, TithiCategory, Vaar, Yoga,
};

use crate::config::{ReferenceInstant, TransitionModel};

/// True when `t` lies in `[start, end)`.
pub(crate) fn spans<Z: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, t: &DateTime<Z>) -> bool {
    let ms = t.timestamp_millis();
    start.timestamp_millis() <= ms && ms < end.timestamp_millis()
}

/// Start and end of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl ElementWindow {
    pub fn duration_minutes(&self) -> f64 {
        (self.end.timestamp_millis() - self.start.timestamp_millis()) as f64 / 60_000.0
    }

    pub fn contains<Z: TimeZone>(&self, t: &DateTime<Z>) -> bool {
        spans(&self.start, &self.end, t)
    }
}

/// Tithi (lunar day) at the reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub name: &'static str,
    /// 1-based ordinal (1..=30).
    pub ordinal: u8,
    pub paksha: Paksha,
    /// Number within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Presiding deity.
    pub lord: &'static str,
    pub category: TithiCategory,
    pub percent_complete: f64,
    pub window: ElementWindow,
}

/// Moon's nakshatra at the reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    /// 1-based ordinal (1..=27).
    pub ordinal: u8,
    /// Quarter, 1..=4.
    pub pada: u8,
    /// Vimshottari lord.
    pub lord: Graha,
    pub percent_complete: f64,
    pub window: ElementWindow,
}

/// Yoga at the reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub name: &'static str,
    /// 1-based ordinal (1..=27).
    pub ordinal: u8,
    pub auspicious: bool,
    pub percent_complete: f64,
    pub window: ElementWindow,
}

/// Karana at the reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    pub name: &'static str,
    /// 1-based ordinal among the 11 karanas.
    pub ordinal: u8,
    /// Half-tithi slot in the synodic month (0..60).
    pub slot: u8,
    /// Occurs once per month (Shakuni, Chatushpada, Naga, Kimstughna).
    pub fixed: bool,
    pub percent_complete: f64,
    pub window: ElementWindow,
}

/// Weekday and its planetary lord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaraInfo {
    pub vaar: Vaar,
    pub name: &'static str,
    pub english_name: &'static str,
    pub lord: Graha,
}

/// One of the four time-bounded limbs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum PanchangaElement {
    Tithi(TithiInfo),
    Nakshatra(NakshatraInfo),
    Yoga(YogaInfo),
    Karana(KaranaInfo),
}

impl PanchangaElement {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tithi(_) => "Tithi",
            Self::Nakshatra(_) => "Nakshatra",
            Self::Yoga(_) => "Yoga",
            Self::Karana(_) => "Karana",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tithi(i) => i.name,
            Self::Nakshatra(i) => i.name,
            Self::Yoga(i) => i.name,
            Self::Karana(i) => i.name,
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Tithi(i) => i.ordinal,
            Self::Nakshatra(i) => i.ordinal,
            Self::Yoga(i) => i.ordinal,
            Self::Karana(i) => i.ordinal,
        }
    }

    /// Fixed cardinality of the element.
    pub fn cardinality(&self) -> u8 {
        match self {
            Self::Tithi(_) => 30,
            Self::Nakshatra(_) | Self::Yoga(_) => 27,
            Self::Karana(_) => 11,
        }
    }

    pub fn percent_complete(&self) -> f64 {
        match self {
            Self::Tithi(i) => i.percent_complete,
            Self::Nakshatra(i) => i.percent_complete,
            Self::Yoga(i) => i.percent_complete,
            Self::Karana(i) => i.percent_complete,
        }
    }

    pub fn window(&self) -> &ElementWindow {
        match self {
            Self::Tithi(i) => &i.window,
            Self::Nakshatra(i) => &i.window,
            Self::Yoga(i) => &i.window,
            Self::Karana(i) => &i.window,
        }
    }

    /// Ruling graha, where the element has one.
    pub fn lord(&self) -> Option<Graha> {
        match self {
            Self::Nakshatra(i) => Some(i.lord),
            _ => None,
        }
    }

    pub fn paksha(&self) -> Option<Paksha> {
        match self {
            Self::Tithi(i) => Some(i.paksha),
            _ => None,
        }
    }

    pub fn pada(&self) -> Option<u8> {
        match self {
            Self::Nakshatra(i) => Some(i.pada),
            _ => None,
        }
    }
}

/// A named window of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhurtaWindow {
    pub muhurta: Muhurta,
    pub label: &'static str,
    pub auspicious: bool,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl MuhurtaWindow {
    pub fn contains<Z: TimeZone>(&self, t: &DateTime<Z>) -> bool {
        spans(&self.start, &self.end, t)
    }
}

/// One of the 16 choghadiya periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoghadiyaSlot {
    pub choghadiya: Choghadiya,
    pub name: &'static str,
    pub quality: Quality,
    /// Falls between sunset and the next sunrise.
    pub night: bool,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl ChoghadiyaSlot {
    pub fn contains<Z: TimeZone>(&self, t: &DateTime<Z>) -> bool {
        spans(&self.start, &self.end, t)
    }
}

/// One of the 24 planetary hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraSlot {
    /// 1-based position from sunrise (1..=24).
    pub number: u8,
    pub lord: Graha,
    pub night: bool,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl HoraSlot {
    pub fn contains<Z: TimeZone>(&self, t: &DateTime<Z>) -> bool {
        spans(&self.start, &self.end, t)
    }
}

/// The Sun entering a rashi during the civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankrantiInfo {
    pub rashi: Rashi,
    pub name: &'static str,
    pub time: DateTime<Tz>,
}

/// Era labels, lunar month, season and solar half-year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarInfo {
    pub vikram_samvat: i32,
    pub shaka_samvat: i32,
    pub samvatsara: &'static str,
    /// 1-based position in the 60-year cycle.
    pub samvatsara_order: u8,
    /// Lunar month named in the configured month system.
    pub lunar_month: Masa,
    /// Display name, prefixed with "Adhika " in an intercalary month.
    pub lunar_month_name: String,
    pub amanta_month: Masa,
    pub adhika: bool,
    pub month_system: MonthSystem,
    /// Amanta month boundaries (new moon to new moon).
    pub month_span: ElementWindow,
    pub paksha: Paksha,
    pub ritu: Ritu,
    pub ayana: Ayana,
    pub sun_rashi: Rashi,
    pub moon_rashi: Rashi,
    pub sankranti: Option<SankrantiInfo>,
}

/// Instant the limbs were classified at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceInfo {
    /// `LocalNoon` when sunrise was requested but the Sun does not rise.
    pub kind: ReferenceInstant,
    pub time: DateTime<Tz>,
}

/// Method and expected accuracy of the timings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyTag {
    pub ephemeris: &'static str,
    pub ayanamsha: &'static str,
    pub transition: TransitionModel,
    /// Typical error of element boundaries and rise/set times, minutes.
    pub typical_error_minutes: f64,
    /// Boundaries where refinement diverged and the linear estimate was kept.
    pub linear_fallbacks: u8,
}

/// Sun above or below the horizon all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayCondition {
    Normal,
    /// Sun never rises.
    PolarNight,
    /// Sun never sets.
    MidnightSun,
}

/// A solar event time, absent when it does not occur.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTime {
    pub event: RiseSetEvent,
    pub name: &'static str,
    pub time: Option<DateTime<Tz>>,
}

/// Solar rise/set and twilight for a civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunTimes {
    pub date: NaiveDate,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub solar_noon: DateTime<Tz>,
    pub day_length_minutes: Option<f64>,
    pub condition: DayCondition,
    /// Dawns and dusks, chronological.
    pub twilight: Vec<EventTime>,
    pub moonrise: Option<DateTime<Tz>>,
    pub moonset: Option<DateTime<Tz>>,
}

/// Complete panchang for one civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangResult {
    pub date: NaiveDate,
    pub timezone: &'static str,
    pub location: GeoLocation,
    pub reference: ReferenceInfo,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vara: VaraInfo,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub next_sunrise: Option<DateTime<Tz>>,
    pub moonrise: Option<DateTime<Tz>>,
    pub moonset: Option<DateTime<Tz>>,
    /// Named windows sorted by start.
    pub muhurta_windows: Vec<MuhurtaWindow>,
    /// Eight day then eight night periods; empty when the Sun does not
    /// both rise and set.
    pub choghadiya: Vec<ChoghadiyaSlot>,
    /// Twelve day then twelve night horas; empty like `choghadiya`.
    pub hora: Vec<HoraSlot>,
    pub calendar: CalendarInfo,
    pub festivals: Vec<Festival>,
    pub accuracy: AccuracyTag,
}

impl PanchangResult {
    /// The four time-bounded limbs as one sum type.
    pub fn elements(&self) -> [PanchangaElement; 4] {
        [
            PanchangaElement::Tithi(self.tithi.clone()),
            PanchangaElement::Nakshatra(self.nakshatra.clone()),
            PanchangaElement::Yoga(self.yoga.clone()),
            PanchangaElement::Karana(self.karana.clone()),
        ]
    }

    /// Windows with the given label.
    pub fn windows(&self, muhurta: Muhurta) -> impl Iterator<Item = &MuhurtaWindow> {
        self.muhurta_windows.iter().filter(move |w| w.muhurta == muhurta)
    }
}
