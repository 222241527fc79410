//! Panchanga classification and day-division building blocks.
//!
//! This crate provides:
//! - A shared angular-partition classifier and the five limbs built on it
//!   (tithi, nakshatra, yoga, karana, vaar) plus rashi
//! - Linear transition estimates keyed to each element's own relative motion
//! - Sunrise/sunset, twilight and moonrise/moonset by the hour-angle method
//! - Day divisions: Rahu Kaal, Yamaganda, Gulika, Dur Muhurat, Abhijit,
//!   Brahma Muhurta, Varjyam, Amrit Kaal, Choghadiya and Hora
//! - Lunar month, ritu, ayana, era labels and the festival rule table
//!
//! Everything here is a pure function of its inputs. Times are UT Julian Days;
//! civil-time presentation belongs to the engine crate.

pub mod choghadiya;
pub mod classify;
pub mod era;
pub mod error;
pub mod festival;
pub mod graha;
pub mod hora;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod transition;
pub mod vaar;
pub mod yoga;

pub use choghadiya::{Choghadiya, DAY_CHOGHADIYA, NIGHT_CHOGHADIYA, Quality, day_choghadiya, night_choghadiya};
pub use classify::{AngularPartition, Segment, classify};
pub use era::{
    SAMVATSARA_EPOCH_YEAR, Samvatsara, lunar_year_begun, lunar_year_start_ce, samvatsara_from_year,
    shaka_samvat, vikram_samvat,
};
pub use error::VedicError;
pub use festival::{
    FESTIVAL_RULES, Festival, FestivalCategory, FestivalContext, FestivalRule, Trigger, festivals_for,
    lunar_day_festival, sankranti_festival,
};
pub use graha::{ALL_GRAHAS, CHALDEAN_ORDER, Graha};
pub use hora::{HORAS_PER_DAY, hora_lord, hora_sequence};
pub use karana::{KARANA_SEGMENT_DEG, KARANA_SLOTS, Karana, KaranaPosition, MOVABLE_KARANAS, karana_from_elongation};
pub use masa::{
    ALL_MASAS, Ayana, Masa, MonthSystem, Ritu, ayana_from_sidereal_longitude, masa_from_rashi_index,
    ritu_from_masa,
};
pub use muhurta::{
    AMRIT_KAAL_GHATI, DUR_MUHURTA, DaySegments, GULIKA_SEGMENT, JdSpan, Muhurta, RAHU_KAAL_SEGMENT,
    VARJYAM_GHATI, YAMAGANDA_SEGMENT, abhijit_muhurta, amrit_kaal, brahma_muhurta, dur_muhurat,
    gulika_kaal, rahu_kaal, varjyam, yamaganda,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiPosition, rashi_from_longitude};
pub use riseset::{
    approximate_local_noon_jd, compute_all_events, compute_moon_event, compute_sun_event, solar_noon_jd,
};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SOLAR_EVENTS};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiCategory, TithiPosition, tithi_from_elongation};
pub use transition::{RelativeMotion, TransitionWindow, linear_transition};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
