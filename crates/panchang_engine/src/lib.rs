//! Panchang engine: civil date, place and zone in; the five limbs, rise/set
//! times, muhurtas, calendar labels and festivals out.
//!
//! `panchang_for_moment` is a pure function of its inputs. It reads no
//! clock and keeps no state, so days and places can be computed in
//! parallel without coordination.
//!
//! All timestamps are zone-aware `DateTime<Tz>` values. Timings come from a
//! truncated analytic ephemeris and carry an [`AccuracyTag`].

pub mod calendar;
pub mod config;
pub mod error;
pub mod moment;
pub mod panchang;
pub mod panchang_types;
pub mod period;
pub mod search;

pub use calendar::{MasaSpan, masa_at, sankranti_between};
pub use config::{EngineConfig, ReferenceInstant, TransitionModel};
pub use error::PanchangError;
pub use moment::{MAX_YEAR, MIN_YEAR, Moment};
pub use panchang::{panchang_for_moment, panchang_for_range, sun_rise_set_for};
pub use panchang_types::{
    AccuracyTag, CalendarInfo, ChoghadiyaSlot, DayCondition, ElementWindow, EventTime, HoraSlot, KaranaInfo,
    MuhurtaWindow, NakshatraInfo, PanchangResult, PanchangaElement, ReferenceInfo, SankrantiInfo, SunTimes,
    TithiInfo, VaraInfo, YogaInfo,
};
pub use period::{CurrentPeriod, current_period, is_good_time};
pub use search::{MAX_REFINE_STEPS, next_new_moon, previous_new_moon, refine_crossing};
