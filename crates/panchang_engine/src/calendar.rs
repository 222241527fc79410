//! Lunar month, sankranti, era labels and festivals for a civil day.

use chrono::Datelike;
use log::{debug, warn};
use panchang_ephem::{AyanamshaSystem, LuniSolar, RateModel};
use panchang_time::normalize_360;
use panchang_vedic_base::{
    Festival, FestivalContext, Masa, MonthSystem, Paksha, Rashi, RelativeMotion, Tithi, Vaar,
    ayana_from_sidereal_longitude, festivals_for, lunar_year_begun, lunar_year_start_ce, masa_from_rashi_index,
    rashi_from_longitude, ritu_from_masa, samvatsara_from_year, shaka_samvat, vikram_samvat,
};

use crate::error::PanchangError;
use crate::moment::Moment;
use crate::panchang_types::{CalendarInfo, ElementWindow, SankrantiInfo};
use crate::search::{MAX_REFINE_STEPS, next_new_moon, previous_new_moon, refine_crossing};

/// Amanta lunar month around an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaSpan {
    pub masa: Masa,
    pub adhika: bool,
    /// New moon that opened the month.
    pub start_jd: f64,
    /// New moon that closes it.
    pub end_jd: f64,
}

fn sun_rashi_at(jd_ut: f64, system: AyanamshaSystem) -> Rashi {
    let ls = LuniSolar::at(jd_ut, system, RateModel::True);
    rashi_from_longitude(ls.sun_sidereal.longitude_deg).rashi
}

/// Amanta month containing `jd_ut`.
///
/// The month is named after the Sun's rashi at the new moon that ends it.
/// When the Sun stays in one rashi across both new moons the month is
/// adhika and takes the name of the following month.
pub fn masa_at(jd_ut: f64, system: AyanamshaSystem) -> Result<MasaSpan, PanchangError> {
    let start_jd = previous_new_moon(jd_ut, system)?;
    let end_jd = next_new_moon(jd_ut, system)?;
    let at_start = sun_rashi_at(start_jd, system).index();
    let at_end = sun_rashi_at(end_jd, system).index();
    let (masa, adhika) = if at_start != at_end {
        (masa_from_rashi_index(at_end), false)
    } else {
        (masa_from_rashi_index((at_start + 1) % 12), true)
    };
    debug!("masa at {jd_ut:.5}: {} adhika={adhika} (new moons {start_jd:.5} .. {end_jd:.5})", masa.name());
    Ok(MasaSpan {
        masa,
        adhika,
        start_jd,
        end_jd,
    })
}

/// Sun entering a new rashi within `[start_jd, end_jd)`, with the instant.
///
/// The rashi at the end of the previous day is compared with the rashi at
/// the end of this one.
pub fn sankranti_between(start_jd: f64, end_jd: f64, system: AyanamshaSystem) -> Option<(Rashi, f64)> {
    let ls = LuniSolar::at(start_jd, system, RateModel::True);
    let before = rashi_from_longitude(ls.sun_sidereal.longitude_deg).rashi;
    let after = sun_rashi_at(end_jd, system);
    if before == after {
        return None;
    }
    let target = after.index() as f64 * 30.0;
    let guess = start_jd + normalize_360(target - ls.sun_sidereal.longitude_deg) / ls.sun_sidereal.daily_rate_deg;
    let jd = refine_crossing(RelativeMotion::Sun, target, guess, system, MAX_REFINE_STEPS).unwrap_or_else(|| {
        warn!("sankranti into {} diverged; keeping linear estimate", after.name());
        guess
    });
    Some((after, jd))
}

/// Inputs gathered by the engine for one day's calendar.
pub(crate) struct CalendarInputs<'a> {
    pub moment: &'a Moment,
    pub reference: &'a LuniSolar,
    pub paksha: Paksha,
    pub month_system: MonthSystem,
    pub system: AyanamshaSystem,
    /// UT Julian Days of this and the next local midnight.
    pub day_start_jd: f64,
    pub day_end_jd: f64,
}

pub(crate) fn calendar_info(inputs: &CalendarInputs<'_>) -> Result<CalendarInfo, PanchangError> {
    let zone = inputs.moment.zone();
    let date = inputs.moment.date();
    let span = masa_at(inputs.reference.jd_ut, inputs.system)?;

    let begun = lunar_year_begun(date.month(), span.masa);
    let samvatsara = samvatsara_from_year(lunar_year_start_ce(date.year(), begun));
    let lunar_month = span.masa.in_system(inputs.month_system, inputs.paksha);
    let lunar_month_name = if span.adhika {
        format!("Adhika {}", lunar_month.name())
    } else {
        lunar_month.name().to_string()
    };

    let sankranti = match sankranti_between(inputs.day_start_jd, inputs.day_end_jd, inputs.system) {
        Some((rashi, jd)) => Some(SankrantiInfo {
            rashi,
            name: rashi.name(),
            time: zone.jd_to_local(jd)?,
        }),
        None => None,
    };

    Ok(CalendarInfo {
        vikram_samvat: vikram_samvat(date.year(), begun),
        shaka_samvat: shaka_samvat(date.year(), begun),
        samvatsara: samvatsara.name(),
        samvatsara_order: samvatsara.order(),
        lunar_month,
        lunar_month_name,
        amanta_month: span.masa,
        adhika: span.adhika,
        month_system: inputs.month_system,
        month_span: ElementWindow {
            start: zone.jd_to_local(span.start_jd)?,
            end: zone.jd_to_local(span.end_jd)?,
        },
        paksha: inputs.paksha,
        ritu: ritu_from_masa(span.masa),
        ayana: ayana_from_sidereal_longitude(inputs.reference.sun_sidereal.longitude_deg),
        sun_rashi: rashi_from_longitude(inputs.reference.sun_sidereal.longitude_deg).rashi,
        moon_rashi: rashi_from_longitude(inputs.reference.moon_sidereal.longitude_deg).rashi,
        sankranti,
    })
}

/// Festivals for the day, from the sunrise tithi and the assembled calendar.
pub(crate) fn festivals(moment: &Moment, tithi: Tithi, vaar: Vaar, calendar: &CalendarInfo) -> Vec<Festival> {
    let date = moment.date();
    let ctx = FestivalContext {
        tithi,
        masa: calendar.amanta_month,
        adhika: calendar.adhika,
        vaar,
        month: date.month(),
        day: date.day(),
        sankranti: calendar.sankranti.as_ref().map(|s| s.rashi),
    };
    festivals_for(&ctx)
}
