//! Panchang for a civil day: the five limbs, rise/set, day divisions,
//! calendar and festivals.
//!
//! The limbs are classified at one reference instant (local sunrise by
//! default). Each limb's start and end come from its own relative motion:
//! Moon − Sun for tithi and karana, Moon for nakshatra, Moon + Sun for yoga.

use chrono::{DateTime, Datelike, Days, NaiveDate};
use chrono_tz::Tz;
use log::debug;
use panchang_ephem::LuniSolar;
use panchang_time::{CivilZone, calendar_to_jd};
use panchang_vedic_base::{
    DaySegments, JdSpan, Muhurta, Nakshatra, RelativeMotion, RiseSetEvent, RiseSetResult, SOLAR_EVENTS,
    TransitionWindow, Vaar, abhijit_muhurta, amrit_kaal, approximate_local_noon_jd, brahma_muhurta, compute_all_events,
    compute_moon_event, compute_sun_event, day_choghadiya, dur_muhurat, gulika_kaal, hora_sequence,
    karana_from_elongation, nakshatra_from_longitude, night_choghadiya, rahu_kaal, solar_noon_jd,
    tithi_from_elongation, varjyam, yamaganda, yoga_from_sum,
};

use crate::calendar::{CalendarInputs, calendar_info, festivals};
use crate::config::{EngineConfig, ReferenceInstant};
use crate::error::PanchangError;
use crate::moment::Moment;
use crate::panchang_types::{
    AccuracyTag, ChoghadiyaSlot, DayCondition, ElementWindow, EventTime, HoraSlot, KaranaInfo, MuhurtaWindow,
    NakshatraInfo, PanchangResult, ReferenceInfo, SunTimes, TithiInfo, VaraInfo, YogaInfo,
};
use crate::search::BoundarySearch;

const EPHEMERIS_METHOD: &str = "analytic series: Sun equation of center, Moon principal periodic terms";

/// Sun events framing one civil day, as UT Julian Days.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolarDay {
    solar_noon: f64,
    sunrise: Option<f64>,
    sunset: Option<f64>,
    next_sunrise: Option<f64>,
    condition: DayCondition,
}

fn ut_midnight_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

/// 0h UT of the day whose mean solar noon lies nearest the zone's civil
/// noon. Differs from the civil date's own 0h UT when the zone offset is
/// more than 12 h from the solar offset (Kiritimati, Apia, Tongatapu).
fn solar_day_anchor(moment: &Moment) -> Result<f64, PanchangError> {
    let jd_0h = ut_midnight_jd(moment.date());
    let civil_noon = moment.zone().local_midnight_jd(moment.date())? + 0.5;
    let mean_noon = approximate_local_noon_jd(jd_0h, moment.location().longitude_deg);
    Ok(jd_0h + (civil_noon - mean_noon).round())
}

fn solar_day(moment: &Moment, config: &EngineConfig) -> Result<SolarDay, PanchangError> {
    let loc = moment.location();
    let jd_0h = solar_day_anchor(moment)?;
    let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);
    let rise = compute_sun_event(loc, RiseSetEvent::Sunrise, noon, &config.rise_set)?;
    let set = compute_sun_event(loc, RiseSetEvent::Sunset, noon, &config.rise_set)?;
    let next_rise = compute_sun_event(loc, RiseSetEvent::Sunrise, noon + 1.0, &config.rise_set)?;
    let condition = match (rise, set) {
        (RiseSetResult::NeverRises, _) | (_, RiseSetResult::NeverRises) => DayCondition::PolarNight,
        (RiseSetResult::NeverSets, _) | (_, RiseSetResult::NeverSets) => DayCondition::MidnightSun,
        _ => DayCondition::Normal,
    };
    Ok(SolarDay {
        solar_noon: solar_noon_jd(jd_0h, loc.longitude_deg),
        sunrise: rise.jd_ut(),
        sunset: set.jd_ut(),
        next_sunrise: next_rise.jd_ut(),
        condition,
    })
}

fn local_opt(zone: &CivilZone, jd: Option<f64>) -> Result<Option<DateTime<Tz>>, PanchangError> {
    jd.map(|jd| zone.jd_to_local(jd)).transpose().map_err(PanchangError::from)
}

fn local_window(zone: &CivilZone, w: &TransitionWindow) -> Result<ElementWindow, PanchangError> {
    Ok(ElementWindow {
        start: zone.jd_to_local(w.start_jd)?,
        end: zone.jd_to_local(w.end_jd)?,
    })
}

/// UT Julian Days of the local midnights opening and closing the civil day.
fn civil_day_bounds(moment: &Moment) -> Result<(f64, f64), PanchangError> {
    let date = moment.date();
    let next = date.checked_add_days(Days::new(1)).ok_or_else(|| PanchangError::InputOutOfRange {
        field: "date",
        value: date.to_string(),
    })?;
    Ok((moment.zone().local_midnight_jd(date)?, moment.zone().local_midnight_jd(next)?))
}

fn moon_event(
    moment: &Moment,
    event: RiseSetEvent,
    day_start_jd: f64,
    config: &EngineConfig,
) -> Result<Option<f64>, PanchangError> {
    if !config.include_moon_rise_set {
        return Ok(None);
    }
    Ok(compute_moon_event(moment.location(), event, day_start_jd, &config.rise_set)?.jd_ut())
}

/// Named windows, choghadiya and hora for the day, as UT Julian Days.
struct DayDivisions {
    windows: Vec<(Muhurta, JdSpan)>,
    choghadiya: Vec<ChoghadiyaSlot>,
    hora: Vec<HoraSlot>,
}

fn day_divisions(
    zone: &CivilZone,
    day: &SolarDay,
    vaar: Vaar,
    nakshatra: Nakshatra,
    nakshatra_window: &TransitionWindow,
) -> Result<DayDivisions, PanchangError> {
    let mut windows = Vec::new();
    let mut choghadiya = Vec::with_capacity(16);
    let mut hora = Vec::with_capacity(24);
    let horas = hora_sequence(vaar);

    windows.push((
        Muhurta::Varjyam,
        varjyam(nakshatra, nakshatra_window.start_jd, nakshatra_window.end_jd)?,
    ));
    windows.push((
        Muhurta::AmritKaal,
        amrit_kaal(nakshatra, nakshatra_window.start_jd, nakshatra_window.end_jd)?,
    ));

    if let Some(rise) = day.sunrise {
        windows.push((Muhurta::BrahmaMuhurta, brahma_muhurta(rise)));
    }

    if let (Some(rise), Some(set)) = (day.sunrise, day.sunset) {
        windows.push((Muhurta::RahuKaal, rahu_kaal(rise, set, vaar)?));
        windows.push((Muhurta::Yamaganda, yamaganda(rise, set, vaar)?));
        windows.push((Muhurta::Gulika, gulika_kaal(rise, set, vaar)?));
        for span in dur_muhurat(rise, set, vaar)? {
            windows.push((Muhurta::DurMuhurat, span));
        }
        windows.push((Muhurta::Abhijit, abhijit_muhurta(rise, set)?));

        let labels = day_choghadiya(vaar);
        for (span, c) in DaySegments::new(rise, set, 8)?.iter().zip(labels) {
            choghadiya.push(ChoghadiyaSlot {
                choghadiya: c,
                name: c.name(),
                quality: c.quality(),
                night: false,
                start: zone.jd_to_local(span.start_jd)?,
                end: zone.jd_to_local(span.end_jd)?,
            });
        }
        for (i, span) in DaySegments::new(rise, set, 12)?.iter().enumerate() {
            hora.push(HoraSlot {
                number: i as u8 + 1,
                lord: horas[i],
                night: false,
                start: zone.jd_to_local(span.start_jd)?,
                end: zone.jd_to_local(span.end_jd)?,
            });
        }
    } else {
        debug!("no daytime divisions: {:?}", day.condition);
    }

    if let (Some(set), Some(next_rise)) = (day.sunset, day.next_sunrise) {
        let labels = night_choghadiya(vaar);
        for (span, c) in DaySegments::new(set, next_rise, 8)?.iter().zip(labels) {
            choghadiya.push(ChoghadiyaSlot {
                choghadiya: c,
                name: c.name(),
                quality: c.quality(),
                night: true,
                start: zone.jd_to_local(span.start_jd)?,
                end: zone.jd_to_local(span.end_jd)?,
            });
        }
        for (i, span) in DaySegments::new(set, next_rise, 12)?.iter().enumerate() {
            hora.push(HoraSlot {
                number: i as u8 + 13,
                lord: horas[12 + i],
                night: true,
                start: zone.jd_to_local(span.start_jd)?,
                end: zone.jd_to_local(span.end_jd)?,
            });
        }
    }

    windows.sort_by(|a, b| a.1.start_jd.total_cmp(&b.1.start_jd));
    Ok(DayDivisions {
        windows,
        choghadiya,
        hora,
    })
}

/// Compute the panchang for a civil day.
///
/// Cost is fixed per call: a constant number of trigonometric series
/// evaluations, at most four Newton steps per element boundary and two
/// new-moon searches for the lunar month. Nothing depends on the date.
pub fn panchang_for_moment(moment: &Moment, config: &EngineConfig) -> Result<PanchangResult, PanchangError> {
    let zone = moment.zone();
    let day = solar_day(moment, config)?;
    let (day_start, day_end) = civil_day_bounds(moment)?;

    let (kind, reference_jd) = match (config.reference, day.sunrise) {
        (ReferenceInstant::Sunrise, Some(rise)) => (ReferenceInstant::Sunrise, rise),
        _ => (ReferenceInstant::LocalNoon, day.solar_noon),
    };
    debug!(
        "panchang {} at ({:.4}, {:.4}) {}: reference {} jd {reference_jd:.6}",
        moment.date(),
        moment.location().latitude_deg,
        moment.location().longitude_deg,
        zone.name(),
        kind.name()
    );

    let ls = LuniSolar::at(reference_jd, config.ayanamsha, config.transition.rate_model());
    let tithi = tithi_from_elongation(ls.elongation_deg());
    let nakshatra = nakshatra_from_longitude(ls.moon_sidereal.longitude_deg);
    let yoga = yoga_from_sum(ls.sidereal_sum_deg());
    let karana = karana_from_elongation(ls.elongation_deg());

    let mut search = BoundarySearch::new(config);
    let tithi_w = search.window(RelativeMotion::Elongation, &tithi.segment, &ls)?;
    let nakshatra_w = search.window(RelativeMotion::Moon, &nakshatra.segment, &ls)?;
    let yoga_w = search.window(RelativeMotion::Sum, &yoga.segment, &ls)?;
    let karana_w = search.window(RelativeMotion::Elongation, &karana.segment, &ls)?;

    let vaar = Vaar::from_index(moment.date().weekday().num_days_from_sunday() as u8);
    let divisions = day_divisions(zone, &day, vaar, nakshatra.nakshatra, &nakshatra_w)?;

    let calendar = calendar_info(&CalendarInputs {
        moment,
        reference: &ls,
        paksha: tithi.paksha,
        month_system: config.month_system,
        system: config.ayanamsha,
        day_start_jd: day_start,
        day_end_jd: day_end,
    })?;
    let festivals = festivals(moment, tithi.tithi, vaar, &calendar);

    let muhurta_windows = divisions
        .windows
        .iter()
        .map(|(m, span)| {
            Ok(MuhurtaWindow {
                muhurta: *m,
                label: m.name(),
                auspicious: m.is_auspicious(),
                start: zone.jd_to_local(span.start_jd)?,
                end: zone.jd_to_local(span.end_jd)?,
            })
        })
        .collect::<Result<Vec<_>, PanchangError>>()?;

    Ok(PanchangResult {
        date: moment.date(),
        timezone: zone.name(),
        location: *moment.location(),
        reference: ReferenceInfo {
            kind,
            time: zone.jd_to_local(reference_jd)?,
        },
        tithi: TithiInfo {
            tithi: tithi.tithi,
            name: tithi.tithi.name(),
            ordinal: tithi.tithi.ordinal(),
            paksha: tithi.paksha,
            tithi_in_paksha: tithi.tithi_in_paksha,
            lord: tithi.tithi.lord(),
            category: tithi.tithi.category(),
            percent_complete: tithi.segment.percent_complete(),
            window: local_window(zone, &tithi_w)?,
        },
        nakshatra: NakshatraInfo {
            nakshatra: nakshatra.nakshatra,
            name: nakshatra.nakshatra.name(),
            ordinal: nakshatra.segment.ordinal(),
            pada: nakshatra.pada,
            lord: nakshatra.nakshatra.lord(),
            percent_complete: nakshatra.segment.percent_complete(),
            window: local_window(zone, &nakshatra_w)?,
        },
        yoga: YogaInfo {
            yoga: yoga.yoga,
            name: yoga.yoga.name(),
            ordinal: yoga.segment.ordinal(),
            auspicious: yoga.yoga.is_auspicious(),
            percent_complete: yoga.segment.percent_complete(),
            window: local_window(zone, &yoga_w)?,
        },
        karana: KaranaInfo {
            karana: karana.karana,
            name: karana.karana.name(),
            ordinal: karana.karana.ordinal(),
            slot: karana.karana_index,
            fixed: karana.karana.is_fixed(),
            percent_complete: karana.segment.percent_complete(),
            window: local_window(zone, &karana_w)?,
        },
        vara: VaraInfo {
            vaar,
            name: vaar.name(),
            english_name: vaar.english_name(),
            lord: vaar.lord(),
        },
        sunrise: local_opt(zone, day.sunrise)?,
        sunset: local_opt(zone, day.sunset)?,
        next_sunrise: local_opt(zone, day.next_sunrise)?,
        moonrise: local_opt(zone, moon_event(moment, RiseSetEvent::Moonrise, day_start, config)?)?,
        moonset: local_opt(zone, moon_event(moment, RiseSetEvent::Moonset, day_start, config)?)?,
        muhurta_windows,
        choghadiya: divisions.choghadiya,
        hora: divisions.hora,
        calendar,
        festivals,
        accuracy: AccuracyTag {
            ephemeris: EPHEMERIS_METHOD,
            ayanamsha: config.ayanamsha.name(),
            transition: config.transition,
            typical_error_minutes: config.transition.typical_error_minutes(),
            linear_fallbacks: search.fallbacks(),
        },
    })
}

/// Panchang for `days` consecutive civil days starting at `start`.
///
/// Callers facing untrusted input should cap `days`; each day costs one
/// [`panchang_for_moment`].
pub fn panchang_for_range(
    start: &Moment,
    days: u32,
    config: &EngineConfig,
) -> Result<Vec<PanchangResult>, PanchangError> {
    let mut out = Vec::with_capacity(days as usize);
    let mut moment = *start;
    for i in 0..days {
        if i > 0 {
            moment = moment.next_day()?;
        }
        out.push(panchang_for_moment(&moment, config)?);
    }
    Ok(out)
}

/// Sunrise, sunset, twilight and (optionally) moonrise/moonset for a day.
pub fn sun_rise_set_for(moment: &Moment, config: &EngineConfig) -> Result<SunTimes, PanchangError> {
    let zone = moment.zone();
    let loc = moment.location();
    let day = solar_day(moment, config)?;
    let (day_start, _) = civil_day_bounds(moment)?;
    let noon = approximate_local_noon_jd(solar_day_anchor(moment)?, loc.longitude_deg);

    let twilight = SOLAR_EVENTS
        .iter()
        .zip(compute_all_events(loc, noon, &config.rise_set)?)
        .filter(|(event, _)| event.twilight_depression_deg().is_some())
        .map(|(&event, result)| {
            Ok(EventTime {
                event,
                name: event.name(),
                time: local_opt(zone, result.jd_ut())?,
            })
        })
        .collect::<Result<Vec<_>, PanchangError>>()?;

    let day_length_minutes = match (day.sunrise, day.sunset) {
        (Some(rise), Some(set)) => Some((set - rise) * 1440.0),
        _ => None,
    };

    Ok(SunTimes {
        date: moment.date(),
        sunrise: local_opt(zone, day.sunrise)?,
        sunset: local_opt(zone, day.sunset)?,
        solar_noon: zone.jd_to_local(day.solar_noon)?,
        day_length_minutes,
        condition: day.condition,
        twilight,
        moonrise: local_opt(zone, moon_event(moment, RiseSetEvent::Moonrise, day_start, config)?)?,
        moonset: local_opt(zone, moon_event(moment, RiseSetEvent::Moonset, day_start, config)?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai(y: i32, m: u32, d: u32) -> Moment {
        Moment::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), 13.08, 80.27, "Asia/Kolkata").unwrap()
    }

    #[test]
    fn reference_is_sunrise() {
        let r = panchang_for_moment(&chennai(2024, 6, 21), &EngineConfig::default()).unwrap();
        assert_eq!(r.reference.kind, ReferenceInstant::Sunrise);
        assert_eq!(Some(r.reference.time.clone()), r.sunrise);
    }

    #[test]
    fn noon_reference_on_request() {
        let config = EngineConfig {
            reference: ReferenceInstant::LocalNoon,
            ..EngineConfig::default()
        };
        let r = panchang_for_moment(&chennai(2024, 6, 21), &config).unwrap();
        assert_eq!(r.reference.kind, ReferenceInstant::LocalNoon);
        let rise = r.sunrise.clone().unwrap();
        let set = r.sunset.clone().unwrap();
        assert!(rise < r.reference.time && r.reference.time < set);
    }

    #[test]
    fn windows_contain_reference() {
        let r = panchang_for_moment(&chennai(2024, 3, 10), &EngineConfig::default()).unwrap();
        for e in r.elements() {
            let w = e.window();
            assert!(w.start <= r.reference.time && r.reference.time <= w.end, "{} {:?}", e.kind(), w);
        }
    }

    #[test]
    fn friday_vara() {
        let r = panchang_for_moment(&chennai(2024, 6, 21), &EngineConfig::default()).unwrap();
        assert_eq!(r.vara.vaar, Vaar::Shukravaar);
        assert_eq!(r.hora[0].lord, r.vara.lord);
    }

    #[test]
    fn muhurtas_sorted() {
        let r = panchang_for_moment(&chennai(2024, 6, 21), &EngineConfig::default()).unwrap();
        for pair in r.muhurta_windows.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        assert_eq!(r.windows(Muhurta::RahuKaal).count(), 1);
        assert_eq!(r.choghadiya.len(), 16);
        assert_eq!(r.hora.len(), 24);
    }

    #[test]
    fn moon_optional() {
        let config = EngineConfig {
            include_moon_rise_set: false,
            ..EngineConfig::default()
        };
        let r = panchang_for_moment(&chennai(2024, 6, 21), &config).unwrap();
        assert!(r.moonrise.is_none() && r.moonset.is_none());
    }

    #[test]
    fn range_walks_days() {
        let days = panchang_for_range(&chennai(2024, 2, 27), 4, &EngineConfig::default()).unwrap();
        let dates: Vec<_> = days.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn twilight_order() {
        let t = sun_rise_set_for(&chennai(2024, 6, 21), &EngineConfig::default()).unwrap();
        assert_eq!(t.condition, DayCondition::Normal);
        assert_eq!(t.twilight.len(), 6);
        let rise = t.sunrise.clone().unwrap();
        let civil_dawn = t.twilight.iter().find(|e| e.event == RiseSetEvent::CivilDawn).unwrap();
        assert!(civil_dawn.time.clone().unwrap() < rise);
    }
}
