mod render;

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use panchang_config::Settings;
use panchang_engine::{
    EngineConfig, Moment, PanchangResult, TransitionModel, current_period, is_good_time, panchang_for_moment,
    panchang_for_range, sun_rise_set_for,
};
use panchang_ephem::AyanamshaSystem;
use panchang_time::{CivilZone, parse_date, parse_hm};
use panchang_vedic_base::{
    MonthSystem, karana_from_elongation, nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation,
    yoga_from_sum,
};
use serde_json::json;

/// Longest span `range` will compute in one call.
const MAX_RANGE_DAYS: u32 = 31;

#[derive(Parser)]
#[command(name = "panchang", about = "Vedic Panchang calculator")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Ayanamsha: lahiri, true-lahiri, kp, raman, fagan-bradley, yukteshwar
    #[arg(long, global = true)]
    ayanamsha: Option<String>,
    /// Transition model: mean-rate, true-rate, refined
    #[arg(long, global = true)]
    transition: Option<String>,
    /// Lunar month system: amanta, purnimanta
    #[arg(long, global = true)]
    month_system: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Where the day is observed. Missing values come from `[location]` in the
/// config file.
#[derive(Args, Debug, Clone, Default)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Altitude above sea level in meters
    #[arg(long, allow_negative_numbers = true)]
    alt: Option<f64>,
    /// IANA time zone, e.g. Asia/Kolkata
    #[arg(long)]
    tz: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for one civil date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: Place,
    },
    /// One line per day for consecutive dates
    Range {
        /// First date (YYYY-MM-DD)
        start: String,
        /// Number of days (1-31)
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=MAX_RANGE_DAYS as i64))]
        days: u32,
        #[command(flatten)]
        place: Place,
    },
    /// Sunrise, sunset, twilight and moon rise/set
    Riseset {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: Place,
    },
    /// Choghadiya, hora and muhurtas in effect at an instant
    Now {
        /// Local date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Local time (HH:MM); defaults to the current time
        #[arg(long)]
        at: Option<String>,
        #[command(flatten)]
        place: Place,
    },
    /// Classify an angle without computing positions
    Classify {
        #[arg(value_enum)]
        element: Element,
        /// Angle in degrees (elongation, sidereal longitude or sum)
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Element {
    /// Moon - Sun elongation
    Tithi,
    /// Moon sidereal longitude
    Nakshatra,
    /// Sun + Moon sidereal sum
    Yoga,
    /// Moon - Sun elongation
    Karana,
    /// Sidereal longitude
    Rashi,
}

struct ResolvedPlace {
    lat: f64,
    lon: f64,
    alt: f64,
    tz: String,
}

fn fail(msg: impl Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn names<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> String {
    all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", ")
}

fn engine_config(cli: &Cli, settings: &Settings) -> EngineConfig {
    let mut cfg = settings.engine;
    if let Some(s) = &cli.ayanamsha {
        cfg.ayanamsha = AyanamshaSystem::from_name(s).unwrap_or_else(|| {
            fail(format!(
                "unknown ayanamsha {s:?} (expected one of {})",
                names(AyanamshaSystem::all(), AyanamshaSystem::name)
            ))
        });
    }
    if let Some(s) = &cli.transition {
        cfg.transition = TransitionModel::from_name(s)
            .unwrap_or_else(|| fail(format!("unknown transition model {s:?} (mean-rate, true-rate, refined)")));
    }
    if let Some(s) = &cli.month_system {
        cfg.month_system = MonthSystem::from_name(s)
            .unwrap_or_else(|| fail(format!("unknown month system {s:?} (amanta, purnimanta)")));
    }
    cfg
}

fn resolve_place(place: &Place, settings: &Settings) -> ResolvedPlace {
    let fallback = settings.location.as_ref();
    let lat = place
        .lat
        .or(fallback.map(|l| l.latitude))
        .unwrap_or_else(|| fail("missing --lat (or [location] in the config file)"));
    let lon = place
        .lon
        .or(fallback.map(|l| l.longitude))
        .unwrap_or_else(|| fail("missing --lon (or [location] in the config file)"));
    let tz = place
        .tz
        .clone()
        .or_else(|| fallback.map(|l| l.timezone.clone()))
        .unwrap_or_else(|| fail("missing --tz (or [location] in the config file)"));
    let alt = place.alt.or(fallback.map(|l| l.altitude_m)).unwrap_or(0.0);
    ResolvedPlace { lat, lon, alt, tz }
}

fn moment_for(date: NaiveDate, place: &ResolvedPlace) -> Moment {
    Moment::new(date, place.lat, place.lon, &place.tz)
        .and_then(|m| m.with_altitude(place.alt))
        .unwrap_or_else(|e| fail(e))
}

fn require_date(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or_else(|e| fail(e))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn day_for(moment: &Moment, cfg: &EngineConfig) -> PanchangResult {
    panchang_for_moment(moment, cfg).unwrap_or_else(|e| fail(e))
}

/// The wall-clock instant a `now` query is about.
fn query_instant(zone: &CivilZone, date: Option<&str>, at: Option<&str>) -> DateTime<Tz> {
    let now = Utc::now().with_timezone(&zone.tz());
    if date.is_none() && at.is_none() {
        return now;
    }
    let day = date.map_or_else(|| now.date_naive(), require_date);
    let time = match at {
        Some(t) => parse_hm(t).unwrap_or_else(|e| fail(e)),
        None => NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
    };
    zone.resolve_local(day.and_time(time)).unwrap_or_else(|e| fail(e))
}

fn classify(element: Element, deg: f64, json_out: bool) {
    let (name, ordinal, count, fraction) = match element {
        Element::Tithi => {
            let p = tithi_from_elongation(deg);
            let name = format!("{} {}", p.paksha.name(), p.tithi.name());
            (name, p.tithi_index + 1, p.segment.count, p.segment.fraction())
        }
        Element::Nakshatra => {
            let p = nakshatra_from_longitude(deg);
            let name = format!("{} pada {}", p.nakshatra.name(), p.pada);
            (name, p.nakshatra_index + 1, p.segment.count, p.segment.fraction())
        }
        Element::Yoga => {
            let p = yoga_from_sum(deg);
            (p.yoga.name().to_string(), p.yoga_index + 1, p.segment.count, p.segment.fraction())
        }
        Element::Karana => {
            let p = karana_from_elongation(deg);
            (p.karana.name().to_string(), p.karana.ordinal(), 11, p.segment.fraction())
        }
        Element::Rashi => {
            let p = rashi_from_longitude(deg);
            let name = format!("{} / {} ({})", p.rashi.name(), p.rashi.western_name(), p.dms);
            (name, p.rashi_index + 1, p.segment.count, p.segment.fraction())
        }
    };
    let percent = fraction * 100.0;
    if json_out {
        print_json(&json!({
            "element": format!("{element:?}").to_lowercase(),
            "degrees": deg,
            "name": name,
            "ordinal": ordinal,
            "of": count,
            "percent_complete": percent,
        }));
    } else {
        println!("{name} ({ordinal}/{count}), {percent:.1}% elapsed");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let settings = panchang_config::load_or_default(cli.config.as_deref()).unwrap_or_else(|e| fail(e));
    let cfg = engine_config(&cli, &settings);
    debug!("engine config: {cfg:?}");

    match &cli.command {
        Commands::Day { date, place } => {
            let place = resolve_place(place, &settings);
            let day = day_for(&moment_for(require_date(date), &place), &cfg);
            if cli.json {
                print_json(&day);
            } else {
                render::day(&day);
            }
        }

        Commands::Range { start, days, place } => {
            let place = resolve_place(place, &settings);
            let moment = moment_for(require_date(start), &place);
            let results = panchang_for_range(&moment, *days, &cfg).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&results);
            } else {
                render::range(&results);
            }
        }

        Commands::Riseset { date, place } => {
            let place = resolve_place(place, &settings);
            let times = sun_rise_set_for(&moment_for(require_date(date), &place), &cfg).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&times);
            } else {
                render::sun_times(&times);
            }
        }

        Commands::Now { date, at, place } => {
            let place = resolve_place(place, &settings);
            let zone = CivilZone::parse(&place.tz).unwrap_or_else(|e| fail(e));
            let instant = query_instant(&zone, date.as_deref(), at.as_deref());

            // Before sunrise the previous civil day's choghadiya and hora still run.
            let mut day = day_for(&moment_for(instant.date_naive(), &place), &cfg);
            if day.sunrise.as_ref().is_some_and(|sr| instant < *sr) {
                if let Some(prev) = instant.date_naive().pred_opt() {
                    day = day_for(&moment_for(prev, &place), &cfg);
                }
            }

            let period = current_period(&day, &instant);
            let good = is_good_time(&day, &instant);
            if cli.json {
                print_json(&json!({
                    "instant": instant.to_rfc3339(),
                    "panchang_date": day.date,
                    "period": period,
                    "good_time": good,
                }));
            } else {
                render::period(&instant, &period, good);
            }
        }

        Commands::Classify { element, deg } => {
            if !deg.is_finite() {
                fail(format!("angle must be finite, got {deg}"));
            }
            classify(*element, *deg, cli.json);
        }
    }
}
