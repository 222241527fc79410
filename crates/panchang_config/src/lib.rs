//! TOML configuration for the panchang engine.
//!
//! Every key is optional; an empty document gives
//! [`EngineConfig::default`] and no default location.
//!
//! ```toml
//! ayanamsha = "lahiri"          # true-lahiri, kp, raman, fagan-bradley, yukteshwar
//! transition = "refined"        # mean-rate, true-rate
//! month_system = "amanta"       # purnimanta
//! reference = "sunrise"         # local-noon
//! include_moon_rise_set = true
//!
//! [rise_set]
//! refraction_arcmin = 34.0
//! semidiameter_arcmin = 16.0
//! altitude_correction = true
//! moon_parallax = true
//!
//! [location]
//! latitude = 28.6139
//! longitude = 77.2090
//! altitude_m = 216.0
//! timezone = "Asia/Kolkata"
//! ```

pub mod error;

use std::fs;
use std::path::Path;

use log::debug;
use panchang_engine::{EngineConfig, ReferenceInstant, TransitionModel};
use panchang_ephem::AyanamshaSystem;
use panchang_vedic_base::{MonthSystem, RiseSetConfig};
use serde::Deserialize;

pub use error::ConfigError;

/// A default place for commands that are not given one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude_m: f64,
    pub timezone: String,
}

/// Everything a configuration file can set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub location: Option<LocationConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    ayanamsha: Option<String>,
    transition: Option<String>,
    month_system: Option<String>,
    reference: Option<String>,
    include_moon_rise_set: Option<bool>,
    rise_set: Option<RiseSetConfig>,
    location: Option<LocationConfig>,
}

fn lookup<T>(key: &'static str, value: Option<&str>, parse: fn(&str) -> Option<T>) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => parse(v).map(Some).ok_or_else(|| ConfigError::InvalidValue {
            key,
            value: v.to_string(),
        }),
    }
}

fn check_number(key: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
    }
}

fn check_location(loc: &LocationConfig) -> Result<(), ConfigError> {
    check_number("location.latitude", loc.latitude, -90.0, 90.0)?;
    check_number("location.longitude", loc.longitude, -180.0, 180.0)?;
    check_number("location.altitude_m", loc.altitude_m, -500.0, 10_000.0)?;
    if loc.timezone.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "location.timezone",
            value: loc.timezone.clone(),
        });
    }
    Ok(())
}

fn check_rise_set(cfg: &RiseSetConfig) -> Result<(), ConfigError> {
    check_number("rise_set.refraction_arcmin", cfg.refraction_arcmin, 0.0, 120.0)?;
    check_number("rise_set.semidiameter_arcmin", cfg.semidiameter_arcmin, 0.0, 60.0)
}

/// Parse configuration text.
pub fn from_toml_str(text: &str) -> Result<Settings, ConfigError> {
    let raw: RawConfig = toml::from_str(text)?;
    let defaults = EngineConfig::default();

    let rise_set = raw.rise_set.unwrap_or(defaults.rise_set);
    check_rise_set(&rise_set)?;
    if let Some(loc) = &raw.location {
        check_location(loc)?;
    }

    let engine = EngineConfig {
        ayanamsha: lookup("ayanamsha", raw.ayanamsha.as_deref(), AyanamshaSystem::from_name)?
            .unwrap_or(defaults.ayanamsha),
        transition: lookup("transition", raw.transition.as_deref(), TransitionModel::from_name)?
            .unwrap_or(defaults.transition),
        rise_set,
        month_system: lookup("month_system", raw.month_system.as_deref(), MonthSystem::from_name)?
            .unwrap_or(defaults.month_system),
        include_moon_rise_set: raw.include_moon_rise_set.unwrap_or(defaults.include_moon_rise_set),
        reference: lookup("reference", raw.reference.as_deref(), ReferenceInstant::from_name)?
            .unwrap_or(defaults.reference),
    };
    Ok(Settings {
        engine,
        location: raw.location,
    })
}

/// Read and parse a configuration file.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let settings = from_toml_str(&text)?;
    debug!("loaded config from {}: {:?}", path.display(), settings.engine);
    Ok(settings)
}

/// [`load`] when a path is given, defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(p) => load(p),
        None => Ok(Settings::default()),
    }
}
