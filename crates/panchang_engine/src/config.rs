//! Engine configuration.

use panchang_ephem::{AyanamshaSystem, RateModel};
use panchang_vedic_base::{MonthSystem, RiseSetConfig};
use serde::{Deserialize, Serialize};

/// How element start/end times are derived from the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionModel {
    /// Linear projection at the long-run mean motion of each body.
    MeanRate,
    /// Linear projection at the instantaneous motion.
    TrueRate,
    /// True-rate projection followed by Newton steps against the ephemeris.
    #[default]
    Refined,
}

const ALL_MODELS: [TransitionModel; 3] = [
    TransitionModel::MeanRate,
    TransitionModel::TrueRate,
    TransitionModel::Refined,
];

impl TransitionModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MeanRate => "mean-rate",
            Self::TrueRate => "true-rate",
            Self::Refined => "refined",
        }
    }

    /// Look up a model by its [`name`](Self::name), case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        ALL_MODELS.iter().copied().find(|m| m.name() == s)
    }

    /// Rate model for the reference snapshot.
    pub const fn rate_model(self) -> RateModel {
        match self {
            Self::MeanRate => RateModel::Mean,
            Self::TrueRate | Self::Refined => RateModel::True,
        }
    }

    /// Typical element boundary error in minutes, for the accuracy tag.
    ///
    /// Mean rates ignore the Moon's 11-15 deg/day swing, which shifts a
    /// boundary by hours near the ends of a long tithi.
    pub const fn typical_error_minutes(self) -> f64 {
        match self {
            Self::MeanRate => 180.0,
            Self::TrueRate => 20.0,
            Self::Refined => 5.0,
        }
    }
}

/// Instant of the civil day at which the five limbs are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceInstant {
    /// Local sunrise (udaya); local noon when the Sun does not rise.
    #[default]
    Sunrise,
    /// Local apparent noon.
    LocalNoon,
}

impl ReferenceInstant {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::LocalNoon => "local-noon",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunrise" => Some(Self::Sunrise),
            "local-noon" | "noon" => Some(Self::LocalNoon),
            _ => None,
        }
    }
}

/// Everything that changes how a panchang is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineConfig {
    pub ayanamsha: AyanamshaSystem,
    pub transition: TransitionModel,
    pub rise_set: RiseSetConfig,
    pub month_system: MonthSystem,
    /// Compute moonrise and moonset.
    pub include_moon_rise_set: bool,
    pub reference: ReferenceInstant,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            transition: TransitionModel::Refined,
            rise_set: RiseSetConfig::default(),
            month_system: MonthSystem::Amanta,
            include_moon_rise_set: true,
            reference: ReferenceInstant::Sunrise,
        }
    }
}

impl EngineConfig {
    pub fn with_ayanamsha(mut self, ayanamsha: AyanamshaSystem) -> Self {
        self.ayanamsha = ayanamsha;
        self
    }

    pub fn with_transition(mut self, transition: TransitionModel) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_month_system(mut self, month_system: MonthSystem) -> Self {
        self.month_system = month_system;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.transition, TransitionModel::Refined);
        assert_eq!(c.month_system, MonthSystem::Amanta);
        assert_eq!(c.reference, ReferenceInstant::Sunrise);
        assert!(c.include_moon_rise_set);
    }

    #[test]
    fn model_names_round_trip() {
        for m in ALL_MODELS {
            assert_eq!(TransitionModel::from_name(m.name()), Some(m));
        }
        assert_eq!(TransitionModel::from_name(" Refined "), Some(TransitionModel::Refined));
        assert_eq!(TransitionModel::from_name("cubic"), None);
    }

    #[test]
    fn mean_model_uses_mean_rates() {
        assert_eq!(TransitionModel::MeanRate.rate_model(), RateModel::Mean);
        assert_eq!(TransitionModel::Refined.rate_model(), RateModel::True);
    }

    #[test]
    fn builders_touch_one_field() {
        let c = EngineConfig::default()
            .with_ayanamsha(AyanamshaSystem::Raman)
            .with_month_system(MonthSystem::Purnimanta);
        assert_eq!(c.ayanamsha, AyanamshaSystem::Raman);
        assert_eq!(c.month_system, MonthSystem::Purnimanta);
        assert_eq!(c.transition, TransitionModel::Refined);
    }

    #[test]
    fn reference_names() {
        assert_eq!(ReferenceInstant::from_name("noon"), Some(ReferenceInstant::LocalNoon));
        assert_eq!(ReferenceInstant::from_name("sunrise"), Some(ReferenceInstant::Sunrise));
        assert_eq!(ReferenceInstant::from_name("dusk"), None);
    }
}
