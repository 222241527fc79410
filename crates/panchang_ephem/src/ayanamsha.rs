//! Ayanamsha for the sidereal reference systems the engine supports.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and a sidereal zodiac (anchored to fixed stars).
//! Each system is defined by its J2000.0 reference value; the value at any
//! epoch adds the IAU 2006 general precession in longitude.

use panchang_time::{J2000_JD, ut_to_tt_jd};
use serde::{Deserialize, Serialize};

use crate::equatorial::nutation_longitude_arcsec;

/// Mean precession of the equinox in degrees per day (~50.29″/year).
pub const PRECESSION_DAILY_RATE_DEG: f64 = 5028.796_195 / 3600.0 / 36_525.0;

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    #[default]
    Lahiri,
    /// Lahiri anchor measured from the true (nutation-corrected) equinox.
    TrueLahiri,
    /// Krishnamurti Paddhati.
    KP,
    /// B.V. Raman, zero year near 397 CE.
    Raman,
    /// Fagan-Bradley Synetic Vernal Point.
    FaganBradley,
    /// Sri Yukteshwar, "The Holy Science".
    Yukteshwar,
}

const ALL_SYSTEMS: [AyanamshaSystem; 6] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueLahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri | Self::TrueLahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    /// Whether this system is measured from the true equinox.
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueLahiri)
    }

    /// Lower-case identifier used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueLahiri => "true-lahiri",
            Self::KP => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
            Self::Yukteshwar => "yukteshwar",
        }
    }

    /// Look up a system by its [`name`](Self::name), case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        ALL_SYSTEMS.iter().copied().find(|sys| sys.name() == s)
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

impl std::fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
///
/// Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec =
        5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Mean ayanamsha in degrees, `t` in Julian centuries of TT since J2000.0.
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t_centuries)
}

/// Ayanamsha with nutation applied for true-equinox systems.
///
/// Systems measured from the mean equinox ignore `delta_psi_arcsec`.
pub fn ayanamsha_true_deg(system: AyanamshaSystem, t_centuries: f64, delta_psi_arcsec: f64) -> f64 {
    let mean = ayanamsha_mean_deg(system, t_centuries);
    if system.uses_true_equinox() {
        mean + delta_psi_arcsec / 3600.0
    } else {
        mean
    }
}

/// Ayanamsha in degrees at a UT Julian Day.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd_ut: f64) -> f64 {
    let t = (ut_to_tt_jd(jd_ut) - J2000_JD) / 36_525.0;
    ayanamsha_true_deg(system, t, nutation_longitude_arcsec(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        let val = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, 0.0);
        assert!((val - 23.853).abs() < 1e-15, "Lahiri at J2000 = {val}");
    }

    #[test]
    fn precession_one_century() {
        let diff = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, 1.0)
            - ayanamsha_mean_deg(AyanamshaSystem::Lahiri, 0.0);
        assert!((diff - 1.397).abs() < 0.01, "one century drift = {diff}");
    }

    #[test]
    fn lahiri_2024_near_24_19() {
        // 2024-06-21 ≈ 24°11'
        let val = ayanamsha_deg(AyanamshaSystem::Lahiri, 2_460_482.5);
        assert!((val - 24.19).abs() < 0.02, "Lahiri 2024 = {val}");
    }

    #[test]
    fn only_true_lahiri_takes_nutation() {
        let t = 0.25;
        for &sys in AyanamshaSystem::all() {
            let mean = ayanamsha_mean_deg(sys, t);
            let with = ayanamsha_true_deg(sys, t, 17.0);
            if sys.uses_true_equinox() {
                assert!((with - mean - 17.0 / 3600.0).abs() < 1e-12);
            } else {
                assert!((with - mean).abs() < 1e-15, "{sys:?} applied nutation");
            }
        }
    }

    #[test]
    fn name_roundtrip() {
        for &sys in AyanamshaSystem::all() {
            assert_eq!(AyanamshaSystem::from_name(sys.name()), Some(sys));
        }
        assert_eq!(
            AyanamshaSystem::from_name(" Fagan-Bradley "),
            Some(AyanamshaSystem::FaganBradley)
        );
        assert_eq!(AyanamshaSystem::from_name("unknown"), None);
    }

    #[test]
    fn daily_rate_matches_polynomial() {
        let per_day = general_precession_longitude_deg(1.0 / 36_525.0);
        assert!((per_day - PRECESSION_DAILY_RATE_DEG).abs() < 1e-12);
    }
}
