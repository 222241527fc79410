//! Rashi (zodiac sign): 12 buckets of 30° of sidereal longitude.

use panchang_time::{Dms, deg_to_dms};
use serde::Serialize;

use crate::classify::{AngularPartition, Segment};
use crate::graha::Graha;

/// Sidereal zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Index order matches [`Rashi::index`].
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Aries, Taurus, ...
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Zero-based position, Mesha = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Planetary lord of the sign.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// Rashi from a 0-based index (taken mod 12).
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashis in zodiacal order from Mesha.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl AngularPartition for Rashi {
    const COUNT: u8 = 12;

    fn from_index(index: u8) -> Self {
        Rashi::from_index(index)
    }
}

/// A sidereal longitude resolved to its rashi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// Zero-based position, Mesha = 0.
    pub rashi_index: u8,
    /// Same, as degrees/minutes/seconds.
    pub dms: Dms,
    /// Degrees elapsed in the rashi.
    pub degrees_in_rashi: f64,
    pub segment: Segment,
}

/// Rashi for a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let (rashi, segment) = <Rashi as AngularPartition>::classify(sidereal_lon_deg);
    RashiPosition {
        rashi,
        rashi_index: segment.index,
        dms: deg_to_dms(segment.degrees_in),
        degrees_in_rashi: segment.degrees_in,
        segment,
    }
}
