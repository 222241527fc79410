//! Tithi (lunar day): 30 buckets of 12° of Moon − Sun elongation.
//!
//! Tithis 1–15 fall in the Shukla (waxing) paksha and end at Purnima;
//! 16–30 fall in the Krishna (waning) paksha and end at Amavasya.

use serde::Serialize;

use crate::classify::{AngularPartition, Segment};

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing fortnight, new moon to full moon.
    Shukla,
    /// Waning fortnight, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Fivefold grouping of tithis by their number within the paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TithiCategory {
    /// 1, 6, 11: joyful.
    Nanda,
    /// 2, 7, 12: auspicious for beginnings.
    Bhadra,
    /// 3, 8, 13: victorious.
    Jaya,
    /// 4, 9, 14: empty, avoided for new work.
    Rikta,
    /// 5, 10, 15 and Amavasya: full.
    Purna,
}

impl TithiCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanda => "Nanda",
            Self::Bhadra => "Bhadra",
            Self::Jaya => "Jaya",
            Self::Rikta => "Rikta",
            Self::Purna => "Purna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of the 14 tithis shared by both pakshas.
const PAKSHA_TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Presiding deity of tithis 1–14 within either paksha.
const TITHI_LORDS: [&str; 14] = [
    "Agni",
    "Brahma",
    "Gauri",
    "Ganesha",
    "Naga",
    "Kartikeya",
    "Surya",
    "Rudra",
    "Durga",
    "Yama",
    "Vishvedeva",
    "Vishnu",
    "Kamadeva",
    "Shiva",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada = 0 .. Amavasya = 29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based ordinal (1..=30).
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// Fortnight this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based number within the paksha (1..=15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Traditional name without the paksha ("Dwitiya", "Purnima").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_TITHI_NAMES[(self.index() % 15) as usize],
        }
    }

    /// Name qualified by the paksha ("Shukla Dwitiya", "Purnima").
    pub fn full_name(self) -> String {
        match self {
            Self::Purnima | Self::Amavasya => self.name().to_string(),
            _ => format!("{} {}", self.paksha().name(), self.name()),
        }
    }

    /// Presiding deity.
    pub const fn lord(self) -> &'static str {
        match self {
            Self::Purnima => "Chandra",
            Self::Amavasya => "Pitru",
            _ => TITHI_LORDS[(self.index() % 15) as usize],
        }
    }

    /// Nanda/Bhadra/Jaya/Rikta/Purna grouping.
    pub const fn category(self) -> TithiCategory {
        match (self.number_in_paksha() - 1) % 5 {
            0 => TithiCategory::Nanda,
            1 => TithiCategory::Bhadra,
            2 => TithiCategory::Jaya,
            3 => TithiCategory::Rikta,
            _ => TithiCategory::Purna,
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

impl AngularPartition for Tithi {
    const COUNT: u8 = 30;

    fn from_index(index: u8) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }
}

/// Tithi classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha (1..15).
    pub tithi_in_paksha: u8,
    pub segment: Segment,
}

/// Classify a Moon − Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let (tithi, segment) = Tithi::classify(elongation_deg);
    TithiPosition {
        tithi,
        tithi_index: tithi.index(),
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.number_in_paksha(),
        segment,
    }
}
