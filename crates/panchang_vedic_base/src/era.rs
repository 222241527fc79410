//! Era labels: Vikram and Shaka Samvat, and the 60-year samvatsara cycle.
//!
//! All three turn over at the start of the amanta lunar year (Chaitra
//! Shukla Pratipada, in March or April), not on 1 January.

use serde::Serialize;

use crate::masa::Masa;

/// CE 1987 = Prabhava (order 1).
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramoda",
    "Prajapati",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhatri",
    "Ishvara",
    "Bahudhanya",
    "Pramathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Subhanu",
    "Tarana",
    "Parthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikriti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrit",
    "Shobhakrit",
    "Krodhi",
    "Vishvavasu",
    "Parabhava",
    "Plavanga",
    "Kilaka",
    "Saumya",
    "Sadharana",
    "Virodhikrit",
    "Paridhavi",
    "Pramadi",
    "Ananda",
    "Rakshasa",
    "Nala",
    "Pingala",
    "Kalayukti",
    "Siddharthi",
    "Raudra",
    "Durmati",
    "Dundubhi",
    "Rudhirodgari",
    "Raktakshi",
    "Krodhana",
    "Akshaya",
];

/// A year of the 60-year Jovian cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Samvatsara(u8);

impl Samvatsara {
    /// Samvatsara at a 0-based cycle position (taken mod 60).
    pub const fn from_index(index: u8) -> Self {
        Self(index % 60)
    }

    /// 0-based position (Prabhava = 0).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based order in the cycle (1..=60).
    pub const fn order(self) -> u8 {
        self.0 + 1
    }

    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self.0 as usize]
    }
}

/// Samvatsara of the lunar year that began in CE year `ce_year`.
pub fn samvatsara_from_year(ce_year: i32) -> Samvatsara {
    Samvatsara::from_index((ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8)
}

/// Whether the amanta lunar year has already begun in the Gregorian year,
/// given the current Gregorian month (1..=12) and amanta month.
///
/// Chaitra through Margashirsha seen from March onward belong to the year
/// that started this spring; Pausha, Magha and Phalguna only do so late in
/// the Gregorian year.
pub const fn lunar_year_begun(gregorian_month: u32, masa: Masa) -> bool {
    if masa.index() <= Masa::Margashirsha.index() {
        gregorian_month >= 3
    } else {
        gregorian_month >= 10
    }
}

/// Vikram Samvat year.
pub const fn vikram_samvat(gregorian_year: i32, year_begun: bool) -> i32 {
    if year_begun {
        gregorian_year + 57
    } else {
        gregorian_year + 56
    }
}

/// Shaka Samvat year.
pub const fn shaka_samvat(gregorian_year: i32, year_begun: bool) -> i32 {
    if year_begun {
        gregorian_year - 78
    } else {
        gregorian_year - 79
    }
}

/// CE year in which the current lunar year began.
pub const fn lunar_year_start_ce(gregorian_year: i32, year_begun: bool) -> i32 {
    if year_begun {
        gregorian_year
    } else {
        gregorian_year - 1
    }
}
