//! Yoga: 27 buckets of 13°20′ of the sidereal Sun + Moon sum.

use serde::Serialize;

use crate::classify::{AngularPartition, Segment};

/// Width of one yoga in degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkambha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// False for the nine yogas traditionally avoided for new undertakings.
    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::Vishkambha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

impl AngularPartition for Yoga {
    const COUNT: u8 = 27;

    fn from_index(index: u8) -> Self {
        ALL_YOGAS[(index % 27) as usize]
    }
}

/// Yoga classification of a sidereal longitude sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based index (0..26).
    pub yoga_index: u8,
    pub segment: Segment,
}

/// Classify (Sun + Moon) sidereal longitude, degrees.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let (yoga, segment) = Yoga::classify(sidereal_sum_deg);
    YogaPosition {
        yoga,
        yoga_index: segment.index,
        segment,
    }
}
