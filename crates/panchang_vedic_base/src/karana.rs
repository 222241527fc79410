//! Karana (half-tithi): 60 buckets of 6° of elongation named from 11 karanas.
//!
//! Seven movable karanas cycle eight times through half-tithis 1..=56. Four
//! fixed karanas occupy the remaining slots: Kimstughna the first half of
//! Shukla Pratipada, Shakuni the second half of Krishna Chaturdashi, and
//! Chatushpada and Naga the two halves of Amavasya.

use serde::Serialize;

use crate::classify::{Segment, classify};

/// Width of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Half-tithis in a synodic month.
pub const KARANA_SLOTS: u8 = 60;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The 7 movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// 1-based ordinal: movable 1..=7, then Shakuni 8, Chatushpada 9,
    /// Naga 10, Kimstughna 11.
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Whether this karana occurs only once per synodic month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    /// Vishti (Bhadra) is the one movable karana avoided for new work.
    pub const fn is_auspicious(self) -> bool {
        !matches!(self, Self::Vishti)
    }

    /// Karana occupying half-tithi slot `k` (0..60).
    pub const fn from_slot(k: u8) -> Self {
        match k % KARANA_SLOTS {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            k => MOVABLE_KARANAS[((k - 1) % 7) as usize],
        }
    }
}

/// Karana classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based slot within the synodic month (0..59).
    pub karana_index: u8,
    pub segment: Segment,
}

/// Classify a Moon − Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let segment = classify(elongation_deg, KARANA_SEGMENT_DEG, KARANA_SLOTS);
    KaranaPosition {
        karana: Karana::from_slot(segment.index),
        karana_index: segment.index,
        segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_slots() {
        assert_eq!(karana_from_elongation(3.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(345.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(350.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(357.0).karana, Karana::Naga);
    }

    #[test]
    fn movable_cycle_starts_at_second_half_of_pratipada() {
        assert_eq!(karana_from_elongation(7.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(13.0).karana, Karana::Balava);
        // slot 7 → Vishti, slot 8 → Bava again
        assert_eq!(Karana::from_slot(7), Karana::Vishti);
        assert_eq!(Karana::from_slot(8), Karana::Bava);
        assert_eq!(Karana::from_slot(56), Karana::Vishti);
    }

    #[test]
    fn each_fixed_karana_occurs_once() {
        for fixed in [
            Karana::Shakuni,
            Karana::Chatushpada,
            Karana::Naga,
            Karana::Kimstughna,
        ] {
            let n = (0..KARANA_SLOTS).filter(|&k| Karana::from_slot(k) == fixed).count();
            assert_eq!(n, 1, "{fixed:?}");
        }
    }

    #[test]
    fn movable_karanas_occur_eight_times() {
        for m in MOVABLE_KARANAS {
            let n = (0..KARANA_SLOTS).filter(|&k| Karana::from_slot(k) == m).count();
            assert_eq!(n, 8, "{m:?}");
        }
    }

    #[test]
    fn ordinals_in_range() {
        for k in 0..KARANA_SLOTS {
            let o = Karana::from_slot(k).ordinal();
            assert!((1..=11).contains(&o));
        }
        assert_eq!(Karana::Kimstughna.ordinal(), 11);
        assert_eq!(Karana::Shakuni.ordinal(), 8);
    }
}
