//! Choghadiya: eight named periods of the day and eight of the night.
//!
//! Daytime runs sunrise → sunset and night sunset → next sunrise; each is
//! cut into eight equal parts labeled from a fixed per-weekday sequence.

use serde::Serialize;

use crate::vaar::Vaar;

use self::Choghadiya as C;

/// Auspiciousness class shared by choghadiya labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Good,
    Neutral,
    Bad,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
        }
    }
}

/// The seven choghadiya labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Choghadiya {
    Udveg,
    Chal,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Chal => "Chal",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn quality(self) -> Quality {
        match self {
            Self::Labh | Self::Amrit | Self::Shubh => Quality::Good,
            Self::Chal => Quality::Neutral,
            Self::Udveg | Self::Kaal | Self::Rog => Quality::Bad,
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self.quality(), Quality::Good)
    }
}

/// Daytime sequence, indexed Sunday..Saturday.
pub const DAY_CHOGHADIYA: [[Choghadiya; 8]; 7] = [
    [C::Udveg, C::Chal, C::Labh, C::Amrit, C::Kaal, C::Shubh, C::Rog, C::Udveg],
    [C::Amrit, C::Kaal, C::Shubh, C::Rog, C::Udveg, C::Chal, C::Labh, C::Amrit],
    [C::Rog, C::Udveg, C::Chal, C::Labh, C::Amrit, C::Kaal, C::Shubh, C::Rog],
    [C::Labh, C::Amrit, C::Kaal, C::Shubh, C::Rog, C::Udveg, C::Chal, C::Labh],
    [C::Shubh, C::Rog, C::Udveg, C::Chal, C::Labh, C::Amrit, C::Kaal, C::Shubh],
    [C::Chal, C::Labh, C::Amrit, C::Kaal, C::Shubh, C::Rog, C::Udveg, C::Chal],
    [C::Kaal, C::Shubh, C::Rog, C::Udveg, C::Chal, C::Labh, C::Amrit, C::Kaal],
];

/// Night sequence, indexed by the weekday whose sunset starts the night.
pub const NIGHT_CHOGHADIYA: [[Choghadiya; 8]; 7] = [
    [C::Shubh, C::Amrit, C::Chal, C::Rog, C::Kaal, C::Labh, C::Udveg, C::Shubh],
    [C::Chal, C::Rog, C::Kaal, C::Labh, C::Udveg, C::Shubh, C::Amrit, C::Chal],
    [C::Kaal, C::Labh, C::Udveg, C::Shubh, C::Amrit, C::Chal, C::Rog, C::Kaal],
    [C::Udveg, C::Shubh, C::Amrit, C::Chal, C::Rog, C::Kaal, C::Labh, C::Udveg],
    [C::Amrit, C::Chal, C::Rog, C::Kaal, C::Labh, C::Udveg, C::Shubh, C::Amrit],
    [C::Rog, C::Kaal, C::Labh, C::Udveg, C::Shubh, C::Amrit, C::Chal, C::Rog],
    [C::Labh, C::Udveg, C::Shubh, C::Amrit, C::Chal, C::Rog, C::Kaal, C::Labh],
];

/// Daytime labels for the weekday.
pub const fn day_choghadiya(vaar: Vaar) -> [Choghadiya; 8] {
    DAY_CHOGHADIYA[vaar.index() as usize]
}

/// Night labels following the weekday's sunset.
pub const fn night_choghadiya(vaar: Vaar) -> [Choghadiya; 8] {
    NIGHT_CHOGHADIYA[vaar.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    const CYCLE: [Choghadiya; 7] = [C::Udveg, C::Chal, C::Labh, C::Amrit, C::Kaal, C::Shubh, C::Rog];

    fn pos(c: Choghadiya) -> usize {
        CYCLE.iter().position(|&x| x == c).unwrap_or(usize::MAX)
    }

    #[test]
    fn day_sequence_steps_forward() {
        for row in DAY_CHOGHADIYA {
            for w in row.windows(2) {
                assert_eq!((pos(w[0]) + 1) % 7, pos(w[1]));
            }
            assert_eq!(row[0], row[7]);
        }
    }

    #[test]
    fn night_sequence_steps_back_two() {
        for row in NIGHT_CHOGHADIYA {
            for w in row.windows(2) {
                assert_eq!((pos(w[0]) + 5) % 7, pos(w[1]));
            }
            assert_eq!(row[0], row[7]);
        }
    }

    #[test]
    fn every_row_uses_all_seven() {
        for v in ALL_VAARS {
            for row in [day_choghadiya(v), night_choghadiya(v)] {
                for c in CYCLE {
                    assert!(row[..7].contains(&c), "{v:?} missing {c:?}");
                }
            }
        }
    }

    #[test]
    fn qualities() {
        assert_eq!(C::Amrit.quality(), Quality::Good);
        assert_eq!(C::Chal.quality(), Quality::Neutral);
        assert_eq!(C::Rog.quality(), Quality::Bad);
        assert!(!C::Kaal.is_good());
    }

    #[test]
    fn sunday_starts_with_udveg() {
        assert_eq!(day_choghadiya(Vaar::Ravivaar)[0], C::Udveg);
        assert_eq!(night_choghadiya(Vaar::Ravivaar)[0], C::Shubh);
        assert_eq!(day_choghadiya(Vaar::Somvaar)[0], C::Amrit);
    }
}
