//! Vaar (weekday) and its ruling graha.

use panchang_time::weekday_index_from_jd;
use serde::Serialize;

use crate::graha::Graha;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha, which is also the lord of the first hora after sunrise.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }

    /// Weekday from a 0 = Sunday index (taken mod 7).
    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }
}

/// Weekday of the civil day containing a Julian Day, on the UT calendar.
///
/// Callers wanting the local weekday pass a JD shifted by the UTC offset, or
/// use the civil date directly.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    Vaar::from_index(weekday_index_from_jd(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_is_saturday() {
        assert_eq!(vaar_from_jd(2_451_545.0), Vaar::Shanivaar);
    }

    #[test]
    fn lords_follow_weekday() {
        assert_eq!(Vaar::Mangalvaar.lord(), Graha::Mangal);
        assert_eq!(Vaar::from_index(9), Vaar::Mangalvaar);
    }

    #[test]
    fn index_roundtrip() {
        for v in ALL_VAARS {
            assert_eq!(Vaar::from_index(v.index()), v);
        }
    }
}
