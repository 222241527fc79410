//! Lunar month (masa), season (ritu) and solar half-year (ayana).

use panchang_time::normalize_360;
use serde::{Deserialize, Serialize};

use crate::tithi::Paksha;

/// The 12 lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

/// How the lunar month boundary is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthSystem {
    /// New moon to new moon (south and west India).
    #[default]
    Amanta,
    /// Full moon to full moon (north India): the Krishna paksha belongs to
    /// the following amanta month's name.
    Purnimanta,
}

impl MonthSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amanta => "amanta",
            Self::Purnimanta => "purnimanta",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amanta" => Some(Self::Amanta),
            "purnimanta" => Some(Self::Purnimanta),
            _ => None,
        }
    }
}

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }

    /// The following month.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Month name under `system`, given the amanta month and current paksha.
    pub const fn in_system(self, system: MonthSystem, paksha: Paksha) -> Self {
        match (system, paksha) {
            (MonthSystem::Purnimanta, Paksha::Krishna) => self.next(),
            _ => self,
        }
    }

    /// Season the month falls in.
    pub const fn ritu(self) -> Ritu {
        Ritu::from_index(self.index() / 2)
    }
}

/// Amanta month named by the Sun's sidereal rashi at the new moon that
/// ends it: Mesha (0) → Chaitra.
pub const fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    Masa::from_index(rashi_index)
}

/// The six seasons, two lunar months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

impl Ritu {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Vasanta => "Spring",
            Self::Grishma => "Summer",
            Self::Varsha => "Monsoon",
            Self::Sharad => "Autumn",
            Self::Hemanta => "Pre-winter",
            Self::Shishira => "Winter",
        }
    }

    pub const fn from_index(index: u8) -> Self {
        match index % 6 {
            0 => Self::Vasanta,
            1 => Self::Grishma,
            2 => Self::Varsha,
            3 => Self::Sharad,
            4 => Self::Hemanta,
            _ => Self::Shishira,
        }
    }
}

/// Season of an amanta month.
pub const fn ritu_from_masa(masa: Masa) -> Ritu {
    masa.ritu()
}

/// Solar half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ayana {
    /// Sun moving north: from Makara Sankranti (270°) to Karka Sankranti (90°).
    Uttarayana,
    /// Sun moving south: from Karka Sankranti to Makara Sankranti.
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }
}

/// Ayana from the Sun's sidereal longitude.
pub fn ayana_from_sidereal_longitude(sun_sidereal_deg: f64) -> Ayana {
    let lon = normalize_360(sun_sidereal_deg);
    if (90.0..270.0).contains(&lon) {
        Ayana::Dakshinayana
    } else {
        Ayana::Uttarayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masa_from_rashi() {
        assert_eq!(masa_from_rashi_index(0), Masa::Chaitra);
        assert_eq!(masa_from_rashi_index(6), Masa::Ashvina);
        assert_eq!(masa_from_rashi_index(11), Masa::Phalguna);
    }

    #[test]
    fn ritu_pairs() {
        assert_eq!(Masa::Chaitra.ritu(), Ritu::Vasanta);
        assert_eq!(Masa::Vaishakha.ritu(), Ritu::Vasanta);
        assert_eq!(Masa::Shravana.ritu(), Ritu::Varsha);
        assert_eq!(Masa::Kartika.ritu(), Ritu::Sharad);
        assert_eq!(Masa::Phalguna.ritu(), Ritu::Shishira);
    }

    #[test]
    fn purnimanta_shifts_krishna_paksha() {
        let m = Masa::Ashvina;
        assert_eq!(m.in_system(MonthSystem::Purnimanta, Paksha::Krishna), Masa::Kartika);
        assert_eq!(m.in_system(MonthSystem::Purnimanta, Paksha::Shukla), Masa::Ashvina);
        assert_eq!(m.in_system(MonthSystem::Amanta, Paksha::Krishna), Masa::Ashvina);
        assert_eq!(Masa::Phalguna.next(), Masa::Chaitra);
    }

    #[test]
    fn month_system_names() {
        assert_eq!(MonthSystem::from_name("Purnimanta"), Some(MonthSystem::Purnimanta));
        assert_eq!(MonthSystem::from_name(MonthSystem::Amanta.name()), Some(MonthSystem::Amanta));
        assert_eq!(MonthSystem::from_name("solar"), None);
    }

    #[test]
    fn ayana_boundaries() {
        assert_eq!(ayana_from_sidereal_longitude(0.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(89.9), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(90.0), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(269.9), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(270.0), Ayana::Uttarayana);
    }
}
