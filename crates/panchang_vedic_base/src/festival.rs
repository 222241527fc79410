//! Festival rule table.
//!
//! Each rule is a predicate over the day's sunrise tithi, amanta month,
//! weekday, Gregorian date and any sankranti; matching rules yield
//! [`Festival`] records. Ekadashi, Purnima and Amavasya take month-specific
//! names. Month-bound rules do not fire in an adhika (intercalary) month.

use serde::Serialize;

use crate::masa::Masa;
use crate::rashi::Rashi;
use crate::tithi::{Paksha, Tithi};
use crate::vaar::Vaar;

/// Kind of observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FestivalCategory {
    Major,
    Ekadashi,
    Purnima,
    Amavasya,
    Sankranti,
    Vrat,
    Civil,
}

/// A festival or observance falling on a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Festival {
    pub name: String,
    pub category: FestivalCategory,
    pub observances: &'static [&'static str],
    pub restrictions: &'static [&'static str],
}

/// Everything the rules look at for one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestivalContext {
    /// Tithi prevailing at sunrise.
    pub tithi: Tithi,
    /// Amanta lunar month.
    pub masa: Masa,
    /// Whether the lunar month is adhika.
    pub adhika: bool,
    pub vaar: Vaar,
    /// Gregorian month, 1..=12.
    pub month: u32,
    /// Gregorian day of month.
    pub day: u32,
    /// Rashi the Sun entered since the previous day, if any.
    pub sankranti: Option<Rashi>,
}

/// What makes a rule fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// A tithi in a specific amanta month.
    Tithi { masa: Masa, tithi: Tithi },
    /// A tithi in every month.
    MonthlyTithi(Tithi),
    /// A fixed Gregorian date.
    Gregorian { month: u32, day: u32 },
    /// The Sun entering a rashi.
    Sankranti(Rashi),
    /// A tithi falling on a weekday.
    WeekdayTithi { vaar: Vaar, tithi: Tithi },
}

impl Trigger {
    fn matches(&self, ctx: &FestivalContext) -> bool {
        match *self {
            Self::Tithi { masa, tithi } => !ctx.adhika && ctx.masa == masa && ctx.tithi == tithi,
            Self::MonthlyTithi(tithi) => ctx.tithi == tithi,
            Self::Gregorian { month, day } => ctx.month == month && ctx.day == day,
            Self::Sankranti(rashi) => ctx.sankranti == Some(rashi),
            Self::WeekdayTithi { vaar, tithi } => ctx.vaar == vaar && ctx.tithi == tithi,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestivalRule {
    pub trigger: Trigger,
    pub name: &'static str,
    pub category: FestivalCategory,
    pub observances: &'static [&'static str],
    pub restrictions: &'static [&'static str],
}

impl FestivalRule {
    fn festival(&self) -> Festival {
        Festival {
            name: self.name.to_string(),
            category: self.category,
            observances: self.observances,
            restrictions: self.restrictions,
        }
    }
}

const FAST: &[&str] = &["Fasting"];
const NO_GRAINS: &[&str] = &["Grains and beans"];
const PUJA: &[&str] = &["Puja"];
const NONE: &[&str] = &[];

const fn tithi_rule(
    masa: Masa,
    tithi: Tithi,
    name: &'static str,
    observances: &'static [&'static str],
) -> FestivalRule {
    FestivalRule {
        trigger: Trigger::Tithi { masa, tithi },
        name,
        category: FestivalCategory::Major,
        observances,
        restrictions: NONE,
    }
}

const fn vrat(trigger: Trigger, name: &'static str) -> FestivalRule {
    FestivalRule {
        trigger,
        name,
        category: FestivalCategory::Vrat,
        observances: FAST,
        restrictions: NONE,
    }
}

const fn civil(month: u32, day: u32, name: &'static str) -> FestivalRule {
    FestivalRule {
        trigger: Trigger::Gregorian { month, day },
        name,
        category: FestivalCategory::Civil,
        observances: NONE,
        restrictions: NONE,
    }
}

/// Named festivals other than Ekadashi, Purnima, Amavasya and sankrantis.
pub const FESTIVAL_RULES: &[FestivalRule] = &[
    tithi_rule(Masa::Chaitra, Tithi::ShuklaPratipada, "Ugadi / Gudi Padwa", PUJA),
    tithi_rule(Masa::Chaitra, Tithi::ShuklaNavami, "Rama Navami", FAST),
    tithi_rule(Masa::Vaishakha, Tithi::ShuklaTritiya, "Akshaya Tritiya", PUJA),
    tithi_rule(Masa::Ashadha, Tithi::ShuklaDwitiya, "Rath Yatra", PUJA),
    tithi_rule(Masa::Shravana, Tithi::ShuklaPanchami, "Nag Panchami", PUJA),
    tithi_rule(Masa::Shravana, Tithi::KrishnaAshtami, "Krishna Janmashtami", FAST),
    tithi_rule(Masa::Bhadrapada, Tithi::ShuklaChaturthi, "Ganesh Chaturthi", PUJA),
    tithi_rule(Masa::Ashvina, Tithi::ShuklaPratipada, "Navaratri begins", PUJA),
    tithi_rule(Masa::Ashvina, Tithi::ShuklaDashami, "Vijayadashami", PUJA),
    tithi_rule(Masa::Ashvina, Tithi::KrishnaTrayodashi, "Dhanteras", PUJA),
    tithi_rule(Masa::Ashvina, Tithi::KrishnaChaturdashi, "Naraka Chaturdashi", PUJA),
    tithi_rule(Masa::Kartika, Tithi::ShuklaPratipada, "Govardhan Puja", PUJA),
    tithi_rule(Masa::Kartika, Tithi::ShuklaDwitiya, "Bhai Dooj", PUJA),
    tithi_rule(Masa::Magha, Tithi::ShuklaPanchami, "Vasant Panchami", PUJA),
    tithi_rule(Masa::Magha, Tithi::KrishnaChaturdashi, "Maha Shivaratri", FAST),
    tithi_rule(Masa::Phalguna, Tithi::KrishnaPratipada, "Holi", NONE),
    vrat(Trigger::MonthlyTithi(Tithi::KrishnaChaturthi), "Sankashti Chaturthi"),
    vrat(Trigger::MonthlyTithi(Tithi::ShuklaTrayodashi), "Pradosh Vrat"),
    vrat(Trigger::MonthlyTithi(Tithi::KrishnaTrayodashi), "Pradosh Vrat"),
    vrat(Trigger::MonthlyTithi(Tithi::KrishnaChaturdashi), "Masik Shivaratri"),
    vrat(
        Trigger::WeekdayTithi { vaar: Vaar::Somvaar, tithi: Tithi::Amavasya },
        "Somvati Amavasya",
    ),
    vrat(
        Trigger::WeekdayTithi { vaar: Vaar::Shanivaar, tithi: Tithi::Amavasya },
        "Shani Amavasya",
    ),
    civil(1, 26, "Republic Day"),
    civil(8, 15, "Independence Day"),
    civil(10, 2, "Gandhi Jayanti"),
];

/// Ekadashi names by amanta month: (Shukla, Krishna).
const EKADASHI_NAMES: [(&str, &str); 12] = [
    ("Kamada", "Varuthini"),
    ("Mohini", "Apara"),
    ("Nirjala", "Yogini"),
    ("Devshayani", "Kamika"),
    ("Shravana Putrada", "Aja"),
    ("Parsva", "Indira"),
    ("Papankusha", "Rama"),
    ("Prabodhini", "Utpanna"),
    ("Mokshada", "Saphala"),
    ("Pausha Putrada", "Shattila"),
    ("Jaya", "Vijaya"),
    ("Amalaki", "Papmochani"),
];

/// Ekadashi names in an adhika month: (Shukla, Krishna).
const ADHIKA_EKADASHI_NAMES: (&str, &str) = ("Padmini", "Parama");

const PURNIMA_NAMES: [&str; 12] = [
    "Hanuman Jayanti",
    "Buddha Purnima",
    "Vat Purnima",
    "Guru Purnima",
    "Raksha Bandhan",
    "Bhadrapada Purnima",
    "Sharad Purnima",
    "Kartik Purnima",
    "Dattatreya Jayanti",
    "Shakambhari Purnima",
    "Magha Purnima",
    "Holika Dahan",
];

const AMAVASYA_NAMES: [&str; 12] = [
    "Chaitra Amavasya",
    "Shani Jayanti",
    "Jyeshtha Amavasya",
    "Hariyali Amavasya",
    "Pithori Amavasya",
    "Mahalaya Amavasya",
    "Diwali",
    "Kartika Amavasya",
    "Margashirsha Amavasya",
    "Mauni Amavasya",
    "Magha Amavasya",
    "Phalguna Amavasya",
];

/// Month-specific name of the day's Ekadashi, Purnima or Amavasya.
pub fn lunar_day_festival(ctx: &FestivalContext) -> Option<Festival> {
    let m = ctx.masa.index() as usize;
    let (name, category, observances, restrictions) = match ctx.tithi {
        Tithi::ShuklaEkadashi | Tithi::KrishnaEkadashi => {
            let (shukla, krishna) = if ctx.adhika {
                ADHIKA_EKADASHI_NAMES
            } else {
                EKADASHI_NAMES[m]
            };
            let base = match ctx.tithi.paksha() {
                Paksha::Shukla => shukla,
                Paksha::Krishna => krishna,
            };
            (format!("{base} Ekadashi"), FestivalCategory::Ekadashi, FAST, NO_GRAINS)
        }
        Tithi::Purnima => (PURNIMA_NAMES[m].to_string(), FestivalCategory::Purnima, FAST, NONE),
        Tithi::Amavasya => (AMAVASYA_NAMES[m].to_string(), FestivalCategory::Amavasya, PUJA, NONE),
        _ => return None,
    };
    Some(Festival {
        name,
        category,
        observances,
        restrictions,
    })
}

/// Sankranti record for the Sun entering `rashi`.
pub fn sankranti_festival(rashi: Rashi) -> Festival {
    let name = match rashi {
        Rashi::Makara => "Makar Sankranti".to_string(),
        Rashi::Mesha => "Mesha Sankranti".to_string(),
        r => format!("{} Sankranti", r.name()),
    };
    Festival {
        name,
        category: FestivalCategory::Sankranti,
        observances: &["Holy bath", "Charity"],
        restrictions: NONE,
    }
}

/// All festivals for a day: lunar-day names, sankranti, then table rules.
pub fn festivals_for(ctx: &FestivalContext) -> Vec<Festival> {
    let mut out = Vec::new();
    out.extend(lunar_day_festival(ctx));
    out.extend(ctx.sankranti.map(sankranti_festival));
    out.extend(
        FESTIVAL_RULES
            .iter()
            .filter(|r| r.trigger.matches(ctx))
            .map(FestivalRule::festival),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(masa: Masa, tithi: Tithi) -> FestivalContext {
        FestivalContext {
            tithi,
            masa,
            adhika: false,
            vaar: Vaar::Budhvaar,
            month: 6,
            day: 1,
            sankranti: None,
        }
    }

    fn names(ctx: &FestivalContext) -> Vec<String> {
        festivals_for(ctx).into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn ekadashi_named_by_month_and_paksha() {
        assert_eq!(names(&ctx(Masa::Jyeshtha, Tithi::ShuklaEkadashi)), ["Nirjala Ekadashi"]);
        assert_eq!(names(&ctx(Masa::Kartika, Tithi::KrishnaEkadashi)), ["Utpanna Ekadashi"]);
    }

    #[test]
    fn adhika_month_suppresses_month_rules() {
        let mut c = ctx(Masa::Shravana, Tithi::KrishnaAshtami);
        assert!(names(&c).contains(&"Krishna Janmashtami".to_string()));
        c.adhika = true;
        assert!(names(&c).is_empty());
        c.tithi = Tithi::ShuklaEkadashi;
        assert_eq!(names(&c), ["Padmini Ekadashi"]);
    }

    #[test]
    fn diwali_on_ashvina_amavasya() {
        let f = festivals_for(&ctx(Masa::Ashvina, Tithi::Amavasya));
        assert_eq!(f[0].name, "Diwali");
        assert_eq!(f[0].category, FestivalCategory::Amavasya);
    }

    #[test]
    fn purnima_names() {
        assert_eq!(names(&ctx(Masa::Ashadha, Tithi::Purnima)), ["Guru Purnima"]);
    }

    #[test]
    fn sankranti_detected() {
        let mut c = ctx(Masa::Pausha, Tithi::ShuklaTritiya);
        c.sankranti = Some(Rashi::Makara);
        assert_eq!(names(&c), ["Makar Sankranti"]);
        c.sankranti = Some(Rashi::Kumbha);
        assert_eq!(names(&c), ["Kumbha Sankranti"]);
    }

    #[test]
    fn weekday_and_gregorian_rules() {
        let mut c = ctx(Masa::Magha, Tithi::Amavasya);
        c.vaar = Vaar::Somvaar;
        c.month = 1;
        c.day = 26;
        let n = names(&c);
        assert!(n.contains(&"Magha Amavasya".to_string()));
        assert!(n.contains(&"Somvati Amavasya".to_string()));
        assert!(n.contains(&"Republic Day".to_string()));
    }

    #[test]
    fn monthly_vrats() {
        let n = names(&ctx(Masa::Magha, Tithi::KrishnaChaturdashi));
        assert_eq!(n, ["Maha Shivaratri", "Masik Shivaratri"]);
    }

    #[test]
    fn ordinary_day_is_empty() {
        assert!(festivals_for(&ctx(Masa::Jyeshtha, Tithi::ShuklaSaptami)).is_empty());
    }
}
