//! Wall-clock projection onto a computed day.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use panchang_vedic_base::Quality;

use crate::panchang_types::{ChoghadiyaSlot, HoraSlot, MuhurtaWindow, PanchangResult};

/// What is in effect at an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPeriod {
    pub choghadiya: Option<ChoghadiyaSlot>,
    pub hora: Option<HoraSlot>,
    /// Every named window containing the instant.
    pub active: Vec<MuhurtaWindow>,
}

impl CurrentPeriod {
    /// Any inauspicious window is active.
    pub fn inauspicious(&self) -> bool {
        self.active.iter().any(|w| !w.auspicious)
    }
}

/// Choghadiya, hora and named windows containing `instant`.
///
/// Instants outside the day's sunrise-to-next-sunrise span yield no
/// choghadiya or hora.
pub fn current_period<Z: TimeZone>(result: &PanchangResult, instant: &DateTime<Z>) -> CurrentPeriod {
    CurrentPeriod {
        choghadiya: result.choghadiya.iter().find(|c| c.contains(instant)).cloned(),
        hora: result.hora.iter().find(|h| h.contains(instant)).cloned(),
        active: result
            .muhurta_windows
            .iter()
            .filter(|w| w.contains(instant))
            .cloned()
            .collect(),
    }
}

/// A good choghadiya with no inauspicious window in effect.
pub fn is_good_time<Z: TimeZone>(result: &PanchangResult, instant: &DateTime<Z>) -> bool {
    let period = current_period(result, instant);
    let good = period
        .choghadiya
        .as_ref()
        .is_some_and(|c| c.quality == Quality::Good);
    good && !period.inauspicious()
}
