//! Hora: 24 planetary hours, 12 from sunrise to sunset and 12 from sunset
//! to the next sunrise.
//!
//! The first hora of a day belongs to the weekday lord; each following hora
//! steps through the Chaldean order.

use crate::graha::{CHALDEAN_ORDER, Graha};
use crate::vaar::Vaar;

/// Horas per civil day (12 day + 12 night).
pub const HORAS_PER_DAY: usize = 24;

/// Hora lords from sunrise, for the weekday.
pub fn hora_sequence(vaar: Vaar) -> [Graha; HORAS_PER_DAY] {
    // weekday lords are always among the seven Chaldean grahas
    let start = vaar.lord().chaldean_index().unwrap_or(0) as usize;
    std::array::from_fn(|i| CHALDEAN_ORDER[(start + i) % 7])
}

/// Lord of hora `index` (0-based from sunrise).
pub fn hora_lord(vaar: Vaar, index: usize) -> Graha {
    hora_sequence(vaar)[index % HORAS_PER_DAY]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn first_hora_is_weekday_lord() {
        for v in ALL_VAARS {
            assert_eq!(hora_sequence(v)[0], v.lord(), "{v:?}");
        }
    }

    #[test]
    fn sunday_sequence() {
        let seq = hora_sequence(Vaar::Ravivaar);
        assert_eq!(
            &seq[..7],
            &[
                Graha::Surya,
                Graha::Shukra,
                Graha::Buddh,
                Graha::Chandra,
                Graha::Shani,
                Graha::Guru,
                Graha::Mangal
            ]
        );
    }

    #[test]
    fn twenty_fifth_hora_is_next_weekday_lord() {
        for v in ALL_VAARS {
            let next = Vaar::from_index(v.index() + 1);
            let seq = hora_sequence(v);
            let i = (CHALDEAN_ORDER.iter().position(|&g| g == seq[23]).unwrap_or(0) + 1) % 7;
            assert_eq!(CHALDEAN_ORDER[i], next.lord(), "{v:?}");
        }
    }

    #[test]
    fn lord_wraps() {
        assert_eq!(hora_lord(Vaar::Ravivaar, 24), Graha::Surya);
        assert_eq!(hora_lord(Vaar::Ravivaar, 12), hora_sequence(Vaar::Ravivaar)[12]);
    }
}
