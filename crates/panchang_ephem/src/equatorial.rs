//! Obliquity, nutation in longitude, and ecliptic → equatorial rotation.
//!
//! Arguments named `t` are Julian centuries of TT since J2000.0.

use panchang_time::normalize_360;

/// Mean obliquity of the ecliptic in degrees (Meeus eq. 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_167 * t - 1.639e-7 * t * t + 5.036e-7 * t * t * t
}

/// Longitude of the Moon's mean ascending node in degrees.
pub(crate) fn lunar_node_deg(t: f64) -> f64 {
    125.044_52 - 1934.136_261 * t
}

/// Nutation in longitude Δψ in arcseconds, four-term series (Meeus ch. 22).
///
/// Good to about 0.5″, far below the precision of the position series.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = lunar_node_deg(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Obliquity used with apparent positions: mean obliquity plus the dominant
/// nutation-in-obliquity term.
pub fn apparent_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + 0.002_56 * lunar_node_deg(t).to_radians().cos()
}

/// Right ascension and declination, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 360).
    pub ra_deg: f64,
    /// Declination in [-90, 90].
    pub dec_deg: f64,
}

/// Rotate ecliptic longitude/latitude into right ascension/declination.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();

    let ra = (sl * ce - (sb / cb) * se).atan2(cl);
    let dec = (sb * ce + cb * se * sl).clamp(-1.0, 1.0).asin();
    EquatorialCoords {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn nutation_meeus_22a() {
        // 1987 Apr 10 0h TD: Δψ = -3.788″ (full theory)
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_longitude_arcsec(t);
        assert!((dpsi + 3.788).abs() < 0.5, "Δψ = {dpsi}");
    }

    #[test]
    fn equinox_point_maps_to_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(eq.ra_deg.abs() < 1e-12 || (eq.ra_deg - 360.0).abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn solstice_point_has_max_declination() {
        let eq = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((eq.ra_deg - 90.0).abs() < 1e-9);
        assert!((eq.dec_deg - 23.44).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let eq = ecliptic_to_equatorial(113.215_630, 6.684_170, 23.439_291_1);
        assert!((eq.ra_deg - 116.328_942).abs() < 1e-5, "ra = {}", eq.ra_deg);
        assert!((eq.dec_deg - 28.026_183).abs() < 1e-5, "dec = {}", eq.dec_deg);
    }
}
