//! Degree normalization, DMS formatting, and angle-to-time interpolation.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Days needed to sweep `angle_deg` at a constant `rate_deg_per_day`.
///
/// This is the linear time-from-angle step every transition estimate is
/// built on. A non-positive rate yields `f64::INFINITY`.
pub fn days_to_traverse(angle_deg: f64, rate_deg_per_day: f64) -> f64 {
    if rate_deg_per_day <= 0.0 {
        return f64::INFINITY;
    }
    angle_deg / rate_deg_per_day
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert decimal degrees in [0, 360) to DMS.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = normalize_360(deg);
    let degrees = d.floor();
    let min_total = (d - degrees) * 60.0;
    let minutes = min_total.floor();
    let seconds = (min_total - minutes) * 60.0;
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!(normalize_360(360.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn pm180() {
        assert!((normalize_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_pm180(180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn traverse_tithi_span() {
        // 12° at the mean elongation rate ≈ 0.984 days
        let d = days_to_traverse(12.0, 12.190_749);
        assert!((d - 0.9844).abs() < 1e-3, "days = {d}");
    }

    #[test]
    fn traverse_zero_rate() {
        assert!(days_to_traverse(5.0, 0.0).is_infinite());
    }

    #[test]
    fn dms_basic() {
        let dms = deg_to_dms(13.5125);
        assert_eq!(dms.degrees, 13);
        assert_eq!(dms.minutes, 30);
        assert!((dms.seconds - 45.0).abs() < 1e-6);
        assert_eq!(dms.to_string(), "13°30'45.00\"");
    }
}
