//! Generic angular partition: which bucket an angle falls in and how far
//! through it.
//!
//! Tithi, Nakshatra, Yoga, Karana and Rashi all divide the circle into
//! equal buckets; they differ only in width, count and naming. The element
//! modules implement [`AngularPartition`] and share [`classify`].

use panchang_time::normalize_360;
use serde::Serialize;

/// Position of an angle within one bucket of an equal partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// 0-based bucket index.
    pub index: u8,
    /// Number of buckets in the partition.
    pub count: u8,
    /// Bucket width in degrees.
    pub width_deg: f64,
    /// Degrees elapsed since the bucket start, in [0, width).
    pub degrees_in: f64,
}

impl Segment {
    /// 1-based ordinal.
    pub const fn ordinal(&self) -> u8 {
        self.index + 1
    }

    /// Angle at which the bucket starts.
    pub fn start_deg(&self) -> f64 {
        self.index as f64 * self.width_deg
    }

    /// Angle at which the bucket ends (360 for the last bucket).
    pub fn end_deg(&self) -> f64 {
        (self.index as f64 + 1.0) * self.width_deg
    }

    /// Degrees left until the bucket ends.
    pub fn degrees_remaining(&self) -> f64 {
        self.width_deg - self.degrees_in
    }

    /// Elapsed fraction in [0, 1).
    pub fn fraction(&self) -> f64 {
        self.degrees_in / self.width_deg
    }

    /// Percent elapsed, rounded to one decimal and capped at 99.9.
    pub fn percent_complete(&self) -> f64 {
        let pct = (self.fraction() * 1000.0).round() / 10.0;
        pct.clamp(0.0, 99.9)
    }
}

/// Classify `angle_deg` into `count` buckets of `width_deg` each.
///
/// The angle is normalized to [0, 360) first. Floating-point noise at the
/// top of the circle is absorbed into the last bucket.
pub fn classify(angle_deg: f64, width_deg: f64, count: u8) -> Segment {
    let angle = normalize_360(angle_deg);
    let raw = (angle / width_deg).floor();
    let index = (raw.max(0.0) as u8).min(count.saturating_sub(1));
    let degrees_in = (angle - index as f64 * width_deg).clamp(0.0, width_deg);
    Segment {
        index,
        count,
        width_deg,
        degrees_in: if degrees_in >= width_deg { 0.0 } else { degrees_in },
    }
}

/// A named element defined by equal division of the circle.
pub trait AngularPartition: Copy + Sized {
    /// Number of buckets.
    const COUNT: u8;

    /// Bucket width in degrees.
    const WIDTH_DEG: f64 = 360.0 / Self::COUNT as f64;

    /// Element at a 0-based bucket index. `index < COUNT`.
    fn from_index(index: u8) -> Self;

    /// Classify an angle into this partition.
    fn classify(angle_deg: f64) -> (Self, Segment) {
        let seg = classify(angle_deg, Self::WIDTH_DEG, Self::COUNT);
        (Self::from_index(seg.index), seg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_boundary_starts_next_bucket() {
        let seg = classify(132.0 - 120.0, 12.0, 30);
        assert_eq!(seg.ordinal(), 2);
        assert_eq!(seg.percent_complete(), 0.0);
    }

    #[test]
    fn mid_bucket() {
        let seg = classify(18.0, 12.0, 30);
        assert_eq!(seg.index, 1);
        assert!((seg.degrees_in - 6.0).abs() < 1e-12);
        assert!((seg.degrees_remaining() - 6.0).abs() < 1e-12);
        assert_eq!(seg.percent_complete(), 50.0);
    }

    #[test]
    fn percent_never_reaches_100() {
        let seg = classify(11.999_999, 12.0, 30);
        assert_eq!(seg.index, 0);
        assert_eq!(seg.percent_complete(), 99.9);
    }

    #[test]
    fn negative_and_wrapped_angles() {
        assert_eq!(classify(-6.0, 12.0, 30).index, 29);
        assert_eq!(classify(372.0, 12.0, 30).index, 1);
    }

    #[test]
    fn top_of_circle_stays_in_last_bucket() {
        let width = 360.0 / 27.0;
        let seg = classify(360.0 - 1e-13, width, 27);
        assert_eq!(seg.index, 26);
        assert!(seg.degrees_in < width);
    }

    #[test]
    fn bounds_cover_circle() {
        let width = 360.0 / 27.0;
        let seg = classify(359.0, width, 27);
        assert!((seg.end_deg() - 360.0).abs() < 1e-9);
        assert!(seg.start_deg() <= 359.0);
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Quadrant(u8);

    impl AngularPartition for Quadrant {
        const COUNT: u8 = 4;
        fn from_index(index: u8) -> Self {
            Quadrant(index)
        }
    }

    #[test]
    fn trait_default_width() {
        assert_eq!(Quadrant::WIDTH_DEG, 90.0);
        let (q, seg) = Quadrant::classify(271.0);
        assert_eq!(q, Quadrant(3));
        assert!((seg.degrees_in - 1.0).abs() < 1e-12);
    }

    #[test]
    fn named_elements_go_through_the_trait() {
        let names = ["N", "E", "S", "W"];
        let (q, seg) = Quadrant::classify(200.0);
        assert_eq!(names[q.0 as usize], "S");
        assert_eq!(seg.width_deg, 90.0);
        assert_eq!(seg.count, Quadrant::COUNT);
    }
}
