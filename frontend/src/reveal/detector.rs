//! Viewport visibility detection, abstracted so the reveal monitor can run
//! against the browser's `IntersectionObserver` or a scripted stand-in.

use crate::error::RevealError;

/// Minimum fraction of a region that must be inside the viewport for it to
/// count as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, RevealError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(RevealError::ThresholdOutOfRange(fraction))
        }
    }

    /// Clamps into `0.0..=1.0`; NaN becomes `0.0`.
    pub fn saturating(fraction: f64) -> Self {
        if fraction.is_nan() {
            Self(0.0)
        } else {
            Self(fraction.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// One visibility report for a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn reaches(&self, threshold: Threshold) -> bool {
        self.intersecting && self.ratio >= threshold.get()
    }
}

#[cfg(test)]
impl Visibility {
    pub fn hidden() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }

    pub fn at(ratio: f64) -> Self {
        Self {
            intersecting: ratio > 0.0,
            ratio,
        }
    }
}

/// Source of visibility reports. Implementations only start and stop
/// observation; reports are delivered to [`super::monitor::RevealMonitor::report`]
/// by whoever drives the detector.
pub trait VisibilityDetector {
    type Region: PartialEq;

    fn observe(&mut self, region: &Self::Region, threshold: Threshold);
    fn unobserve(&mut self, region: &Self::Region);
    fn disconnect(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_unit_interval() {
        assert_eq!(Threshold::new(0.0).map(Threshold::get), Ok(0.0));
        assert_eq!(Threshold::new(0.2).map(Threshold::get), Ok(0.2));
        assert_eq!(Threshold::new(1.0).map(Threshold::get), Ok(1.0));
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert_eq!(
            Threshold::new(-0.1),
            Err(RevealError::ThresholdOutOfRange(-0.1))
        );
        assert_eq!(
            Threshold::new(1.5),
            Err(RevealError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(Threshold::saturating(1.7).get(), 1.0);
        assert_eq!(Threshold::saturating(-3.0).get(), 0.0);
        assert_eq!(Threshold::saturating(f64::NAN).get(), 0.0);
        assert_eq!(Threshold::saturating(0.3).get(), 0.3);
    }

    #[test]
    fn visibility_needs_intersection_and_ratio() {
        let threshold = Threshold::saturating(0.2);
        assert!(!Visibility::hidden().reaches(threshold));
        assert!(!Visibility::at(0.19).reaches(threshold));
        assert!(Visibility::at(0.2).reaches(threshold));
        assert!(Visibility::at(1.0).reaches(threshold));

        let stale = Visibility {
            intersecting: false,
            ratio: 0.6,
        };
        assert!(!stale.reaches(threshold));
    }

    #[test]
    fn zero_threshold_counts_edge_contact() {
        let edge = Visibility {
            intersecting: true,
            ratio: 0.0,
        };
        assert!(edge.reaches(Threshold::default()));
    }
}
