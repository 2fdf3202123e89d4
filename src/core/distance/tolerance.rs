//! Pass/fail thresholds applied to a computed distance.

use super::Distance;
use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// Maximum distance (exclusive) at which two images still count as the same
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance {
    threshold: f64,
}

impl Tolerance {
    /// Create a tolerance on the `[0, 1]` distance scale
    ///
    /// Recommended thresholds:
    /// - 0.02: Strict, only antialiasing noise passes
    /// - 0.08: Balanced (default)
    /// - 0.15: Permissive, tolerates resampled or slightly shifted renders
    pub fn new(threshold: f64) -> Result<Self, CompareError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CompareError::InvalidTolerance { value: threshold });
        }
        Ok(Self { threshold })
    }

    /// Create a tolerance from a percentage (`[0, 100]`)
    pub fn from_percent(percent: f64) -> Result<Self, CompareError> {
        Self::new(percent / 100.0).map_err(|_| CompareError::InvalidTolerance { value: percent })
    }

    /// Create a strict tolerance (threshold = 0.02)
    pub fn strict() -> Self {
        Self { threshold: 0.02 }
    }

    /// Create a balanced tolerance (threshold = 0.08)
    pub fn balanced() -> Self {
        Self { threshold: 0.08 }
    }

    /// Create a permissive tolerance (threshold = 0.15)
    pub fn permissive() -> Self {
        Self { threshold: 0.15 }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `distance` is close enough to pass
    pub fn accepts(&self, distance: Distance) -> bool {
        distance.value() < self.threshold
    }

    /// Human-readable description of the tolerance
    pub fn description(&self) -> String {
        format!(
            "Images with distance < {} ({}%) are considered the same",
            self.threshold,
            self.threshold * 100.0
        )
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::balanced()
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = CompareError;

    fn try_from(threshold: f64) -> Result<Self, Self::Error> {
        Self::new(threshold)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_at_boundary() {
        let tolerance = Tolerance::new(0.05).unwrap();

        assert!(tolerance.accepts(Distance::new(0.0)));
        assert!(tolerance.accepts(Distance::new(0.049)));
        assert!(!tolerance.accepts(Distance::new(0.05)));
        assert!(!tolerance.accepts(Distance::new(0.2)));
    }

    #[test]
    fn tolerance_rejects_out_of_range() {
        assert!(Tolerance::new(-0.1).is_err());
        assert!(Tolerance::new(1.5).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(1.0).is_ok());
    }

    #[test]
    fn tolerance_from_percent() {
        let tolerance = Tolerance::from_percent(8.0).unwrap();
        assert!((tolerance.threshold() - 0.08).abs() < 1e-12);

        match Tolerance::from_percent(250.0) {
            Err(CompareError::InvalidTolerance { value }) => assert_eq!(value, 250.0),
            other => panic!("Expected invalid tolerance, got {:?}", other),
        }
    }

    #[test]
    fn preset_tolerances() {
        assert_eq!(Tolerance::strict().threshold(), 0.02);
        assert_eq!(Tolerance::balanced().threshold(), 0.08);
        assert_eq!(Tolerance::permissive().threshold(), 0.15);
        assert_eq!(Tolerance::default(), Tolerance::balanced());
    }

    #[test]
    fn description_includes_threshold() {
        assert!(Tolerance::new(0.25).unwrap().description().contains("0.25"));
    }

    #[test]
    fn deserialize_validates() {
        let parsed: Tolerance = serde_json::from_str("0.1").unwrap();
        assert_eq!(parsed.threshold(), 0.1);
        assert!(serde_json::from_str::<Tolerance>("3.0").is_err());
    }
}
