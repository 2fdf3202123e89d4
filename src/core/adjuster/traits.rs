//! Trait definitions for image adjusters.

use super::{Centerer, Scaler};
use crate::core::raster::Raster;
use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// Reconciles two images into a pair of the same width and height
///
/// Implementations allocate new output rasters and never touch their inputs.
pub trait Adjuster: Send + Sync {
    /// Produce two same-size images suitable for pointwise comparison
    fn adjust(&self, first: &Raster, second: &Raster)
        -> Result<(Raster, Raster), CompareError>;

    /// Get the adjuster kind
    fn kind(&self) -> AdjusterKind;
}

/// Available adjustment strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjusterKind {
    /// Resize both images to their common overlap
    #[default]
    Scale,
    /// Pad both images onto a shared canvas, centered
    Center,
}

impl AdjusterKind {
    /// Get a human-readable description of the strategy
    pub fn description(&self) -> &'static str {
        match self {
            AdjusterKind::Scale => {
                "Scale - Resizes both images to their overlapping size with bilinear filtering"
            }
            AdjusterKind::Center => {
                "Center - Centers both images on a padded canvas at native pixel scale"
            }
        }
    }

    /// A freshly constructed adjuster of this kind with default settings
    pub fn default_adjuster(&self) -> Box<dyn Adjuster> {
        match self {
            AdjusterKind::Scale => Box::new(Scaler::new()),
            AdjusterKind::Center => Box::new(Centerer::default()),
        }
    }
}

impl std::fmt::Display for AdjusterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjusterKind::Scale => write!(f, "Scale"),
            AdjusterKind::Center => write!(f, "Center"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjuster_kind_display() {
        assert_eq!(AdjusterKind::Scale.to_string(), "Scale");
        assert_eq!(AdjusterKind::Center.to_string(), "Center");
    }

    #[test]
    fn default_adjuster_matches_kind() {
        assert_eq!(AdjusterKind::Scale.default_adjuster().kind(), AdjusterKind::Scale);
        assert_eq!(AdjusterKind::Center.default_adjuster().kind(), AdjusterKind::Center);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&AdjusterKind::Center).unwrap();
        assert_eq!(json, "\"center\"");
    }
}
