//! # Adjuster Module
//!
//! Reconciles two images of arbitrary size into a same-size pair.
//!
//! ## Supported Strategies
//! - **Scale** - Resize both images to their overlap (bilinear)
//! - **Center** - Center both images on a padded canvas, native scale
//!
//! ## Example
//! ```rust,ignore
//! use visual_distance::core::adjuster::{AdjusterConfig, AdjusterKind};
//! use visual_distance::core::FillColor;
//!
//! let adjuster = AdjusterConfig::new()
//!     .kind(AdjusterKind::Center)
//!     .fill(FillColor::WHITE)
//!     .build();
//!
//! let (expected, actual) = adjuster.adjust(&expected, &actual)?;
//! ```

mod center;
pub mod fast_resize;
mod scale;
mod traits;

pub use center::Centerer;
pub use scale::Scaler;
pub use traits::{Adjuster, AdjusterKind};

use crate::core::raster::{FillColor, Raster};
use crate::error::{CompareError, Side};
use crate::VisualDistanceError;
use serde::{Deserialize, Serialize};

/// Configuration builder for adjusters
///
/// Deserializable so a test harness can keep it next to its golden images:
/// `{"kind": "center", "fill": [255, 255, 255, 255]}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjusterConfig {
    /// Strategy to use
    kind: AdjusterKind,
    /// Padding color, only used by the Center strategy
    fill: FillColor,
}

impl AdjusterConfig {
    /// Create a new adjuster configuration with defaults (Scale, opaque black fill)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the adjustment strategy
    pub fn kind(mut self, kind: AdjusterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the padding color for the Center strategy
    pub fn fill(mut self, fill: FillColor) -> Self {
        self.fill = fill;
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| VisualDistanceError::Config(format!("Invalid adjuster config: {}", e)))
    }

    /// Build the adjuster
    pub fn build(self) -> Box<dyn Adjuster> {
        match self.kind {
            AdjusterKind::Scale => Box::new(Scaler::new()),
            AdjusterKind::Center => Box::new(Centerer::new(self.fill)),
        }
    }
}

/// Both inputs must cover at least one pixel
pub(crate) fn ensure_non_empty(first: &Raster, second: &Raster) -> Result<(), CompareError> {
    if first.is_empty() {
        return Err(CompareError::EmptyImage { side: Side::First });
    }
    if second.is_empty() {
        return Err(CompareError::EmptyImage { side: Side::Second });
    }
    Ok(())
}
