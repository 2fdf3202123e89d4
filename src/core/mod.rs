//! # Core Module
//!
//! The comparison engine: Adjuster → distance metric.
//!
//! ## Modules
//! - `raster` - Positioned images, rectangles and fill colors
//! - `adjuster` - Reconciles two images into a same-size pair
//! - `distance` - Sum-of-squared-difference metric and tolerances

pub mod adjuster;
pub mod distance;
pub mod raster;

// Re-export commonly used types
pub use adjuster::{Adjuster, AdjusterConfig, AdjusterKind, Centerer, Scaler};
pub use distance::{compare_distance, compare_distance_scaled, Distance, Tolerance};
pub use raster::{FillColor, Point, Raster, Rect};
