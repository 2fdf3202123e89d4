//! # Visual Distance
//!
//! Judges whether two rendered images are "close enough" for visual regression tests.
//!
//! ## How It Works
//! 1. An **adjuster** reconciles two images of possibly different sizes into a
//!    same-size pair (rescaling or centering on a padded canvas)
//! 2. The **distance metric** averages squared per-channel differences into a
//!    score in `[0, 1]`
//! 3. The caller compares that score against a [`core::Tolerance`]
//!
//! ## Architecture
//! - `core` - Rasters, adjusters and the distance metric
//! - `error` - Typed error hierarchy
//!
//! ## Example
//! ```rust,ignore
//! use visual_distance::core::{compare_distance, Centerer, Raster, Tolerance};
//!
//! let expected = Raster::open("testdata/expected.png")?;
//! let actual = Raster::open("testdata/actual.png")?;
//!
//! let distance = compare_distance(&expected, &actual, &Centerer::default())?;
//! assert!(Tolerance::balanced().accepts(distance));
//! ```

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{Result, VisualDistanceError};

/// Initialize tracing for the library
///
/// Reads the filter from `RUST_LOG`. Does nothing if a global subscriber
/// is already installed, so test harnesses may call it more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_can_be_called_twice() {
        init_tracing();
        init_tracing();
        tracing::debug!("subscriber installed");
    }
}
