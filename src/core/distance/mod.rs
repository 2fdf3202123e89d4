//! # Distance Module
//!
//! Naive per-pixel distance between two adjusted images.
//!
//! ## How It Works
//! 1. Run the adjuster to get two same-size images
//! 2. Read every pixel of their shared rectangle as 16-bit RGBA, with color
//!    premultiplied by alpha
//! 3. Normalize each channel to a byte, then to `[0, 1]`
//! 4. Sum `dr² + dg² + db² + da²` over all pixels
//! 5. Divide by `4 × width × height`
//!
//! ## Scale
//! The canonical result lies in `[0, 1]`: 0 for pixel-identical images, 1 when
//! every channel of every pixel is at the opposite extreme. Older harnesses
//! used a percentage; [`Distance::percent`] multiplies by 100.
//!
//! Rows are summed in parallel and combined in row order, so the result is
//! deterministic for a given image pair but may differ in the last bits from
//! a strictly sequential sum.

mod tolerance;

pub use tolerance::Tolerance;

use crate::core::adjuster::{ensure_non_empty, Adjuster, Scaler};
use crate::core::raster::{Raster, Rect, Rgba16Image};
use crate::error::CompareError;
use image::Rgba;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized dissimilarity between two images, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The distance on the `[0, 1]` scale
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The distance on the `[0, 100]` scale
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_identical(&self) -> bool {
        self.0 == 0.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Compare two images after reconciling them with `adjuster`.
///
/// Fails instead of returning a number when either input is empty, when the
/// adjuster yields images of different sizes, or when the adjusted images
/// share no pixels.
pub fn compare_distance(
    first: &Raster,
    second: &Raster,
    adjuster: &dyn Adjuster,
) -> Result<Distance, CompareError> {
    ensure_non_empty(first, second)?;

    let (adjusted_first, adjusted_second) = adjuster.adjust(first, second)?;

    if (adjusted_first.width(), adjusted_first.height())
        != (adjusted_second.width(), adjusted_second.height())
    {
        return Err(CompareError::DimensionMismatch {
            first_width: adjusted_first.width(),
            first_height: adjusted_first.height(),
            second_width: adjusted_second.width(),
            second_height: adjusted_second.height(),
        });
    }

    let shared = adjusted_first.bounds().intersect(&adjusted_second.bounds());
    if shared.is_empty() {
        return Err(CompareError::DegenerateAdjustment {
            adjuster: adjuster.kind(),
            width: shared.width(),
            height: shared.height(),
        });
    }

    let sum = squared_difference_sum(&adjusted_first, &adjusted_second, &shared);
    let distance = Distance(sum / (4.0 * shared.area() as f64));

    debug!(
        adjuster = %adjuster.kind(),
        width = shared.width(),
        height = shared.height(),
        distance = distance.value(),
        "Compared images"
    );

    Ok(distance)
}

/// Compare two images after resizing both to their common overlap.
///
/// Equivalent to [`compare_distance`] with a default [`Scaler`].
pub fn compare_distance_scaled(first: &Raster, second: &Raster) -> Result<Distance, CompareError> {
    compare_distance(first, second, &Scaler::new())
}

/// Sum of squared normalized channel differences over `shared`
fn squared_difference_sum(first: &Raster, second: &Raster, shared: &Rect) -> f64 {
    let first_pixels = first.to_rgba16();
    let second_pixels = second.to_rgba16();

    // Offsets of the shared rectangle inside each pixel buffer
    let first_x = (shared.min.x - first.origin().x) as u32;
    let first_y = (shared.min.y - first.origin().y) as u32;
    let second_x = (shared.min.x - second.origin().x) as u32;
    let second_y = (shared.min.y - second.origin().y) as u32;

    let row_sums: Vec<f64> = (0..shared.height())
        .into_par_iter()
        .map(|row| {
            row_sum(
                &first_pixels,
                (first_x, first_y + row),
                &second_pixels,
                (second_x, second_y + row),
                shared.width(),
            )
        })
        .collect();

    row_sums.iter().sum()
}

fn row_sum(
    first: &Rgba16Image,
    (first_x, first_y): (u32, u32),
    second: &Rgba16Image,
    (second_x, second_y): (u32, u32),
    width: u32,
) -> f64 {
    (0..width)
        .map(|col| {
            pixel_distance(
                first.get_pixel(first_x + col, first_y),
                second.get_pixel(second_x + col, second_y),
            )
        })
        .sum()
}

fn pixel_distance(a: &Rgba<u16>, b: &Rgba<u16>) -> f64 {
    premultiply(a)
        .iter()
        .zip(premultiply(b).iter())
        .map(|(&ca, &cb)| {
            let d = normalize(ca) - normalize(cb);
            d * d
        })
        .sum()
}

/// Scale color channels by alpha; fully transparent pixels all become zero
fn premultiply(pixel: &Rgba<u16>) -> [u16; 4] {
    let [r, g, b, a] = pixel.0;
    let scale = |c: u16| (u32::from(c) * u32::from(a) / 0xFFFF) as u16;
    [scale(r), scale(g), scale(b), a]
}

/// Map a 16-bit channel to `[0, 1]` through its byte value
fn normalize(value: u16) -> f64 {
    f64::from((value >> 8) as u8) / 255.0
}
