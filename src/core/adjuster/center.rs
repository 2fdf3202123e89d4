//! Center adjuster.
//!
//! Keeps native pixel scale and pads instead:
//! 1. Union the two bounding rectangles into a shared canvas
//! 2. Cover one canvas per image with the fill color
//! 3. Copy each image so its center sits on the canvas center
//!
//! Suited to renders whose document sizes legitimately differ, where
//! rescaling would distort the content.

use super::ensure_non_empty;
use super::traits::{Adjuster, AdjusterKind};
use crate::core::raster::{FillColor, Raster, Rect};
use crate::error::CompareError;
use image::{imageops, DynamicImage, RgbaImage};
use tracing::{debug, trace};

/// Adjuster that centers both images on a canvas padded with a fill color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Centerer {
    fill: FillColor,
}

impl Centerer {
    /// Create a centerer that pads with `fill`
    pub fn new(fill: FillColor) -> Self {
        Self { fill }
    }

    pub fn fill(&self) -> FillColor {
        self.fill
    }

    /// Fill a canvas and overwrite its middle with `raster`, alpha included
    fn place(&self, raster: &Raster, canvas: &Rect) -> RgbaImage {
        let mut dst = self.fill.canvas(canvas.width(), canvas.height());
        let offset = canvas.center_offset(raster.width(), raster.height());
        trace!(x = offset.x, y = offset.y, "Placing image on canvas");

        imageops::replace(&mut dst, &raster.to_rgba8(), offset.x as i64, offset.y as i64);
        dst
    }
}

impl Adjuster for Centerer {
    fn adjust(&self, first: &Raster, second: &Raster) -> Result<(Raster, Raster), CompareError> {
        ensure_non_empty(first, second)?;

        let canvas = first.bounds().union(&second.bounds());
        if canvas.is_empty() {
            return Err(CompareError::DegenerateAdjustment {
                adjuster: AdjusterKind::Center,
                width: canvas.width(),
                height: canvas.height(),
            });
        }

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            fill = ?self.fill.to_rgba().0,
            "Centering images on shared canvas"
        );

        let centered_first = self.place(first, &canvas);
        let centered_second = self.place(second, &canvas);

        Ok((
            Raster::with_origin(DynamicImage::ImageRgba8(centered_first), canvas.min),
            Raster::with_origin(DynamicImage::ImageRgba8(centered_second), canvas.min),
        ))
    }

    fn kind(&self) -> AdjusterKind {
        AdjusterKind::Center
    }
}
