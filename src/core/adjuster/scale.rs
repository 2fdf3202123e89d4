//! Scale adjuster.
//!
//! Resizes both images to the size of their overlap:
//! 1. Intersect the two bounding rectangles
//! 2. Resize each image independently to that width and height (bilinear)
//!
//! For two images anchored at (0,0) this is the smaller of the two sizes on
//! each axis. Content is stretched, never padded.

use super::fast_resize::FastResizer;
use super::traits::{Adjuster, AdjusterKind};
use super::ensure_non_empty;
use crate::core::raster::Raster;
use crate::error::CompareError;
use tracing::{debug, warn};

/// Adjuster that resizes both images to their common overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scaler;

impl Scaler {
    pub fn new() -> Self {
        Self
    }
}

impl Adjuster for Scaler {
    fn adjust(&self, first: &Raster, second: &Raster) -> Result<(Raster, Raster), CompareError> {
        ensure_non_empty(first, second)?;

        let target = first.bounds().intersect(&second.bounds());
        if target.is_empty() {
            warn!(
                first = ?first.bounds(),
                second = ?second.bounds(),
                "Images do not overlap, nothing to scale to"
            );
            return Err(CompareError::DegenerateAdjustment {
                adjuster: AdjusterKind::Scale,
                width: target.width(),
                height: target.height(),
            });
        }

        let (width, height) = (target.width(), target.height());
        debug!(width, height, "Scaling images to common size");

        let mut resizer = FastResizer::new();
        let scaled_first = resizer.resize_rgba(&first.to_rgba8(), width, height)?;
        let scaled_second = resizer.resize_rgba(&second.to_rgba8(), width, height)?;

        Ok((Raster::from(scaled_first), Raster::from(scaled_second)))
    }

    fn kind(&self) -> AdjusterKind {
        AdjusterKind::Scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raster::Point;
    use image::{DynamicImage, ImageBuffer, Rgb, Rgba, RgbaImage};

    fn solid(width: u32, height: u32) -> Raster {
        Raster::from(RgbaImage::from_pixel(width, height, Rgba([90, 90, 90, 255])))
    }

    #[test]
    fn scales_to_smaller_size() {
        let (a, b) = Scaler::new().adjust(&solid(200, 100), &solid(50, 150)).unwrap();

        assert_eq!((a.width(), a.height()), (50, 100));
        assert_eq!((b.width(), b.height()), (50, 100));
    }

    #[test]
    fn outputs_are_anchored_at_origin() {
        let first = Raster::with_origin(
            DynamicImage::ImageRgba8(RgbaImage::new(40, 40)),
            Point::new(10, 10),
        );
        let (a, b) = Scaler::new().adjust(&first, &solid(30, 30)).unwrap();

        assert_eq!(a.origin(), Point::ORIGIN);
        assert_eq!(b.origin(), Point::ORIGIN);
        assert_eq!((a.width(), a.height()), (20, 20));
    }

    #[test]
    fn disjoint_images_are_degenerate() {
        let far_away = Raster::with_origin(
            DynamicImage::ImageRgba8(RgbaImage::new(10, 10)),
            Point::new(100, 100),
        );

        let result = Scaler::new().adjust(&solid(10, 10), &far_away);

        assert!(matches!(
            result,
            Err(CompareError::DegenerateAdjustment {
                adjuster: AdjusterKind::Scale,
                width: 0,
                height: 0,
            })
        ));
    }

    #[test]
    fn inputs_are_left_untouched() {
        let rgb = ImageBuffer::from_fn(20, 10, |x, _| Rgb([x as u8, 0, 0]));
        let original = Raster::from(DynamicImage::ImageRgb8(rgb.clone()));

        let _ = Scaler::new().adjust(&original, &solid(5, 5)).unwrap();

        assert_eq!(original.image().as_rgb8(), Some(&rgb));
    }

    #[test]
    fn kind_returns_scale() {
        assert_eq!(Scaler::new().kind(), AdjusterKind::Scale);
    }
}
