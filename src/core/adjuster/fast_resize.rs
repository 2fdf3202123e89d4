//! Bilinear RGBA resizing for the Scale adjuster.
//!
//! Backed by fast_image_resize with alpha handling turned off, so each of the
//! four channels is interpolated on its own.

use crate::error::CompareError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{ImageBuffer, RgbaImage};

/// Fast image resizer using SIMD acceleration
pub struct FastResizer {
    resizer: Resizer,
}

impl FastResizer {
    /// Create a new fast resizer
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
        }
    }

    /// Resize an RGBA image to exactly `width`x`height` with a bilinear filter.
    ///
    /// Every channel, alpha included, is interpolated on its own; colors are
    /// not premultiplied by alpha.
    pub fn resize_rgba(
        &mut self,
        image: &RgbaImage,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, CompareError> {
        let (src_width, src_height) = image.dimensions();

        if src_width == 0 || src_height == 0 {
            return Err(CompareError::ResizeFailed(
                "Invalid source dimensions".to_string(),
            ));
        }

        if width == 0 || height == 0 {
            return Err(CompareError::ResizeFailed(
                "Invalid destination dimensions".to_string(),
            ));
        }

        if (src_width, src_height) == (width, height) {
            return Ok(image.clone());
        }

        let src_image =
            Image::from_vec_u8(src_width, src_height, image.as_raw().clone(), PixelType::U8x4)
                .map_err(|e| {
                    CompareError::ResizeFailed(format!("Failed to create source image: {}", e))
                })?;

        let mut dst_image = Image::new(width, height, PixelType::U8x4);

        let options = ResizeOptions::new()
            .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear))
            .use_alpha(false);

        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| CompareError::ResizeFailed(format!("Resize failed: {}", e)))?;

        ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
            CompareError::ResizeFailed("Failed to create result buffer".to_string())
        })
    }
}

impl Default for FastResizer {
    fn default() -> Self {
        Self::new()
    }
}
