//! # Raster Module
//!
//! Immutable images with a position on the pixel grid.
//!
//! Decoded images from the `image` crate always start at (0,0). A [`Raster`]
//! adds an origin so two images can be related by their bounding rectangles
//! (intersection for scaling, union for centering).

mod geometry;
pub mod loader;

pub use geometry::{Point, Rect};

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// RGBA pixels with 16 bits per channel
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// A decoded image placed on the pixel grid
#[derive(Debug, Clone)]
pub struct Raster {
    origin: Point,
    image: DynamicImage,
}

impl Raster {
    /// Wrap a decoded image anchored at (0,0)
    pub fn new(image: DynamicImage) -> Self {
        Self::with_origin(image, Point::ORIGIN)
    }

    /// Wrap a decoded image whose top-left pixel sits at `origin`
    pub fn with_origin(image: DynamicImage, origin: Point) -> Self {
        Self { origin, image }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The rectangle this image covers
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The underlying decoded image, in whatever color model it was loaded with
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// 8-bit RGBA copy of the pixels
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }

    /// Wide-range RGBA copy of the pixels; 8-bit sources are widened by ×257
    pub fn to_rgba16(&self) -> Rgba16Image {
        self.image.to_rgba16()
    }
}

impl From<DynamicImage> for Raster {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

impl From<RgbaImage> for Raster {
    fn from(image: RgbaImage) -> Self {
        Self::new(DynamicImage::ImageRgba8(image))
    }
}

/// Solid color used to pad the background of a centered image
///
/// Serializes as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct FillColor(Rgba<u8>);

impl FillColor {
    pub const BLACK: FillColor = FillColor(Rgba([0, 0, 0, 255]));
    pub const WHITE: FillColor = FillColor(Rgba([255, 255, 255, 255]));
    pub const TRANSPARENT: FillColor = FillColor(Rgba([0, 0, 0, 0]));

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba([r, g, b, a]))
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        self.0
    }

    /// A canvas of the given size fully covered with this color
    pub fn canvas(self, width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, self.0)
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgba<u8>> for FillColor {
    fn from(color: Rgba<u8>) -> Self {
        Self(color)
    }
}

impl From<[u8; 4]> for FillColor {
    fn from(channels: [u8; 4]) -> Self {
        Self(Rgba(channels))
    }
}

impl From<FillColor> for [u8; 4] {
    fn from(color: FillColor) -> Self {
        color.0 .0
    }
}
