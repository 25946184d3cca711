//! Decoded image grids the extractor can read from
//!
//! The extractor only needs dimensions and an RGB triple per cell. This
//! module defines that seam as the `PixelSource` trait and provides the
//! implementations for the `image` crate buffers used by the decoder.

use image::{DynamicImage, GrayImage, RgbImage};

/// Read-only access to a 2-D grid of color samples
pub trait PixelSource {
    /// Image dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// RGB triple of the sample at (x, y)
    ///
    /// Callers guarantee `x < width` and `y < height`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];

    /// Check whether signed coordinates fall inside the grid
    fn contains(&self, x: i64, y: i64) -> bool {
        let (width, height) = self.dimensions();
        x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height)
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for GrayImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let value = self.get_pixel(x, y).0[0];
        [value, value, value]
    }
}

/// Image as handed to the extractor
///
/// Single-channel sources (with or without alpha) are kept as gray levels
/// and expanded to RGB per sample; everything else is reduced to 8-bit RGB.
#[derive(Debug, Clone)]
pub enum PixelImage {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl PixelImage {
    /// Convert a decoded image into an extractor grid
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => PixelImage::Gray(image.to_luma8()),
            _ => PixelImage::Rgb(image.to_rgb8()),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }
}

impl PixelSource for PixelImage {
    fn dimensions(&self) -> (u32, u32) {
        match self {
            PixelImage::Gray(img) => PixelSource::dimensions(img),
            PixelImage::Rgb(img) => PixelSource::dimensions(img),
        }
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        match self {
            PixelImage::Gray(img) => img.rgb_at(x, y),
            PixelImage::Rgb(img) => img.rgb_at(x, y),
        }
    }
}

impl From<RgbImage> for PixelImage {
    fn from(image: RgbImage) -> Self {
        PixelImage::Rgb(image)
    }
}

impl From<GrayImage> for PixelImage {
    fn from(image: GrayImage) -> Self {
        PixelImage::Gray(image)
    }
}
