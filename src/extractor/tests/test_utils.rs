use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::extractor::{Color, PixelSample};

/// Creates an image filled with a single color
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

/// Creates an image whose pixel at (x, y) is (x, y, x + y)
///
/// Every pixel is distinct for small images, which makes ordering visible.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]))
}

/// Creates a single-channel image filled with one gray level
pub fn gray_image(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Builds a sample at the origin with the given color
pub fn sample(rgb: [u8; 3]) -> PixelSample {
    PixelSample {
        x: 0,
        y: 0,
        color: Color::from_rgb(rgb),
    }
}
