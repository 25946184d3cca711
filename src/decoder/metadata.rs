//! Image metadata reported for uploads

use image::ColorType;
use serde::Serialize;

/// Dimensions, format and channel layout of a decoded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Upper-case format name, e.g. "PNG"
    pub format: String,
    /// Channel layout, e.g. "RGB" or "L"
    pub mode: String,
    /// Unreduced "W:H" ratio
    pub aspect_ratio: String,
}

impl ImageMetadata {
    pub fn new(width: u32, height: u32, format: &str, mode: &str) -> Self {
        ImageMetadata {
            width,
            height,
            format: format.to_string(),
            mode: mode.to_string(),
            aspect_ratio: format!("{}:{}", width, height),
        }
    }
}

/// Mode string for a decoded color layout
///
/// 8-bit layouts use the short names ("L", "LA", "RGB", "RGBA"); deeper
/// layouts carry their sample type as a suffix.
pub fn mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        _ => "UNKNOWN",
    }
}
