//! Decoding of uploaded image bytes
//!
//! Format detection works on magic bytes, never on the upload's filename.

use std::io::Cursor;

use image::{ImageFormat, ImageReader, Limits};
use log::{debug, info};

use crate::errors::{PixelError, PixelResult};
use crate::extractor::PixelImage;

use super::formats::{format_name, registry};
use super::metadata::{mode_name, ImageMetadata};

/// Default maximum width and height accepted by the decoder
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

/// Resource bounds applied while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum accepted width and height in pixels
    pub max_dimension: u32,
    /// Maximum bytes the decoder may allocate, None for the crate default
    pub max_alloc: Option<u64>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_dimension: DEFAULT_MAX_DIMENSION,
            max_alloc: None,
        }
    }
}

impl DecodeOptions {
    fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        if self.max_alloc.is_some() {
            limits.max_alloc = self.max_alloc;
        }
        limits
    }
}

/// Decoded pixels together with their metadata
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: PixelImage,
    pub metadata: ImageMetadata,
}

/// Detect the format of image bytes and check it against the allow-list
///
/// # Returns
/// The detected format, or `UnsupportedFormat` for unknown or disallowed data
pub fn validate_image(bytes: &[u8]) -> PixelResult<ImageFormat> {
    if bytes.is_empty() {
        return Err(PixelError::DecodeError("empty image data".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| PixelError::UnsupportedFormat("Unrecognized image format".to_string()))?;
    let name = format_name(format);

    match registry().get(name) {
        Some(entry) if entry.decodable => {
            debug!("Detected {} image data ({} bytes)", name, bytes.len());
            Ok(format)
        },
        Some(_) => Err(PixelError::UnsupportedFormat(
            format!("Image format {} is recognized but cannot be decoded", name))),
        None => Err(PixelError::UnsupportedFormat(
            format!("Unsupported image format: {}", name))),
    }
}

/// Validate and decode image bytes
///
/// # Arguments
/// * `bytes` - Raw upload bytes
/// * `options` - Resource bounds for the decoder
///
/// # Returns
/// The decoded image and its metadata, or an error describing why the data
/// was rejected
pub fn decode_image(bytes: &[u8], options: &DecodeOptions) -> PixelResult<DecodedImage> {
    let format = validate_image(bytes)?;

    let mut reader = ImageReader::with_format(Cursor::new(bytes), format);
    reader.limits(options.limits());
    let decoded = reader.decode()?;

    let metadata = ImageMetadata::new(
        decoded.width(),
        decoded.height(),
        format_name(format),
        mode_name(decoded.color()),
    );
    info!("Decoded {} image: {}x{} ({})",
          metadata.format, metadata.width, metadata.height, metadata.mode);

    Ok(DecodedImage {
        image: PixelImage::from_dynamic(&decoded),
        metadata,
    })
}
