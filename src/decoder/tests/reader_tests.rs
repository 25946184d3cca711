//! Tests for decoding uploaded bytes

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::decoder::{decode_image, validate_image, DecodeOptions};
use crate::errors::PixelError;
use crate::extractor::{get_pixel, PixelImage};

use super::test_utils::{encode, gray_alpha_png, gray_png, solid_png};

#[test]
fn test_validate_png() {
    let bytes = solid_png(2, 2, [255, 0, 0]);
    assert_eq!(validate_image(&bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn test_validate_rejects_garbage() {
    let result = validate_image(b"definitely not an image");
    assert!(matches!(result, Err(PixelError::UnsupportedFormat(_))));
}

#[test]
fn test_validate_rejects_empty() {
    assert!(matches!(validate_image(&[]), Err(PixelError::DecodeError(_))));
}

#[test]
fn test_validate_rejects_format_outside_allow_list() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
    let bytes = encode(image, ImageFormat::Pnm);

    match validate_image(&bytes) {
        Err(PixelError::UnsupportedFormat(msg)) => assert_eq!(msg, "Unsupported image format: PNM"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_decode_metadata() {
    let bytes = solid_png(100, 50, [255, 0, 0]);
    let decoded = decode_image(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(decoded.metadata.width, 100);
    assert_eq!(decoded.metadata.height, 50);
    assert_eq!(decoded.metadata.aspect_ratio, "100:50");
    assert_eq!(decoded.metadata.format, "PNG");
    assert_eq!(decoded.metadata.mode, "RGB");
}

#[test]
fn test_decode_grayscale_keeps_gray_layout() {
    let bytes = gray_png(3, 2, 200);
    let decoded = decode_image(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(decoded.metadata.mode, "L");
    assert!(matches!(decoded.image, PixelImage::Gray(_)));
    assert_eq!(get_pixel(&decoded.image, 2, 1).unwrap().rgb(), [200, 200, 200]);
}

#[test]
fn test_decode_gray_alpha_drops_alpha() {
    let bytes = gray_alpha_png(4, 3, 90, 10);
    let decoded = decode_image(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(decoded.metadata.mode, "LA");
    assert!(matches!(decoded.image, PixelImage::Gray(_)));
    let color = get_pixel(&decoded.image, 3, 2).unwrap();
    assert_eq!(color.rgb(), [90, 90, 90]);
    assert_eq!(color.hex(), "#5a5a5a");
}

#[test]
fn test_decode_jpeg() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([0, 0, 255])));
    let bytes = encode(image, ImageFormat::Jpeg);
    let decoded = decode_image(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(decoded.metadata.format, "JPEG");
    assert_eq!((decoded.image.width(), decoded.image.height()), (8, 8));
}

#[test]
fn test_decode_respects_dimension_limit() {
    let bytes = solid_png(64, 8, [0, 0, 0]);
    let options = DecodeOptions { max_dimension: 32, max_alloc: None };

    assert!(matches!(decode_image(&bytes, &options), Err(PixelError::DecodeError(_))));
}

#[test]
fn test_decode_truncated_png_fails() {
    let bytes = solid_png(16, 16, [9, 9, 9]);
    let truncated = &bytes[..bytes.len() / 2];

    let result = decode_image(truncated, &DecodeOptions::default());
    assert!(result.is_err());
    assert!(result.unwrap_err().is_client_error());
}
