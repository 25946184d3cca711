//! Tests for pixel and region extraction

use crate::extractor::{extract_pixels, extract_region, get_pixel, Coordinate, PixelImage, Region};

use super::test_utils::{gradient_image, gray_image, solid_image};

#[test]
fn test_get_pixel_solid_red() {
    let image = solid_image(2, 2, [255, 0, 0]);
    let color = get_pixel(&image, 0, 0).unwrap();
    assert_eq!(color.rgb(), [255, 0, 0]);
    assert_eq!(color.hex(), "#ff0000");
}

#[test]
fn test_get_pixel_out_of_bounds_is_absent() {
    let image = solid_image(2, 2, [255, 0, 0]);
    assert!(get_pixel(&image, 2, 0).is_none());
    assert!(get_pixel(&image, 0, 2).is_none());
    assert!(get_pixel(&image, -1, 0).is_none());
    assert!(get_pixel(&image, 0, -1).is_none());
}

#[test]
fn test_get_pixel_grayscale_is_replicated() {
    let image = PixelImage::from(gray_image(3, 3, 42));
    let color = get_pixel(&image, 1, 1).unwrap();
    assert_eq!(color.rgb(), [42, 42, 42]);
    assert_eq!(color.hex(), "#2a2a2a");
}

#[test]
fn test_extract_pixels_solid_red() {
    let image = solid_image(2, 2, [255, 0, 0]);
    let pixels = extract_pixels(&image, &[Coordinate::new(0, 0), Coordinate::new(1, 1)]);

    assert_eq!(pixels.len(), 2);
    assert_eq!((pixels[0].x, pixels[0].y), (0, 0));
    assert_eq!((pixels[1].x, pixels[1].y), (1, 1));
    assert!(pixels.iter().all(|p| p.color.hex() == "#ff0000"));
}

#[test]
fn test_extract_pixels_drops_out_of_bounds_and_keeps_order() {
    let image = gradient_image(4, 3);
    let coordinates: Vec<Coordinate> = vec![
        (3, 2).into(),
        (4, 0).into(),
        (0, 1).into(),
        (-1, 1).into(),
        (3, 2).into(),
        (0, 3).into(),
    ];

    let pixels = extract_pixels(&image, &coordinates);

    assert_eq!(pixels.len(), 3);
    let positions: Vec<(u32, u32)> = pixels.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(positions, vec![(3, 2), (0, 1), (3, 2)]);
    assert_eq!(pixels[0].color.rgb(), [3, 2, 5]);
    assert_eq!(pixels[1].color.rgb(), [0, 1, 1]);
}

#[test]
fn test_extract_pixels_empty_input() {
    let image = solid_image(2, 2, [0, 0, 0]);
    assert!(extract_pixels(&image, &[]).is_empty());
}

#[test]
fn test_extract_full_region_is_row_major() {
    let image = gradient_image(3, 2);
    let pixels = extract_region(&image, &Region::full(3, 2));

    assert_eq!(pixels.len(), 6);
    let positions: Vec<(u32, u32)> = pixels.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    for pixel in &pixels {
        assert_eq!(pixel.color.rgb(), [pixel.x as u8, pixel.y as u8, (pixel.x + pixel.y) as u8]);
    }
}

#[test]
fn test_extract_region_solid_red() {
    let image = solid_image(2, 2, [255, 0, 0]);
    let pixels = extract_region(&image, &Region::new(0, 0, 2, 2));
    assert_eq!(pixels.len(), 4);
}

#[test]
fn test_extract_region_is_clamped() {
    let image = gradient_image(4, 4);
    let pixels = extract_region(&image, &Region::new(-2, 2, 10, 3));

    let positions: Vec<(u32, u32)> = pixels.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(positions, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_extract_region_outside_is_empty() {
    let image = gradient_image(4, 4);
    assert!(extract_region(&image, &Region::new(5, 5, 9, 9)).is_empty());
    assert!(extract_region(&image, &Region::new(3, 3, 1, 1)).is_empty());
}

#[test]
fn test_sample_serializes_with_coordinates_pair() {
    let image = solid_image(2, 2, [0, 128, 255]);
    let pixels = extract_pixels(&image, &[Coordinate::new(1, 0)]);
    let value = serde_json::to_value(&pixels[0]).unwrap();

    assert_eq!(value["x"], 1);
    assert_eq!(value["y"], 0);
    assert_eq!(value["coordinates"], serde_json::json!([1, 0]));
    assert_eq!(value["color"]["hex"], "#0080ff");
    assert_eq!(value["color"]["rgb"], serde_json::json!([0, 128, 255]));
}
