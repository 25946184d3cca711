//! Tests for color encoding

use crate::extractor::Color;

#[test]
fn test_hex_is_lowercase_and_zero_padded() {
    let color = Color::from_rgb([255, 10, 0]);
    assert_eq!(color.hex(), "#ff0a00");
    assert_eq!(color.rgb(), [255, 10, 0]);

    assert_eq!(Color::from_rgb([0, 0, 0]).hex(), "#000000");
    assert_eq!(Color::from_rgb([171, 205, 239]).hex(), "#abcdef");
}

#[test]
fn test_gray_replicates_channel() {
    let color = Color::from_gray(128);
    assert_eq!(color.rgb(), [128, 128, 128]);
    assert_eq!(color.hex(), "#808080");
}

#[test]
fn test_hex_round_trip() {
    for rgb in [[0, 0, 0], [255, 255, 255], [1, 2, 3], [254, 16, 15]] {
        let color = Color::from_rgb(rgb);
        let parsed = Color::from_hex(color.hex()).unwrap();
        assert_eq!(parsed, color);
        assert_eq!(parsed.hex(), color.hex());
    }
}

#[test]
fn test_from_hex_accepts_uppercase_and_missing_hash() {
    assert_eq!(Color::from_hex("FF0000").unwrap().rgb(), [255, 0, 0]);
    assert_eq!(Color::from_hex("#00Ff7f").unwrap().hex(), "#00ff7f");
}

#[test]
fn test_from_hex_rejects_malformed() {
    assert!(Color::from_hex("#fff").is_none());
    assert!(Color::from_hex("#gg0000").is_none());
    assert!(Color::from_hex("#ff00000").is_none());
    assert!(Color::from_hex("#ff€0").is_none());
}
