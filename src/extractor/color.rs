//! Color value with its hex encoding

use serde::Serialize;

/// An RGB color and its `#rrggbb` encoding
///
/// The hex string is always derived from the RGB triple, so the two
/// representations cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    rgb: [u8; 3],
    hex: String,
}

impl Color {
    /// Create a color from its red, green and blue channels
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Color { rgb, hex: to_hex(rgb) }
    }

    /// Create a color from a single gray level
    pub fn from_gray(value: u8) -> Self {
        Color::from_rgb([value, value, value])
    }

    /// Parse a `#rrggbb` string (case-insensitive, leading `#` optional)
    ///
    /// # Returns
    /// The color, or None if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Color::from_rgb([r, g, b]))
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// Lowercase, zero-padded `#rrggbb` encoding
fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
