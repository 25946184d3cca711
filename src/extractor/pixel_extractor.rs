//! Per-pixel color extraction
//!
//! Out-of-bounds coordinates are never an error here: single lookups return
//! None and batch lookups skip them, keeping the order of the retained
//! entries.

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeStruct;

use super::color::Color;
use super::source::PixelSource;
use super::region::Region;

/// A requested pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Coordinate { x, y }
    }
}

/// Color of one in-bounds pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSample {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

impl Serialize for PixelSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `coordinates` duplicates x/y as the pair the web client reads
        let mut state = serializer.serialize_struct("PixelSample", 4)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("coordinates", &(self.x, self.y))?;
        state.serialize_field("color", &self.color)?;
        state.end()
    }
}

/// Look up the color at (x, y)
///
/// # Returns
/// The color, or None when the coordinates fall outside the image
pub fn get_pixel<S: PixelSource + ?Sized>(image: &S, x: i64, y: i64) -> Option<Color> {
    if !image.contains(x, y) {
        return None;
    }
    Some(Color::from_rgb(image.rgb_at(x as u32, y as u32)))
}

/// Extract the colors of a list of coordinates
///
/// Duplicates are kept. Coordinates outside the image are dropped silently.
pub fn extract_pixels<S: PixelSource + ?Sized>(image: &S, coordinates: &[Coordinate]) -> Vec<PixelSample> {
    let pixels: Vec<PixelSample> = coordinates
        .iter()
        .filter(|c| image.contains(c.x, c.y))
        .map(|c| sample_at(image, c.x as u32, c.y as u32))
        .collect();

    if pixels.len() < coordinates.len() {
        debug!("Skipped {} out-of-bounds coordinates", coordinates.len() - pixels.len());
    }

    pixels
}

/// Extract every pixel of a region in row-major order
///
/// The region is clamped to the image first; an empty result means nothing
/// of the region overlaps the image.
pub fn extract_region<S: PixelSource + ?Sized>(image: &S, region: &Region) -> Vec<PixelSample> {
    let (width, height) = image.dimensions();
    let clamped = match region.clamp(width, height) {
        Some(clamped) => clamped,
        None => {
            debug!("Region {:?} does not overlap {}x{} image", region, width, height);
            return Vec::new();
        }
    };

    let mut pixels = Vec::with_capacity(clamped.pixel_count());
    for y in clamped.start_y..clamped.end_y {
        for x in clamped.start_x..clamped.end_x {
            pixels.push(sample_at(image, x, y));
        }
    }

    pixels
}

fn sample_at<S: PixelSource + ?Sized>(image: &S, x: u32, y: u32) -> PixelSample {
    PixelSample {
        x,
        y,
        color: Color::from_rgb(image.rgb_at(x, y)),
    }
}
