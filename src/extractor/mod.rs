//! Pixel and region extraction from decoded images
//!
//! This module turns a decoded image grid into per-pixel color records and,
//! for regions, aggregate statistics. Everything here is pure and works on
//! any `PixelSource`.

mod region;
mod color;
mod source;
mod pixel_extractor;
mod stats;

#[cfg(test)]
mod tests;

// Public exports
pub use region::{Region, ClampedRegion};
pub use color::Color;
pub use source::{PixelSource, PixelImage};
pub use pixel_extractor::{get_pixel, extract_pixels, extract_region, Coordinate, PixelSample};
pub use stats::{compute_stats, compute_region_stats, RegionStats, ColorRange};
