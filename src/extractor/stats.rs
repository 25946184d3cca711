//! Aggregate statistics over extracted pixels
//!
//! Statistics are accumulated in one pass, so a region can be summarized
//! straight from the image without listing its pixels first.

use log::debug;
use serde::Serialize;

use super::color::Color;
use super::pixel_extractor::PixelSample;
use super::region::Region;
use super::source::PixelSource;

/// Per-channel extrema, each channel computed independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRange {
    pub min: [u8; 3],
    pub max: [u8; 3],
}

/// Statistics for a set of pixel samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub pixel_count: usize,
    /// Per-channel mean, truncated toward zero
    pub average_color: Color,
    pub color_range: ColorRange,
}

/// Compute count, mean color and per-channel range of the samples
///
/// # Returns
/// The statistics, or None for an empty sample set
pub fn compute_stats(samples: &[PixelSample]) -> Option<RegionStats> {
    stats_of(samples.iter().map(|sample| sample.color.rgb()))
}

/// Compute the statistics of a region directly from the image
///
/// Gives the same result as `compute_stats` over `extract_region`, reading
/// each pixel once without keeping it.
///
/// # Returns
/// The statistics, or None when the region does not overlap the image
pub fn compute_region_stats<S: PixelSource + ?Sized>(image: &S, region: &Region) -> Option<RegionStats> {
    let (width, height) = image.dimensions();
    let clamped = match region.clamp(width, height) {
        Some(clamped) => clamped,
        None => {
            debug!("Region {:?} does not overlap {}x{} image", region, width, height);
            return None;
        }
    };

    let rows = clamped.start_y..clamped.end_y;
    stats_of(rows.flat_map(|y| (clamped.start_x..clamped.end_x).map(move |x| image.rgb_at(x, y))))
}

fn stats_of<I: Iterator<Item = [u8; 3]>>(colors: I) -> Option<RegionStats> {
    let mut count: u64 = 0;
    let mut sums = [0u64; 3];
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];

    for rgb in colors {
        count += 1;
        for channel in 0..3 {
            sums[channel] += u64::from(rgb[channel]);
            min[channel] = min[channel].min(rgb[channel]);
            max[channel] = max[channel].max(rgb[channel]);
        }
    }

    if count == 0 {
        return None;
    }

    // Mean of u8 values never exceeds 255
    let average = sums.map(|sum| (sum / count) as u8);

    Some(RegionStats {
        pixel_count: count as usize,
        average_color: Color::from_rgb(average),
        color_range: ColorRange { min, max },
    })
}
