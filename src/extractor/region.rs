//! Region structure for defining an extraction area
//!
//! A region is given by two corners in pixel coordinates, where (0,0) is the
//! top-left corner of the image. The end corner is exclusive. Corners may lie
//! outside the image; they are clamped against the image bounds before any
//! pixel is read.

use serde::{Deserialize, Serialize};

/// Requested region for extraction (in pixel coordinates)
///
/// Coordinates are signed so that callers can pass corners left of or above
/// the image without a conversion error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// X-coordinate of the start corner (inclusive)
    pub start_x: i64,

    /// Y-coordinate of the start corner (inclusive)
    pub start_y: i64,

    /// X-coordinate of the end corner (exclusive)
    pub end_x: i64,

    /// Y-coordinate of the end corner (exclusive)
    pub end_y: i64,
}

impl Region {
    /// Create a new region from its two corners
    ///
    /// # Arguments
    /// * `start_x` - X-coordinate of the start corner
    /// * `start_y` - Y-coordinate of the start corner
    /// * `end_x` - X-coordinate of the end corner (exclusive)
    /// * `end_y` - Y-coordinate of the end corner (exclusive)
    pub fn new(start_x: i64, start_y: i64, end_x: i64, end_y: i64) -> Self {
        Region { start_x, start_y, end_x, end_y }
    }

    /// Region covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Region::new(0, 0, i64::from(width), i64::from(height))
    }

    /// Clamp the region against image bounds
    ///
    /// The start corner is raised to 0 and the end corner lowered to the
    /// image size. Corners are not reordered.
    ///
    /// # Returns
    /// The clamped region, or None when nothing remains on either axis
    pub fn clamp(&self, width: u32, height: u32) -> Option<ClampedRegion> {
        let start_x = self.start_x.max(0);
        let start_y = self.start_y.max(0);
        let end_x = self.end_x.min(i64::from(width));
        let end_y = self.end_y.min(i64::from(height));

        if start_x >= end_x || start_y >= end_y {
            return None;
        }

        // 0 <= start < end <= u32 dimension, so every cast below is lossless
        Some(ClampedRegion {
            start_x: start_x as u32,
            start_y: start_y as u32,
            end_x: end_x as u32,
            end_y: end_y as u32,
        })
    }
}

/// Non-empty region that lies fully inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedRegion {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl ClampedRegion {
    /// Number of columns in the region
    pub fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// Number of rows in the region
    pub fn height(&self) -> u32 {
        self.end_y - self.start_y
    }

    /// Number of pixels covered by the region
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}
