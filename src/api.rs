use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::decoder::{decode_image, validate_filename, DecodeOptions, DecodedImage, ImageMetadata};
use crate::errors::{PixelError, PixelResult};
use crate::extractor::{compute_region_stats, compute_stats, extract_pixels, extract_region, Coordinate, PixelSample, Region, RegionStats};

/// Pixel colors picked from an uploaded image
#[derive(Debug, Clone, Serialize)]
pub struct PixelExtraction {
    pub metadata: ImageMetadata,
    pub pixels: Vec<PixelSample>,
}

/// Pixels and statistics of a region of an uploaded image
#[derive(Debug, Clone, Serialize)]
pub struct RegionExtraction {
    pub metadata: ImageMetadata,
    /// The region as requested, before clamping
    pub region: Region,
    pub pixels: Vec<PixelSample>,
    /// None when the region does not overlap the image
    pub stats: Option<RegionStats>,
}

/// Statistics of a region without the per-pixel listing
#[derive(Debug, Clone, Serialize)]
pub struct RegionStatsReport {
    pub metadata: ImageMetadata,
    pub region: Region,
    pub stats: Option<RegionStats>,
}

/// Everything `inspect` reports about one image
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub metadata: ImageMetadata,
    pub pixels: Vec<PixelSample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RegionStats>,
}

/// Selected pixels sent back by a client for export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequest {
    pub filename: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub pixels: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub filename: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
}

/// Export document built from an `ExportRequest`
#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub image_metadata: ExportMetadata,
    pub selected_pixels: Vec<serde_json::Value>,
}

/// Main interface to the PixelMapper library
///
/// Every call decodes its own copy of the image; the only state kept is the
/// resource bounds, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct PixelMapper {
    options: DecodeOptions,
    /// Largest region whose pixels are listed; None for no limit
    max_region_pixels: Option<usize>,
}

impl PixelMapper {
    /// Create a new PixelMapper instance
    ///
    /// # Arguments
    /// * `options` - Resource bounds applied to every decode
    pub fn new(options: DecodeOptions) -> Self {
        PixelMapper { options, max_region_pixels: None }
    }

    /// Refuse to list regions covering more than `limit` pixels
    ///
    /// Region statistics are not affected; they never hold the pixels.
    pub fn with_max_region_pixels(mut self, limit: usize) -> Self {
        self.max_region_pixels = Some(limit);
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn max_region_pixels(&self) -> Option<usize> {
        self.max_region_pixels
    }

    /// Validate and decode image bytes
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes
    /// * `filename` - Optional upload filename, checked against the extension allow-list
    ///
    /// # Returns
    /// The decoded image or a client error describing why it was rejected
    pub fn decode(&self, bytes: &[u8], filename: Option<&str>) -> PixelResult<DecodedImage> {
        if let Some(name) = filename {
            debug!("Validating upload filename '{}'", name);
            validate_filename(name)?;
        }
        decode_image(bytes, &self.options)
    }

    /// Report the metadata of an uploaded image
    pub fn upload(&self, bytes: &[u8], filename: Option<&str>) -> PixelResult<ImageMetadata> {
        let decoded = self.decode(bytes, filename)?;
        Ok(decoded.metadata)
    }

    /// Extract the colors at a list of coordinates
    ///
    /// Coordinates outside the image are skipped.
    pub fn extract_pixels(&self, bytes: &[u8], coordinates: &[Coordinate]) -> PixelResult<PixelExtraction> {
        let decoded = self.decode(bytes, None)?;
        let pixels = extract_pixels(&decoded.image, coordinates);
        info!("Extracted {} of {} requested pixels", pixels.len(), coordinates.len());

        Ok(PixelExtraction {
            metadata: decoded.metadata,
            pixels,
        })
    }

    /// Extract every pixel of a region together with its statistics
    ///
    /// Fails with `InvalidRequest` when the clamped region covers more pixels
    /// than the configured limit.
    pub fn extract_region(&self, bytes: &[u8], region: Region) -> PixelResult<RegionExtraction> {
        let decoded = self.decode(bytes, None)?;
        self.check_region_size(&decoded, &region)?;
        let pixels = extract_region(&decoded.image, &region);
        let stats = compute_stats(&pixels);
        info!("Extracted {} pixels from region {:?}", pixels.len(), region);

        Ok(RegionExtraction {
            metadata: decoded.metadata,
            region,
            pixels,
            stats,
        })
    }

    /// Compute region statistics without returning the pixels
    pub fn region_stats(&self, bytes: &[u8], region: Region) -> PixelResult<RegionStatsReport> {
        let decoded = self.decode(bytes, None)?;
        let stats = compute_region_stats(&decoded.image, &region);
        info!("Computed statistics of region {:?}", region);

        Ok(RegionStatsReport {
            metadata: decoded.metadata,
            region,
            stats,
        })
    }

    /// Metadata, selected pixels and optional region statistics in one pass
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes
    /// * `filename` - Optional filename, checked against the extension allow-list
    /// * `coordinates` - Pixels to report
    /// * `region` - Optional region whose statistics are reported
    pub fn inspect(&self,
                   bytes: &[u8],
                   filename: Option<&str>,
                   coordinates: &[Coordinate],
                   region: Option<Region>) -> PixelResult<InspectReport> {
        let decoded = self.decode(bytes, filename)?;
        let pixels = extract_pixels(&decoded.image, coordinates);
        let stats = region.and_then(|r| compute_region_stats(&decoded.image, &r));

        Ok(InspectReport {
            metadata: decoded.metadata,
            pixels,
            region,
            stats,
        })
    }

    fn check_region_size(&self, decoded: &DecodedImage, region: &Region) -> PixelResult<()> {
        let limit = match self.max_region_pixels {
            Some(limit) => limit,
            None => return Ok(()),
        };
        let pixel_count = region
            .clamp(decoded.image.width(), decoded.image.height())
            .map_or(0, |clamped| clamped.pixel_count());

        if pixel_count > limit {
            return Err(PixelError::InvalidRequest(format!(
                "region covers {} pixels, more than the limit of {}", pixel_count, limit)));
        }
        Ok(())
    }

    /// Build an export document from client-selected pixels
    pub fn export(&self, request: ExportRequest) -> ExportResponse {
        debug!("Exporting {} selected pixels", request.pixels.len());

        ExportResponse {
            image_metadata: ExportMetadata {
                filename: request.filename,
                resolution: request.resolution,
                aspect_ratio: request.aspect_ratio,
            },
            selected_pixels: request.pixels,
        }
    }
}
