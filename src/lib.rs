pub mod errors;
pub mod config;
pub mod decoder;
pub mod extractor;
pub mod server;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::PixelMapper;

pub use errors::{PixelError, PixelResult};
pub use config::ServerConfig;
pub use decoder::{decode_image, validate_image, DecodeOptions, DecodedImage, ImageMetadata};
pub use extractor::{compute_region_stats, compute_stats, extract_pixels, extract_region, get_pixel, Color, Coordinate, PixelImage, PixelSample, Region, RegionStats};
