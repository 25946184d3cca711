//! Image decoding and format validation
//!
//! Wraps the `image` crate behind a narrow interface: an allow-list of
//! accepted formats, decoding with resource limits, and the metadata
//! reported back to clients.

mod formats;
mod metadata;
mod reader;

#[cfg(test)]
mod tests;

pub use formats::{format_name, registry, validate_filename, FormatEntry, FormatRegistry};
pub use metadata::{mode_name, ImageMetadata};
pub use reader::{decode_image, validate_image, DecodeOptions, DecodedImage, DEFAULT_MAX_DIMENSION};
