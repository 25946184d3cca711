//! Supported image format definitions
//!
//! The allow-list of upload formats lives in `formats.toml` and is parsed
//! once on first use.

use std::collections::HashMap;

use image::ImageFormat;
use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;

use crate::errors::{PixelError, PixelResult};

lazy_static! {
    // Parse the embedded format table on first access
    static ref FORMAT_REGISTRY: FormatRegistry = {
        let content = include_str!("../../formats.toml");
        FormatRegistry::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse format definitions: {}", e);
            FormatRegistry::default()
        })
    };
}

/// One accepted image format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatEntry {
    /// Upper-case format name, e.g. "PNG"
    pub name: String,
    /// Lower-case filename extensions without the dot
    pub extensions: Vec<String>,
    /// Whether pixels of this format can be decoded
    pub decodable: bool,
}

/// Allow-list of accepted formats, indexed by name and extension
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: Vec<FormatEntry>,
    by_name: HashMap<String, usize>,
    by_extension: HashMap<String, usize>,
}

impl FormatRegistry {
    /// Parse format definitions from a TOML string
    pub fn from_str(content: &str) -> PixelResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| PixelError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value.get("formats").and_then(|v| v.as_table())
            .ok_or_else(|| PixelError::ConfigError("Missing [formats] table".to_string()))?;

        let mut registry = FormatRegistry::default();
        for (name, definition) in table {
            let extensions = definition.get("extensions")
                .and_then(|v| v.as_array())
                .map(|values| values.iter()
                    .filter_map(|v| v.as_str())
                    .map(|ext| ext.to_lowercase())
                    .collect())
                .unwrap_or_default();
            let decodable = definition.get("decodable")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            registry.insert(FormatEntry {
                name: name.to_uppercase(),
                extensions,
                decodable,
            });
        }

        debug!("Loaded {} image format definitions", registry.formats.len());
        Ok(registry)
    }

    fn insert(&mut self, entry: FormatEntry) {
        let index = self.formats.len();
        self.by_name.insert(entry.name.clone(), index);
        for ext in &entry.extensions {
            self.by_extension.insert(ext.clone(), index);
        }
        self.formats.push(entry);
    }

    /// Look up a format by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FormatEntry> {
        self.by_name.get(&name.to_uppercase()).map(|&i| &self.formats[i])
    }

    /// Look up a format by filename extension (case-insensitive, no dot)
    pub fn for_extension(&self, extension: &str) -> Option<&FormatEntry> {
        self.by_extension.get(&extension.to_lowercase()).map(|&i| &self.formats[i])
    }

    /// All accepted formats, ordered by name
    pub fn formats(&self) -> &[FormatEntry] {
        &self.formats
    }
}

/// The process-wide format allow-list
pub fn registry() -> &'static FormatRegistry {
    &FORMAT_REGISTRY
}

/// Check a filename against the extension allow-list
///
/// The name must contain a `.` and the text after its last `.` must be the
/// extension of an accepted format. A bare `.png` counts as a png file.
pub fn validate_filename(filename: &str) -> PixelResult<()> {
    let accepted = filename
        .rsplit_once('.')
        .map(|(_, ext)| registry().for_extension(ext).is_some())
        .unwrap_or(false);

    if accepted {
        Ok(())
    } else {
        Err(PixelError::InvalidFileType(filename.to_string()))
    }
}

/// Upper-case name used for a detected format
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Pnm => "PNM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Dds => "DDS",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        ImageFormat::Hdr => "HDR",
        ImageFormat::OpenExr => "EXR",
        ImageFormat::Farbfeld => "FARBFELD",
        ImageFormat::Avif => "AVIF",
        ImageFormat::Qoi => "QOI",
        _ => "UNKNOWN",
    }
}
