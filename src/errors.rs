//! Custom error types for pixel mapping

use std::fmt;
use std::io;

use image::error::ImageError;

/// Error types surfaced by decoding, extraction and the HTTP layer
#[derive(Debug)]
pub enum PixelError {
    /// I/O error
    IoError(io::Error),
    /// Image data is recognized but not in the allow-list, or not recognized at all
    UnsupportedFormat(String),
    /// Upload filename has a disallowed extension
    InvalidFileType(String),
    /// Image data could not be decoded
    DecodeError(String),
    /// Malformed request payload (missing field, bad JSON, ...)
    InvalidRequest(String),
    /// Request body exceeds the configured upload limit
    UploadTooLarge(String),
    /// Configuration could not be loaded or is invalid
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl PixelError {
    /// Whether the error was caused by the caller's input
    ///
    /// Client errors map to HTTP 4xx, everything else to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PixelError::UnsupportedFormat(_)
                | PixelError::InvalidFileType(_)
                | PixelError::DecodeError(_)
                | PixelError::InvalidRequest(_)
                | PixelError::UploadTooLarge(_)
        )
    }
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelError::IoError(e) => write!(f, "I/O error: {}", e),
            PixelError::UnsupportedFormat(msg) => write!(f, "{}", msg),
            PixelError::InvalidFileType(name) => write!(f, "Invalid file type: {}", name),
            PixelError::DecodeError(msg) => write!(f, "Failed to decode image: {}", msg),
            PixelError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            PixelError::UploadTooLarge(msg) => write!(f, "Upload too large: {}", msg),
            PixelError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PixelError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PixelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PixelError {
    fn from(error: io::Error) -> Self {
        PixelError::IoError(error)
    }
}

impl From<ImageError> for PixelError {
    fn from(error: ImageError) -> Self {
        match error {
            ImageError::Unsupported(e) => PixelError::UnsupportedFormat(e.to_string()),
            ImageError::Limits(e) => PixelError::DecodeError(format!("image exceeds decoder limits ({})", e)),
            ImageError::IoError(e) => PixelError::DecodeError(e.to_string()),
            other => PixelError::DecodeError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for PixelError {
    fn from(error: serde_json::Error) -> Self {
        PixelError::InvalidRequest(error.to_string())
    }
}

impl From<toml::de::Error> for PixelError {
    fn from(error: toml::de::Error) -> Self {
        PixelError::ConfigError(error.to_string())
    }
}

impl From<String> for PixelError {
    fn from(msg: String) -> Self {
        PixelError::GenericError(msg)
    }
}

/// Result type for pixel mapping operations
pub type PixelResult<T> = Result<T, PixelError>;
