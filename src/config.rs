//! Server configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line flags, each layer overriding the previous one.

use std::fs;
use std::net::{IpAddr, SocketAddr};

use clap::ArgMatches;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::decoder::{DecodeOptions, DEFAULT_MAX_DIMENSION};
use crate::errors::{PixelError, PixelResult};

/// Default maximum request body size (20 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Default largest region listed pixel by pixel (1024 x 1024)
pub const DEFAULT_MAX_REGION_PIXELS: usize = 1024 * 1024;

/// Settings for the HTTP server and the decoder it drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
    /// Maximum accepted image width and height
    pub max_image_dimension: u32,
    /// Maximum number of pixels `/extract-region` lists in one response
    pub max_region_pixels: usize,
    /// Log file path; logs go to the console when unset
    pub log_file: Option<String>,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: "frontend/public".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_image_dimension: DEFAULT_MAX_DIMENSION,
            max_region_pixels: DEFAULT_MAX_REGION_PIXELS,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> PixelResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> PixelResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PixelError::ConfigError(format!("Cannot read {}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }

    /// Build the effective configuration from parsed command-line arguments
    ///
    /// Reads `--config` when given, then applies the remaining flags of the
    /// top-level command and of the `serve` subcommand.
    pub fn load(args: &ArgMatches) -> PixelResult<Self> {
        let mut config = match args.get_one::<String>("config") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_args(args);
        if let Some(("serve", serve_args)) = args.subcommand() {
            config.apply_args(serve_args);
        }

        config.validate()?;
        Ok(config)
    }

    /// Override fields with the flags present in `args`
    fn apply_args(&mut self, args: &ArgMatches) {
        if let Some(host) = lookup::<String>(args, "host") {
            self.host = host;
        }
        if let Some(port) = lookup::<u16>(args, "port") {
            self.port = port;
        }
        if let Some(dir) = lookup::<String>(args, "static-dir") {
            self.static_dir = dir;
        }
        if let Some(limit) = lookup::<u64>(args, "max-upload-bytes") {
            self.max_upload_bytes = limit as usize;
        }
        if let Some(limit) = lookup::<u64>(args, "max-region-pixels") {
            self.max_region_pixels = limit as usize;
        }
        if let Some(path) = lookup::<String>(args, "log-file") {
            self.log_file = Some(path);
        }
        if lookup::<bool>(args, "verbose").unwrap_or(false) {
            self.log_level = "debug".to_string();
        }
    }

    /// Check values that cannot be expressed by their types alone
    pub fn validate(&self) -> PixelResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(PixelError::ConfigError("max_upload_bytes must be positive".to_string()));
        }
        if self.max_image_dimension == 0 {
            return Err(PixelError::ConfigError("max_image_dimension must be positive".to_string()));
        }
        if self.max_region_pixels == 0 {
            return Err(PixelError::ConfigError("max_region_pixels must be positive".to_string()));
        }
        self.level_filter()?;
        self.socket_addr()?;
        Ok(())
    }

    /// Socket address built from host and port
    pub fn socket_addr(&self) -> PixelResult<SocketAddr> {
        let ip: IpAddr = self.host.parse()
            .map_err(|_| PixelError::ConfigError(format!("Invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parsed log level
    pub fn level_filter(&self) -> PixelResult<LevelFilter> {
        self.log_level.parse()
            .map_err(|_| PixelError::ConfigError(format!("Invalid log level: {}", self.log_level)))
    }

    /// Decoder bounds derived from this configuration
    ///
    /// The allocation bound is four times the upload limit, never less
    /// than 512 MiB.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_dimension: self.max_image_dimension,
            max_alloc: Some((self.max_upload_bytes as u64).saturating_mul(4).max(512 * 1024 * 1024)),
        }
    }
}

/// Read an optional argument, tolerating ids the command does not define
fn lookup<T: Clone + Send + Sync + 'static>(args: &ArgMatches, id: &str) -> Option<T> {
    match args.try_get_one::<T>(id) {
        Ok(value) => value.cloned(),
        Err(_) => None,
    }
}
