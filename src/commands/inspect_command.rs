//! Image inspection command
//!
//! Decodes a local image file and prints its metadata, the colors of the
//! requested pixels and, optionally, region statistics as JSON.

use std::fs;

use clap::ArgMatches;
use log::{debug, info};

use crate::api::{InspectReport, PixelMapper};
use crate::commands::command_traits::Command;
use crate::config::ServerConfig;
use crate::errors::{PixelError, PixelResult};
use crate::extractor::{Coordinate, Region};
use crate::utils::parse_utils::{parse_coordinate, parse_region};

/// Command for inspecting a local image
pub struct InspectCommand {
    /// Path to the input file
    input_file: String,
    /// Pixels to report
    coordinates: Vec<Coordinate>,
    /// Region whose statistics are reported
    region: Option<Region>,
    /// Print compact instead of pretty JSON
    compact: bool,
    mapper: PixelMapper,
}

impl InspectCommand {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - Matches of the `inspect` subcommand
    /// * `config` - Effective configuration, used for decoder limits
    ///
    /// # Returns
    /// A new InspectCommand instance or an error for malformed arguments
    pub fn new(args: &ArgMatches, config: &ServerConfig) -> PixelResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| PixelError::InvalidRequest("Missing input file".to_string()))?
            .clone();

        let coordinates = args.get_many::<String>("pixel")
            .map(|values| values.map(|v| parse_coordinate(v)).collect::<Result<Vec<_>, _>>())
            .transpose()
            .map_err(PixelError::InvalidRequest)?
            .unwrap_or_default();

        let region = args.get_one::<String>("region")
            .map(|v| parse_region(v))
            .transpose()
            .map_err(PixelError::InvalidRequest)?;

        Ok(InspectCommand {
            input_file,
            coordinates,
            region,
            compact: args.get_flag("compact"),
            mapper: PixelMapper::new(config.decode_options()),
        })
    }

    /// Build the report without printing it
    pub fn report(&self) -> PixelResult<InspectReport> {
        let bytes = fs::read(&self.input_file)?;
        debug!("Read {} bytes from {}", bytes.len(), self.input_file);

        self.mapper.inspect(&bytes, Some(&self.input_file), &self.coordinates, self.region)
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> PixelResult<()> {
        info!("Inspecting {}", self.input_file);
        let report = self.report()?;

        let output = if self.compact {
            serde_json::to_string(&report)
        } else {
            serde_json::to_string_pretty(&report)
        }.map_err(|e| PixelError::GenericError(format!("Failed to serialize report: {}", e)))?;

        println!("{}", output);
        Ok(())
    }
}
