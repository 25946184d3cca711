//! CLI command implementations
//!
//! This module contains the command-line interface definition and the
//! commands it dispatches to, using the Command pattern.

pub mod command_traits;
pub mod serve_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use serve_command::ServeCommand;
pub use inspect_command::InspectCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::ServerConfig;
use crate::errors::PixelResult;

/// Command-line interface definition
///
/// Without a subcommand the server is started, as with `serve`.
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("pixelmapper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect per-pixel color data of images over HTTP")
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write logs to this file instead of the console")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("serve")
                .about("Run the HTTP API")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Address to bind to")
                        .value_name("ADDR"),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Port to listen on")
                        .value_name("PORT")
                        .value_parser(value_parser!(u16)),
                )
                .arg(
                    Arg::new("static-dir")
                        .long("static-dir")
                        .help("Directory served under /static")
                        .value_name("DIR"),
                )
                .arg(
                    Arg::new("max-upload-bytes")
                        .long("max-upload-bytes")
                        .help("Maximum request body size in bytes")
                        .value_name("BYTES")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("max-region-pixels")
                        .long("max-region-pixels")
                        .help("Largest region /extract-region lists pixel by pixel")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            ClapCommand::new("inspect")
                .about("Print metadata and pixel colors of a local image as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input image file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("pixel")
                        .long("pixel")
                        .help("Pixel to report as 'x,y' (repeatable)")
                        .value_name("X,Y")
                        .allow_hyphen_values(true)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Region for statistics as 'start_x,start_y,end_x,end_y'")
                        .value_name("X0,Y0,X1,Y1")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print compact JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PixelMapperCommandFactory;

impl PixelMapperCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PixelMapperCommandFactory
    }
}

impl Default for PixelMapperCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for PixelMapperCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &ServerConfig) -> PixelResult<Box<dyn Command>> {
        match args.subcommand() {
            Some(("inspect", inspect_args)) => Ok(Box::new(InspectCommand::new(inspect_args, config)?)),
            // Default to serving
            _ => Ok(Box::new(ServeCommand::new(config))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags_override_config() {
        let matches = build_cli()
            .try_get_matches_from([
                "pixelmapper", "serve", "--port", "9000", "--host", "0.0.0.0",
                "--max-region-pixels", "500", "-v",
            ])
            .unwrap();
        let config = ServerConfig::load(&matches).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.max_region_pixels, 500);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_no_subcommand_uses_defaults() {
        let matches = build_cli().try_get_matches_from(["pixelmapper"]).unwrap();
        let config = ServerConfig::load(&matches).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = build_cli().try_get_matches_from(["pixelmapper", "serve", "--port", "99999"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_arguments_are_parsed() {
        let matches = build_cli()
            .try_get_matches_from([
                "pixelmapper", "inspect", "image.png",
                "--pixel", "1,2", "--pixel", "-1,0", "--region", "0,0,4,4",
            ])
            .unwrap();
        let (_, inspect_args) = matches.subcommand().unwrap();
        let command = InspectCommand::new(inspect_args, &ServerConfig::default());
        assert!(command.is_ok());
    }

    #[test]
    fn test_inspect_rejects_malformed_pixel() {
        let matches = build_cli()
            .try_get_matches_from(["pixelmapper", "inspect", "image.png", "--pixel", "1;2"])
            .unwrap();
        let (_, inspect_args) = matches.subcommand().unwrap();
        assert!(InspectCommand::new(inspect_args, &ServerConfig::default()).is_err());
    }

    #[test]
    fn test_inspect_reports_missing_file() {
        let matches = build_cli()
            .try_get_matches_from(["pixelmapper", "inspect", "/nonexistent/image.png"])
            .unwrap();
        let (_, inspect_args) = matches.subcommand().unwrap();
        let command = InspectCommand::new(inspect_args, &ServerConfig::default()).unwrap();
        assert!(matches!(command.report(), Err(crate::errors::PixelError::IoError(_))));
    }
}
