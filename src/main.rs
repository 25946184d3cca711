use std::process;
use log::error;

use pixelmapper::commands::{build_cli, CommandFactory, PixelMapperCommandFactory};
use pixelmapper::config::ServerConfig;
use pixelmapper::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config = match ServerConfig::load(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    // validate() has already checked the level name
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Err(e) = Logger::init_global_logger(config.log_file.as_deref(), level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = PixelMapperCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
