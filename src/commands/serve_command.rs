//! Command that runs the HTTP server

use log::info;

use crate::commands::command_traits::Command;
use crate::config::ServerConfig;
use crate::errors::PixelResult;
use crate::server;

/// Command for serving the pixel mapping API
pub struct ServeCommand {
    config: ServerConfig,
}

impl ServeCommand {
    pub fn new(config: &ServerConfig) -> Self {
        ServeCommand { config: config.clone() }
    }
}

impl Command for ServeCommand {
    fn execute(&self) -> PixelResult<()> {
        info!("Starting server on {}:{} (upload limit {} bytes)",
              self.config.host, self.config.port, self.config.max_upload_bytes);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(server::serve(self.config.clone()))
    }
}
