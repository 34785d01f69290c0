//! `csstabs serve` command implementation.

use clap::Args;
use csstabs_server::{run_server, server_config_from_config};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and document load logs).
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(self.host, self.port)?;

        output.highlight(&format!(
            "Serving tabs on http://{}:{}/tabs/",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Tab documents: {}, then {}",
            config.tabs_resolved.plugin_dir.display(),
            config.tabs_resolved.config_dir.display()
        ));
        if !config.links.prefix.is_empty() {
            output.info(&format!("Link prefix: {}", config.links.prefix));
        }

        run_server(server_config_from_config(&config))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
