//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use csstabs_config::{CliSettings, Config};

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Configuration flags shared by all commands.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover csstabs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plugin tab directory, searched first (overrides config).
    #[arg(long, env = "CSSTABS_PLUGIN_DIR")]
    plugin_dir: Option<PathBuf>,

    /// Application config directory, searched second (overrides config).
    #[arg(long, env = "CSSTABS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Prefix prepended to generated links (overrides config).
    #[arg(long)]
    link_prefix: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with these flags and extra server overrides applied.
    fn load(self, host: Option<String>, port: Option<u16>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            host,
            port,
            plugin_dir: self.plugin_dir,
            config_dir: self.config_dir,
            link_prefix: self.link_prefix,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
