//! Configuration management for csstabs.
//!
//! Parses `csstabs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The resolved
//! configuration tells the rest of the workspace where tab documents
//! live ([`DocumentLocator`]), how links are prefixed and where the
//! preview server binds.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `links.prefix`

mod expand;
mod locate;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use locate::DocumentLocator;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "csstabs.toml";

/// Plugin tab directory, searched first.
pub(crate) const DEFAULT_PLUGIN_DIR: &str = "plugins/csstabs/config";

/// Application config directory, searched second.
pub(crate) const DEFAULT_CONFIG_DIR: &str = "config";

/// Stem of the document rendered when no name is given.
pub(crate) const DEFAULT_DOCUMENT: &str = "ctSite";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override plugin tab directory.
    pub plugin_dir: Option<PathBuf>,
    /// Override application config directory.
    pub config_dir: Option<PathBuf>,
    /// Override link prefix.
    pub link_prefix: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Link generation configuration.
    pub links: LinksConfig,
    /// Tab document configuration (directories are relative strings from TOML).
    tabs: TabsConfigRaw,

    /// Resolved tab document configuration (set after loading).
    #[serde(skip)]
    pub tabs_resolved: TabsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Link generation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Prefix prepended to every generated href (e.g. `/index.php`).
    pub prefix: String,
}

/// Raw tab document configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TabsConfigRaw {
    plugin_dir: Option<String>,
    config_dir: Option<String>,
    default_document: Option<String>,
}

/// Resolved tab document configuration with absolute directories.
#[derive(Debug, Default)]
pub struct TabsConfig {
    /// Plugin tab directory (searched first).
    pub plugin_dir: PathBuf,
    /// Application config directory (searched second).
    pub config_dir: PathBuf,
    /// Stem of the default document file.
    pub default_document: String,
}

impl TabsConfig {
    /// Build the locator for this configuration.
    #[must_use]
    pub fn locator(&self) -> DocumentLocator {
        DocumentLocator::new(
            vec![self.plugin_dir.clone(), self.config_dir.clone()],
            self.default_document.clone(),
        )
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No search directory holds the requested tab document.
    #[error("Tab document {file_name} not found (searched: {})", display_paths(.searched))]
    DocumentNotFound {
        /// Document file name (e.g. `ctAdmin.yml`).
        file_name: String,
        /// Candidate paths, in lookup order.
        searched: Vec<PathBuf>,
    },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`TABS_HOST`} not set").
        message: String,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `csstabs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Locator for tab documents.
    #[must_use]
    pub fn locator(&self) -> DocumentLocator {
        self.tabs_resolved.locator()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(plugin_dir) = &settings.plugin_dir {
            self.tabs_resolved.plugin_dir.clone_from(plugin_dir);
        }
        if let Some(config_dir) = &settings.config_dir {
            self.tabs_resolved.config_dir.clone_from(config_dir);
        }
        if let Some(prefix) = &settings.link_prefix {
            self.links.prefix.clone_from(prefix);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            links: LinksConfig::default(),
            tabs: TabsConfigRaw::default(),
            tabs_resolved: TabsConfig {
                plugin_dir: base.join(DEFAULT_PLUGIN_DIR),
                config_dir: base.join(DEFAULT_CONFIG_DIR),
                default_document: DEFAULT_DOCUMENT.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        require_non_empty(&self.tabs_resolved.default_document, "tabs.default_document")?;

        if self.links.prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "links.prefix must not end with '/'".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.links.prefix = expand::expand_env(&self.links.prefix, "links.prefix")?;
        Ok(())
    }

    /// Resolve relative directories against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.tabs_resolved = TabsConfig {
            plugin_dir: resolve(self.tabs.plugin_dir.as_deref(), DEFAULT_PLUGIN_DIR),
            config_dir: resolve(self.tabs.config_dir.as_deref(), DEFAULT_CONFIG_DIR),
            default_document: self
                .tabs
                .default_document
                .clone()
                .unwrap_or_else(|| DEFAULT_DOCUMENT.to_owned()),
        };
    }
}
