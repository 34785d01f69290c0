//! HTTP preview server for csstabs navigation.
//!
//! Serves the tabs of a request path so the navigation can be checked
//! without embedding it in an application:
//! - `GET /api/tabs/{path}`: resolved tabs and rendered HTML as JSON
//! - `GET /tabs/{path}`: the rendered HTML fragment
//!
//! Both accept `?name=` to select a tab document other than the default.
//! Documents are read from disk on every request, so edits show up on the
//! next reload.
//!
//! # Quick Start
//!
//! ```ignore
//! use csstabs_config::Config;
//! use csstabs_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     run_server(server_config_from_config(&config)).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use csstabs_config::DocumentLocator;
use csstabs_html::{HtmlBackend, UrlBuilder};
use csstabs_nav::FsDocumentSource;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Locator for tab documents.
    pub locator: DocumentLocator,
    /// Prefix prepended to generated hrefs.
    pub link_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            locator: DocumentLocator::default(),
            link_prefix: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = FsDocumentSource::new(config.locator.clone());
    let html = HtmlBackend::new(UrlBuilder::new(config.link_prefix.clone()));
    let state = Arc::new(AppState::new(Box::new(source), html));

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        search_dirs = ?config.locator.search_dirs(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from csstabs config.
#[must_use]
pub fn server_config_from_config(config: &csstabs_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        locator: config.locator(),
        link_prefix: config.links.prefix.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use csstabs_config::{CliSettings, Config};

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("csstabs.toml");
        std::fs::write(
            &config_path,
            "[server]\nport = 9000\n\n[links]\nprefix = \"/index.php\"\n",
        )
        .unwrap();
        let settings = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&config_path), Some(&settings)).unwrap();
        let server = server_config_from_config(&config);

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(server.link_prefix, "/index.php");
        assert_eq!(
            server.locator.search_dirs(),
            &[
                temp.path().join("plugins/csstabs/config"),
                temp.path().join("config"),
            ]
        );
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7878);
        assert!(config.link_prefix.is_empty());
        assert_eq!(
            config.locator.search_dirs(),
            &[
                PathBuf::from("plugins/csstabs/config"),
                PathBuf::from("config")
            ]
        );
    }
}
