//! `csstabs render` command implementation.

use clap::Args;
use csstabs_config::Config;
use csstabs_html::{HtmlBackend, UrlBuilder};
use csstabs_nav::{FsDocumentSource, ResolvedTab, RouteContext, TabRenderer};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Request path to render tabs for (e.g. `/users/edit`).
    path: String,

    /// Tab document name (default: the configured default document).
    #[arg(short, long)]
    name: Option<String>,

    /// Print the resolved tabs as JSON instead of HTML.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// JSON output of `csstabs render --json`.
#[derive(Serialize)]
struct RenderedTabs {
    route: RouteContext,
    primary: Vec<ResolvedTab>,
    secondary: Vec<ResolvedTab>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document cannot be rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(None, None)?;

        let rendered = render(&config, &self.path, self.name.as_deref(), self.json)?;
        output.result(&rendered)?;

        Ok(())
    }
}

/// Render the tabs of `path` as HTML or JSON.
fn render(
    config: &Config,
    path: &str,
    name: Option<&str>,
    json: bool,
) -> Result<String, CliError> {
    let renderer = TabRenderer::new(FsDocumentSource::new(config.locator()));
    let route = RouteContext::from_path(path);
    tracing::debug!(path, name, json, "Rendering tabs");
    let resolution = renderer.resolve(name, &route)?;

    if json {
        let rendered = RenderedTabs {
            route,
            primary: resolution.tabs.primary,
            secondary: resolution.tabs.secondary,
        };
        return Ok(serde_json::to_string_pretty(&rendered)?);
    }

    let html = HtmlBackend::new(UrlBuilder::new(config.links.prefix.clone()));
    Ok(html.render(&resolution.project()))
}
