//! Application state.
//!
//! Shared state for all request handlers.

use csstabs_html::HtmlBackend;
use csstabs_nav::{DocumentSource, TabRenderer};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Loads and resolves tab documents per request.
    pub(crate) renderer: TabRenderer<Box<dyn DocumentSource>>,
    /// Serializes resolved tabs to HTML.
    pub(crate) html: HtmlBackend,
}

impl AppState {
    pub(crate) fn new(source: Box<dyn DocumentSource>, html: HtmlBackend) -> Self {
        Self {
            renderer: TabRenderer::new(source),
            html,
        }
    }
}
