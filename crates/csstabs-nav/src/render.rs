//! Render entry point.
//!
//! [`TabRenderer`] loads a tab document through a [`DocumentSource`] on
//! every call, resolves it against the route and projects the result.
//! Nothing is cached between calls, so each request works on its own
//! document.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use csstabs_config::{ConfigError, DocumentLocator};

use crate::document::{ConfigDocument, DocumentError};
use crate::projection::{Node, project};
use crate::resolver::{ResolvedTabs, resolve};
use crate::RouteContext;

/// Render error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The document could not be located.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The document could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The document is malformed.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// No in-memory document registered under this name.
    #[error("Unknown tab document: {0}")]
    UnknownDocument(String),
}

impl RenderError {
    /// Check if the error means the requested document does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Config(ConfigError::DocumentNotFound { .. }) | Self::UnknownDocument(_)
        )
    }
}

/// Source of tab documents.
pub trait DocumentSource: Send + Sync {
    /// Load the document registered under `name` (`None` for the default).
    fn load(&self, name: Option<&str>) -> Result<ConfigDocument, RenderError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn load(&self, name: Option<&str>) -> Result<ConfigDocument, RenderError> {
        (**self).load(name)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Arc<S> {
    fn load(&self, name: Option<&str>) -> Result<ConfigDocument, RenderError> {
        (**self).load(name)
    }
}

/// Loads tab documents from YAML files.
#[derive(Clone, Debug)]
pub struct FsDocumentSource {
    locator: DocumentLocator,
}

impl FsDocumentSource {
    /// Create a source resolving names through `locator`.
    #[must_use]
    pub fn new(locator: DocumentLocator) -> Self {
        Self { locator }
    }

    /// The locator in use.
    #[must_use]
    pub fn locator(&self) -> &DocumentLocator {
        &self.locator
    }
}

impl DocumentSource for FsDocumentSource {
    fn load(&self, name: Option<&str>) -> Result<ConfigDocument, RenderError> {
        let path = self.locator.locate(name)?;
        let content = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        let document = ConfigDocument::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            primary = document.primary_tabs.len(),
            secondary = document.secondary_tabs.len(),
            "Loaded tab document"
        );
        Ok(document)
    }
}

/// In-memory tab documents keyed by name.
///
/// The default document is registered under the empty name. Names resolve
/// to the same file names as on disk, so `admin` and `Admin` are one
/// document and `site` is the default. Documents are kept as YAML and
/// parsed on every load.
#[derive(Clone, Debug, Default)]
pub struct StaticDocumentSource {
    documents: HashMap<String, String>,
}

impl StaticDocumentSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default document.
    #[must_use]
    pub fn with_default(self, yaml: impl Into<String>) -> Self {
        self.with_document("", yaml)
    }

    /// Register a named document.
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, yaml: impl Into<String>) -> Self {
        let name: String = name.into();
        let key = document_key(Some(&name));
        self.documents.insert(key, yaml.into());
        self
    }
}

/// Key under which a static document is stored.
fn document_key(name: Option<&str>) -> String {
    DocumentLocator::default().file_name(name)
}

impl DocumentSource for StaticDocumentSource {
    fn load(&self, name: Option<&str>) -> Result<ConfigDocument, RenderError> {
        let yaml = self
            .documents
            .get(&document_key(name))
            .ok_or_else(|| RenderError::UnknownDocument(name.unwrap_or_default().to_owned()))?;
        Ok(ConfigDocument::from_yaml(yaml)?)
    }
}

/// A loaded document together with its resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Document as loaded for this call.
    pub document: ConfigDocument,
    /// Tabs resolved against the route.
    pub tabs: ResolvedTabs,
}

impl Resolution {
    /// Project the resolved tabs into a node tree.
    #[must_use]
    pub fn project(&self) -> Node {
        project(&self.document, &self.tabs)
    }
}

/// Renders tab structures for routes.
///
/// # Example
///
/// ```
/// use csstabs_nav::{RouteContext, StaticDocumentSource, TabRenderer};
///
/// let source = StaticDocumentSource::new().with_default(
///     "cssTabs:\n  mainTabs:\n    - { module: home, label: Home }\n",
/// );
/// let renderer = TabRenderer::new(source);
///
/// let tree = renderer.render(None, &RouteContext::from_path("/home")).unwrap();
/// assert_eq!(tree.links()[0].label, "Home");
/// ```
#[derive(Clone, Debug)]
pub struct TabRenderer<S> {
    source: S,
}

impl<S: DocumentSource> TabRenderer<S> {
    /// Create a renderer reading documents from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The document source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the document `name` and resolve it for `route`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable or malformed.
    pub fn resolve(
        &self,
        name: Option<&str>,
        route: &RouteContext,
    ) -> Result<Resolution, RenderError> {
        let document = self.source.load(name)?;
        let tabs = resolve(&document, route);
        Ok(Resolution { document, tabs })
    }

    /// Load the document `name`, resolve it for `route` and project it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable or malformed.
    pub fn render(&self, name: Option<&str>, route: &RouteContext) -> Result<Node, RenderError> {
        Ok(self.resolve(name, route)?.project())
    }
}
