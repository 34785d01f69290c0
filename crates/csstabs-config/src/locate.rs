//! Tab document location.
//!
//! Tab documents follow a naming convention: the default document is
//! `ctSite.yml`, and a named document `admin` lives in `ctAdmin.yml`.
//! Each name is looked up in the plugin tab directory first, then in the
//! application config directory. The first existing file wins.

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Prefix of every tab document file name.
const DOCUMENT_PREFIX: &str = "ct";

/// Extension of tab document files.
const DOCUMENT_EXTENSION: &str = "yml";

/// Resolves tab document names to files on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentLocator {
    search_dirs: Vec<PathBuf>,
    default_document: String,
}

impl DocumentLocator {
    /// Create a locator searching `search_dirs` in order.
    ///
    /// `default_document` is the file stem used when no name is given
    /// (for example `ctSite`).
    #[must_use]
    pub fn new(search_dirs: Vec<PathBuf>, default_document: impl Into<String>) -> Self {
        Self {
            search_dirs,
            default_document: default_document.into(),
        }
    }

    /// Directories searched, in lookup order.
    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// File name for a document name.
    ///
    /// `None` or an empty name gives the default document; otherwise the
    /// name is capitalized and prefixed with `ct`.
    #[must_use]
    pub fn file_name(&self, name: Option<&str>) -> String {
        match name.filter(|n| !n.is_empty()) {
            None => format!("{}.{DOCUMENT_EXTENSION}", self.default_document),
            Some(name) => format!("{DOCUMENT_PREFIX}{}.{DOCUMENT_EXTENSION}", capitalize(name)),
        }
    }

    /// Find the file backing a document name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DocumentNotFound`] if no search directory
    /// contains the file.
    pub fn locate(&self, name: Option<&str>) -> Result<PathBuf, ConfigError> {
        let file_name = self.file_name(name);
        let candidates: Vec<PathBuf> = self
            .search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .collect();

        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            tracing::debug!(path = %found.display(), "Located tab document");
            return Ok(found.clone());
        }

        Err(ConfigError::DocumentNotFound {
            file_name,
            searched: candidates,
        })
    }
}

impl Default for DocumentLocator {
    fn default() -> Self {
        Self::new(
            vec![
                Path::new(crate::DEFAULT_PLUGIN_DIR).to_path_buf(),
                Path::new(crate::DEFAULT_CONFIG_DIR).to_path_buf(),
            ],
            crate::DEFAULT_DOCUMENT,
        )
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
