//! Route identifier to href conversion.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in a path segment: A-Z a-z 0-9 - . _ ~
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds hrefs for route identifiers (`module` or `module/action`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    prefix: String,
}

impl UrlBuilder {
    /// Create a builder mounting routes under `prefix`.
    ///
    /// Trailing slashes of the prefix are dropped.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        Self { prefix }
    }

    /// Link prefix without trailing slash.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the href for `route`.
    ///
    /// ```
    /// use csstabs_html::UrlBuilder;
    ///
    /// let urls = UrlBuilder::new("/app");
    /// assert_eq!(urls.href("users/edit"), "/app/users/edit");
    /// assert_eq!(UrlBuilder::default().href("users"), "/users");
    /// ```
    #[must_use]
    pub fn href(&self, route: &str) -> String {
        let mut href = self.prefix.clone();
        for segment in route.split('/').filter(|s| !s.is_empty()) {
            href.push('/');
            href.extend(utf8_percent_encode(segment, SEGMENT_ENCODE_SET));
        }
        if href.is_empty() {
            href.push('/');
        }
        href
    }
}
