//! Route identity of the request being served.

use serde::Serialize;

/// Module and action of the current route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RouteContext {
    /// Route module (first path segment).
    pub module: String,
    /// Route action (second path segment), empty when absent.
    pub action: String,
}

impl RouteContext {
    /// Create a route context from its parts.
    #[must_use]
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }

    /// Derive the route identity from a request path.
    ///
    /// The first segment is the module, the second the action. Missing
    /// segments are empty and trailing segments (request parameters) are
    /// ignored.
    ///
    /// ```
    /// use csstabs_nav::RouteContext;
    ///
    /// let route = RouteContext::from_path("/users/edit/id/3");
    /// assert_eq!(route, RouteContext::new("users", "edit"));
    /// assert_eq!(RouteContext::from_path("/users"), RouteContext::new("users", ""));
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let mut segments = path.trim_start_matches('/').split('/');
        let module = segments.next().unwrap_or_default();
        let action = segments.next().unwrap_or_default();
        Self::new(module, action)
    }

    /// Check if the route names an action.
    #[must_use]
    pub fn has_action(&self) -> bool {
        !self.action.is_empty()
    }
}
