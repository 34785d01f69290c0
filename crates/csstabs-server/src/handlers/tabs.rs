//! Tabs endpoints.
//!
//! Resolve the tab document for a request path and return either the
//! resolved tabs as JSON or the rendered HTML fragment.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use csstabs_nav::{ResolvedTab, RouteContext};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters shared by all tabs endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TabsQuery {
    /// Tab document name (default document when absent or empty).
    name: Option<String>,
}

impl TabsQuery {
    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Response for GET /api/tabs/{path}.
#[derive(Serialize)]
pub(crate) struct TabsResponse {
    /// Route derived from the request path.
    route: RouteContext,
    /// Resolved primary tabs.
    primary: Vec<ResolvedTab>,
    /// Resolved sub-tabs of the active group.
    secondary: Vec<ResolvedTab>,
    /// Rendered HTML fragment.
    html: String,
}

/// Handle GET /api/tabs/ (root route).
pub(crate) async fn get_root_tabs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TabsQuery>,
) -> Result<Json<TabsResponse>, ServerError> {
    get_tabs_impl("", &state, &query)
}

/// Handle GET /api/tabs/{path}.
pub(crate) async fn get_tabs(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<TabsQuery>,
) -> Result<Json<TabsResponse>, ServerError> {
    get_tabs_impl(&path, &state, &query)
}

/// Handle GET /tabs/ (root route).
pub(crate) async fn get_root_fragment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TabsQuery>,
) -> Result<Html<String>, ServerError> {
    get_fragment_impl("", &state, &query)
}

/// Handle GET /tabs/{path}.
pub(crate) async fn get_fragment(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<TabsQuery>,
) -> Result<Html<String>, ServerError> {
    get_fragment_impl(&path, &state, &query)
}

fn get_tabs_impl(
    path: &str,
    state: &AppState,
    query: &TabsQuery,
) -> Result<Json<TabsResponse>, ServerError> {
    let route = RouteContext::from_path(path);
    let resolution = state.renderer.resolve(query.name(), &route)?;
    let html = state.html.render(&resolution.project());

    Ok(Json(TabsResponse {
        route,
        primary: resolution.tabs.primary,
        secondary: resolution.tabs.secondary,
        html,
    }))
}

fn get_fragment_impl(
    path: &str,
    state: &AppState,
    query: &TabsQuery,
) -> Result<Html<String>, ServerError> {
    let route = RouteContext::from_path(path);
    let tree = state.renderer.render(query.name(), &route)?;
    Ok(Html(state.html.render(&tree)))
}
