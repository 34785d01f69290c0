//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/tabs/", get(handlers::tabs::get_root_tabs))
        .route("/api/tabs/{*path}", get(handlers::tabs::get_tabs));

    let fragment_routes = Router::new()
        .route("/tabs/", get(handlers::tabs::get_root_fragment))
        .route("/tabs/{*path}", get(handlers::tabs::get_fragment));

    Router::new()
        .merge(api_routes)
        .merge(fragment_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use csstabs_html::{HtmlBackend, UrlBuilder};
    use csstabs_nav::StaticDocumentSource;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    const SITE: &str = r"
cssTabs:
  configTabs:
    mt_li: { class: active }
  mainTabs:
    - { module: dashboard, label: Dashboard }
    - { module: users, label: Users }
  subTabs:
    - { module: users, action: list, label: List, parentTab: users }
    - { module: users, action: edit, label: Edit, parentTab: users }
";

    const ADMIN: &str = r"
cssTabs:
  mainTabs:
    - { module: settings, label: Settings }
";

    fn router() -> Router {
        let source = StaticDocumentSource::new()
            .with_default(SITE)
            .with_document("admin", ADMIN)
            .with_document("broken", "cssTabs:\n  mainTabs:\n    - { label: Orphan }\n");
        let state = AppState::new(Box::new(source), HtmlBackend::new(UrlBuilder::new("/app")));
        create_router(Arc::new(state))
    }

    async fn get(uri: &str) -> Response {
        router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_api_tabs_resolves_route() {
        let response = get("/api/tabs/users/edit").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["route"]["module"], "users");
        assert_eq!(json["route"]["action"], "edit");
        assert_eq!(json["primary"][1]["label"], "Users");
        assert_eq!(json["primary"][1]["isActive"], true);
        assert_eq!(json["primary"][1]["linkTarget"], "users");
        assert_eq!(json["secondary"][0]["isActive"], false);
        assert_eq!(json["secondary"][1]["isActive"], true);
        assert_eq!(json["secondary"][1]["linkTarget"], "users/edit");
        assert!(
            json["html"]
                .as_str()
                .unwrap()
                .contains(r#"<a href="/app/users/edit">Edit</a>"#)
        );
    }

    #[tokio::test]
    async fn test_api_tabs_root() {
        let json = body_json(get("/api/tabs/").await).await;

        assert_eq!(json["route"]["module"], "");
        assert_eq!(json["primary"].as_array().unwrap().len(), 2);
        assert!(json["secondary"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_tabs_named_document() {
        let json = body_json(get("/api/tabs/settings?name=admin").await).await;

        assert_eq!(json["primary"][0]["label"], "Settings");
        assert_eq!(json["primary"][0]["isActive"], true);
    }

    #[tokio::test]
    async fn test_fragment_returns_html() {
        let response = get("/tabs/dashboard").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert_eq!(
            body_string(response).await,
            concat!(
                "<ul>",
                r#"<li class="active"><a href="/app/dashboard">Dashboard</a></li>"#,
                r#"<li><a href="/app/users">Users</a></li>"#,
                "</ul>",
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_document_is_not_found() {
        let response = get("/api/tabs/users?name=reports").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Tab document not found");
    }

    #[tokio::test]
    async fn test_malformed_document_is_server_error() {
        let response = get("/tabs/users?name=broken").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "mainTabs[0] has no module");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = get("/tabs/").await;

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
