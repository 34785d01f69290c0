//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use csstabs_nav::RenderError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Tab rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Render(e) if e.is_not_found() => (
                StatusCode::NOT_FOUND,
                json!({"error": "Tab document not found", "detail": e.to_string()}),
            ),
            Self::Render(e) => {
                tracing::error!(error = %e, "Tab rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
