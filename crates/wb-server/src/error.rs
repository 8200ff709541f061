//! Error types for the HTTP server.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wb_site::SiteError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The URL named a category that does not exist.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Site error (document missing or unreadable).
    #[error(transparent)]
    Site(#[from] SiteError),

    /// I/O error while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File watcher could not be started.
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// Response body could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Host and port do not form a socket address.
    #[error("Invalid server address: {0}")]
    Address(#[from] AddrParseError),
}

impl ServerError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownCategory(_) => StatusCode::NOT_FOUND,
            Self::Site(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::UnknownCategory(category) => {
                json!({"error": "Unknown category", "category": category})
            }
            Self::Site(SiteError::NotFound { category, slug }) => json!({
                "error": "Document not found",
                "category": category.as_str(),
                "slug": slug,
            }),
            _ => json!({"error": self.to_string()}),
        };

        (status, axum::Json(body)).into_response()
    }
}
