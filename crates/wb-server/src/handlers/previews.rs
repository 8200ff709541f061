//! Preview endpoints.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use wb_site::previews::{self, PreviewKind, PreviewTheme, THEMES};

#[derive(Serialize)]
struct PreviewInfo {
    slug: &'static str,
    kind: PreviewKind,
}

/// Response for GET /api/previews.
#[derive(Serialize)]
pub(crate) struct PreviewsResponse {
    previews: Vec<PreviewInfo>,
    themes: &'static [PreviewTheme],
}

/// Handle GET /api/previews.
pub(crate) async fn list_previews() -> Json<PreviewsResponse> {
    let previews = previews::entries()
        .map(|entry| PreviewInfo {
            slug: entry.slug,
            kind: entry.kind,
        })
        .collect();
    Json(PreviewsResponse {
        previews,
        themes: &THEMES,
    })
}

/// Handle GET /previews/{slug}: the preview fragment, or the placeholder
/// with 404 for unknown slugs.
pub(crate) async fn get_fragment(Path(slug): Path<String>) -> Response {
    match previews::get_preview(&slug) {
        Some(entry) => Html(entry.html()).into_response(),
        None => (StatusCode::NOT_FOUND, Html(previews::PLACEHOLDER_HTML)).into_response(),
    }
}
