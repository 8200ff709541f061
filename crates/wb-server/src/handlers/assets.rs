//! Embedded stylesheet and script.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Handle GET /assets/{*path}.
pub(crate) async fn get_asset(Path(path): Path<String>) -> Response {
    let Some(content) = wb_assets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [
            (header::CONTENT_TYPE, wb_assets::mime_for(&path)),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        content.into_owned(),
    )
        .into_response()
}
