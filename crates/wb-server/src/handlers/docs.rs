//! Document API endpoint.
//!
//! Returns a rendered document as JSON with conditional-request support.

use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::Serialize;
use wb_renderer::TocEntry;
use wb_site::DocPage;
use wb_storage::{Category, FrontMatter};

use crate::error::ServerError;
use crate::handlers::parse_category;
use crate::state::AppState;

/// Response for GET /api/docs/{category}/{slug}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocResponse {
    /// Parsed front matter.
    meta: FrontMatter,
    title: String,
    category: Category,
    slug: String,
    /// Markdown body without front matter.
    content: String,
    /// Rendered HTML.
    html: String,
    toc: Vec<TocEntry>,
    has_preview: bool,
    /// Source modification time (RFC 3339).
    last_modified: String,
}

impl DocResponse {
    fn new(page: DocPage, last_modified: &DateTime<Utc>) -> Self {
        Self {
            meta: page.front_matter,
            title: page.title,
            category: page.category,
            slug: page.slug,
            content: page.content,
            html: page.html,
            toc: page.toc,
            has_preview: page.has_preview,
            last_modified: last_modified.to_rfc3339(),
        }
    }
}

/// Handle GET /api/docs/{category}/{slug}.
pub(crate) async fn get_doc(
    Path((category, slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let category = parse_category(&category)?;
    let page = state.site.render(category, &slug)?;

    let last_modified = mtime_to_datetime(page.source_mtime);
    let http_date = last_modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string();

    // Hash the whole body so front-matter-only edits change the tag
    let body = serde_json::to_vec(&DocResponse::new(page, &last_modified))?;
    let etag = compute_etag(&state.version, &body);
    if headers
        .get(header::IF_NONE_MATCH)
        .is_some_and(|value| value.as_bytes() == etag.as_bytes())
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::ETAG, etag),
            (header::LAST_MODIFIED, http_date),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        body,
    )
        .into_response())
}

/// Convert an mtime in seconds since the epoch. Invalid values map to the epoch.
fn mtime_to_datetime(mtime: f64) -> DateTime<Utc> {
    let offset = Duration::try_from_secs_f64(mtime).unwrap_or_default();
    (UNIX_EPOCH + offset).into()
}

/// Compute `ETag` from version and response body.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, body: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(version.as_bytes());
    hasher.update(b":");
    hasher.update(body);
    format!("\"{}\"", &hex::encode(hasher.finalize())[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_changes_with_version_and_content() {
        let base = compute_etag("1.0.0", b"content");

        assert_ne!(base, compute_etag("1.0.1", b"content"));
        assert_ne!(base, compute_etag("1.0.0", b"other"));
        assert_eq!(base, compute_etag("1.0.0", b"content"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", b"content");

        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_mtime_to_datetime() {
        assert_eq!(
            mtime_to_datetime(1_700_000_000.5).to_rfc3339(),
            "2023-11-14T22:13:20.500+00:00"
        );
        assert_eq!(mtime_to_datetime(-1.0).timestamp(), 0);
        assert_eq!(mtime_to_datetime(f64::NAN).timestamp(), 0);
    }
}
