//! HTML pages: overview, documents and the 404 page.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use wb_site::{DocTab, render_doc, render_home, render_not_found};

use crate::error::ServerError;
use crate::handlers::parse_category;
use crate::state::AppState;

/// Query string of a document page.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DocQuery {
    tab: Option<String>,
}

/// Handle GET /.
pub(crate) async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let navigation = state.navigation()?;
    let ctx = state.page_context(&navigation, Some("/"));
    Ok(Html(render_home(&ctx)))
}

/// Handle GET /docs/{category}/{slug}.
pub(crate) async fn doc(
    Path((category, slug)): Path<(String, String)>,
    Query(query): Query<DocQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let navigation = state.navigation()?;

    let rendered = parse_category(&category)
        .and_then(|category| state.site.render(category, &slug).map_err(ServerError::from));
    let page = match rendered {
        Ok(page) => page,
        Err(e) if e.status() == StatusCode::NOT_FOUND => {
            let path = format!("/docs/{category}/{slug}");
            return Ok(not_found_page(&state, &navigation, &path));
        }
        Err(e) => return Err(e),
    };

    let href = page.href();
    let ctx = state.page_context(&navigation, Some(&href));
    let tab = DocTab::from_query(query.tab.as_deref());
    Ok(Html(render_doc(&ctx, &page, tab)).into_response())
}

/// Fallback for unmatched routes.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let navigation = state.navigation().unwrap_or_default();
    not_found_page(&state, &navigation, uri.path())
}

fn not_found_page(state: &AppState, navigation: &[wb_site::NavSection], path: &str) -> Response {
    let ctx = state.page_context(navigation, None);
    (StatusCode::NOT_FOUND, Html(render_not_found(&ctx, path))).into_response()
}
