//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::live_reload;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/docs/{category}/{slug}", get(handlers::docs::get_doc))
        .route("/api/todos", get(handlers::todos::get_todos))
        .route("/api/previews", get(handlers::previews::list_previews));

    let page_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/docs/{category}/{slug}", get(handlers::pages::doc))
        .route("/previews/{slug}", get(handlers::previews::get_fragment))
        .route("/assets/{*path}", get(handlers::assets::get_asset));

    let mut router = Router::new().merge(api_routes).merge(page_routes);

    if state.live_reload_enabled() {
        router = router.route("/ws/live-reload", get(live_reload::ws_handler));
    }

    let router = router
        .fallback(handlers::pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    security::with_security_headers(router).with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use wb_site::{Site, SiteConfig, SiteInfo};
    use wb_storage::{Category, FsStorage, MockStorage};

    use super::*;

    fn app_with(storage: MockStorage) -> Router {
        let site = Arc::new(Site::new(Arc::new(storage), SiteConfig::default()));

        create_router(Arc::new(AppState {
            site,
            site_info: SiteInfo::default(),
            live_reload: None,
            version: "test".to_owned(),
        }))
    }

    fn app() -> Router {
        let storage = MockStorage::new()
            .with_doc(
                Category::Components,
                "button",
                "---\ntitle: Button\ndescription: Clickable action\n---\n# Button\n\n## Usage\n\nPress it.",
            )
            .with_doc(Category::Components, "custom-widget", "# Custom widget")
            .with_doc(Category::Rules, "tech-stack", "# Tech Stack")
            .with_workflow("# Workflow");
        app_with(storage)
    }

    async fn send(
        app: Router,
        request: Request<Body>,
    ) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        send(app(), Request::get(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, headers, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert!(body.contains("Needs Human Input"));
        assert!(body.contains(r#"href="/docs/tasks/WORKFLOW""#));
    }

    #[tokio::test]
    async fn test_security_headers() {
        let (_, headers, _) = get("/").await;

        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert!(headers.contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_doc_page_with_preview_tab() {
        let (status, _, body) = get("/docs/components/button?tab=preview").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Button</h1>"));
        assert!(body.contains(r#"data-tab="preview" aria-selected="true""#));
        assert!(body.contains("preview-shell"));
    }

    #[tokio::test]
    async fn test_doc_page_case_insensitive_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let components = dir.path().join("system/components");
        std::fs::create_dir_all(&components).unwrap();
        std::fs::write(components.join("Button.md"), "# Button\n\nClickable action").unwrap();

        let site = Arc::new(Site::new(
            Arc::new(FsStorage::new(dir.path().to_path_buf())),
            SiteConfig::default(),
        ));
        let app = create_router(Arc::new(AppState {
            site,
            site_info: SiteInfo::default(),
            live_reload: None,
            version: "test".to_owned(),
        }));

        let request = Request::get("/docs/components/button").body(Body::empty()).unwrap();
        let (status, _, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Clickable action"));
    }

    #[tokio::test]
    async fn test_doc_page_missing() {
        let (status, _, body) = get("/docs/components/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_doc_page_unknown_category() {
        let (status, _, body) = get("/docs/widgets/button").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/docs/widgets/button"));
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let (status, _, body) = get("/nothing/here").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_api_doc_json() {
        let (status, headers, body) = get("/api/docs/components/button").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers.contains_key(header::ETAG));
        assert!(headers.contains_key(header::LAST_MODIFIED));

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["title"], "Button");
        assert_eq!(json["category"], "components");
        assert_eq!(json["slug"], "button");
        assert_eq!(json["meta"]["description"], "Clickable action");
        assert_eq!(json["hasPreview"], true);
        assert_eq!(json["toc"][0]["id"], "usage");
        assert!(json["content"].as_str().unwrap().starts_with("# Button"));
    }

    #[tokio::test]
    async fn test_api_doc_not_modified() {
        let (_, headers, _) = get("/api/docs/components/button").await;
        let etag = headers[header::ETAG].clone();

        let request = Request::get("/api/docs/components/button")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::NOT_MODIFIED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_api_doc_etag_tracks_front_matter() {
        let doc = |title: &str| {
            MockStorage::new().with_doc(
                Category::Tokens,
                "colors",
                format!("---\ntitle: {title}\n---\n# Colors"),
            )
        };
        let request = || {
            Request::get("/api/docs/tokens/colors")
                .body(Body::empty())
                .unwrap()
        };

        let (_, alpha, _) = send(app_with(doc("Alpha")), request()).await;
        let (_, beta, body) = send(app_with(doc("Beta")), request()).await;

        assert_ne!(alpha[header::ETAG], beta[header::ETAG]);
        assert!(body.contains(r#""title":"Beta""#));

        let stale = Request::get("/api/docs/tokens/colors")
            .header(header::IF_NONE_MATCH, alpha[header::ETAG].clone())
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(app_with(doc("Beta")), stale).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_doc_missing() {
        let (status, _, body) = get("/api/docs/components/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Document not found");
        assert_eq!(json["slug"], "missing");
    }

    #[tokio::test]
    async fn test_api_navigation_order() {
        let (status, _, body) = get("/api/navigation").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let categories: Vec<_> = json["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["category"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(categories, vec!["tasks", "rules", "components"]);
        assert_eq!(json["sections"][0]["items"][0]["title"], "AI Agent Workflow");
    }

    #[tokio::test]
    async fn test_api_todos_filter() {
        let (status, _, body) = get("/api/todos?category=a11y").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 4);
        assert_eq!(json["stats"]["total"], 10);
    }

    #[tokio::test]
    async fn test_api_todos_invalid_filter() {
        let (status, _, _) = get("/api/todos?priority=urgent").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_previews() {
        let (_, _, body) = get("/api/previews").await;

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["previews"].as_array().unwrap().len(), 60);
        assert_eq!(json["themes"][0]["id"], "higher-ed");
    }

    #[tokio::test]
    async fn test_preview_fragment() {
        let (status, _, body) = get("/previews/badge").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("preview-shell"));

        let (status, _, body) = get("/previews/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Preview coming soon"));
    }

    #[tokio::test]
    async fn test_assets() {
        let (status, headers, _) = get("/assets/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/css");

        let (status, _, _) = get("/assets/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_live_reload_route_disabled() {
        let (status, _, _) = get("/ws/live-reload").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
