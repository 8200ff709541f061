//! HTTP server for Workbench.
//!
//! Serves server-rendered pages, a JSON API, preview fragments, the embedded
//! stylesheet and script, and a WebSocket endpoint for live reload.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use wb_server::{ServerConfig, run_server};
//!
//! # async fn run() -> Result<(), wb_server::ServerError> {
//! let config = ServerConfig {
//!     context_dir: PathBuf::from(".design-system-context"),
//!     live_reload_enabled: true,
//!     ..ServerConfig::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (wb-server)
//!                        │
//!                        ├─► HTML pages / JSON API ──► Site (hierarchy + render)
//!                        │
//!                        ├─► /ws/live-reload ◄── LiveReloadManager ◄── notify
//!                        │
//!                        └─► /assets/* (wb-assets)
//! ```

mod app;
mod error;
mod handlers;
mod live_reload;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;
use wb_site::{Site, SiteConfig, SiteInfo};
use wb_storage::FsStorage;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Design-system context directory.
    pub context_dir: PathBuf,
    /// Enable live reload.
    pub live_reload_enabled: bool,
    /// Glob patterns (relative to the context directory) that trigger reloads.
    pub watch_patterns: Vec<String>,
    /// Application version (part of the `ETag`).
    pub version: String,
    /// Branding for page chrome.
    pub site: SiteInfo,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            context_dir: PathBuf::from(".design-system-context"),
            live_reload_enabled: false,
            watch_patterns: vec!["**/*.md".to_owned()],
            version: String::new(),
            site: SiteInfo::default(),
        }
    }
}

impl ServerConfig {
    /// Create server configuration from the loaded `workbench.toml`.
    #[must_use]
    pub fn from_config(config: &wb_config::Config, version: &str) -> Self {
        let context_dir = &config.docs_resolved.context_dir;
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            context_dir: context_dir.clone(),
            live_reload_enabled: config.live_reload.enabled,
            watch_patterns: config.watch_patterns(),
            version: version.to_owned(),
            site: site_info(config),
        }
    }
}

/// Page branding from the loaded configuration.
#[must_use]
pub fn site_info(config: &wb_config::Config) -> SiteInfo {
    let context_dir = &config.docs_resolved.context_dir;
    SiteInfo {
        name: config.site.name.clone(),
        product: config.site.product.clone(),
        version: config.site.version.clone(),
        context_dir: context_dir
            .file_name()
            .map_or_else(|| context_dir.display().to_string(), |name| {
                format!("{}/", name.to_string_lossy())
            }),
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound or
/// the file watcher cannot be started.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let storage = Arc::new(FsStorage::new(config.context_dir.clone()));
    let site = Arc::new(Site::new(storage, SiteConfig::default()));

    // Scan once up front so a bad context directory shows in the log at startup
    match site.reload_if_needed() {
        Ok(state) => tracing::info!(
            documents = state.hierarchy.len(),
            dir = %config.context_dir.display(),
            "Loaded design-system context"
        ),
        Err(e) => tracing::warn!(error = %e, "Failed to scan context directory"),
    }

    let live_reload = if config.live_reload_enabled {
        let (tx, _rx) = broadcast::channel::<live_reload::ReloadEvent>(100);
        let mut manager = live_reload::LiveReloadManager::new(
            config.context_dir.clone(),
            &config.watch_patterns,
            Arc::clone(&site),
            tx,
        );
        manager.start()?;
        Some(manager)
    } else {
        None
    };

    let state = Arc::new(AppState {
        site,
        site_info: config.site.clone(),
        live_reload,
        version: config.version.clone(),
    });
    let app = app::create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_from_config_defaults() {
        let config = wb_config::Config::default();

        let server = ServerConfig::from_config(&config, "1.2.3");

        assert_eq!(server.port, 7979);
        assert_eq!(server.host, "127.0.0.1");
        assert!(server.live_reload_enabled);
        assert_eq!(server.watch_patterns, vec!["**/*.md".to_owned()]);
        assert_eq!(server.version, "1.2.3");
        assert_eq!(server.site.name, "Helix");
        assert_eq!(server.site.context_dir, ".design-system-context/");
        assert_eq!(server.context_dir, Path::new("./.design-system-context"));
    }
}
