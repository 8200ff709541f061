//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use wb_site::{NavSection, PageContext, Site, SiteInfo};

use crate::error::ServerError;
use crate::live_reload::LiveReloadManager;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation site (hierarchy + rendering).
    pub(crate) site: Arc<Site>,
    /// Branding for page chrome.
    pub(crate) site_info: SiteInfo,
    /// Live reload manager (if enabled).
    pub(crate) live_reload: Option<LiveReloadManager>,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}

/// URL prefix of the embedded assets.
pub(crate) const ASSET_PREFIX: &str = "/assets";

impl AppState {
    /// Check if live reload is enabled.
    #[must_use]
    pub(crate) fn live_reload_enabled(&self) -> bool {
        self.live_reload.is_some()
    }

    /// Current sidebar sections.
    pub(crate) fn navigation(&self) -> Result<Vec<NavSection>, ServerError> {
        Ok(self.site.navigation()?)
    }

    /// Layout context for one page render.
    pub(crate) fn page_context<'a>(
        &'a self,
        navigation: &'a [NavSection],
        active_path: Option<&'a str>,
    ) -> PageContext<'a> {
        PageContext {
            site: &self.site_info,
            navigation,
            active_path,
            live_reload: self.live_reload_enabled(),
            asset_prefix: ASSET_PREFIX,
            today: chrono::Local::now().date_naive(),
        }
    }
}
