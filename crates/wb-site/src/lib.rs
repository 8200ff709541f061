//! Site structure and page rendering for Workbench.
//!
//! This crate provides:
//! - [`Site`]: document hierarchy, navigation and cached page rendering
//! - [`previews`]: the static component and token preview registry
//! - [`todos`]: the human-input backlog shown on the overview page
//! - HTML page templates shared by the server and the static export
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use wb_site::{Site, SiteConfig};
//! use wb_storage::{Category, FsStorage};
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from(".design-system-context")));
//! let site = Site::new(storage, SiteConfig::default());
//!
//! let nav = site.navigation()?;
//! let page = site.render(Category::Components, "button")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod navigation;
mod page_cache;
pub mod previews;
mod site;
mod template;
pub mod todos;

pub use error::SiteError;
pub use navigation::{
    NavItem, NavSection, SIDEBAR_ORDER, build_navigation, category_icon, sidebar_rank,
};
pub use page_cache::{CachedPage, MemoryPageCache, NullPageCache, PageCache};
pub use site::{DocPage, Site, SiteConfig, SiteState};
pub use template::{
    DocTab, PageContext, SiteInfo, render_doc, render_home, render_not_found, render_preview_page,
};
pub use wb_renderer::TocEntry;
