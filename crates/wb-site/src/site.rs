//! Site state and page rendering.
//!
//! [`Site`] loads the documentation hierarchy from a [`Storage`] backend,
//! keeps it as an immutable [`SiteState`] snapshot and renders documents on
//! request.
//!
//! # Thread Safety
//!
//! `Site` is designed for concurrent access:
//! - `state()` returns `Arc<SiteState>` with minimal locking (just Arc clone)
//! - `reload_if_needed()` uses double-checked locking
//! - `invalidate()` is lock-free (atomic flag)

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use wb_renderer::{MarkdownRenderer, TocEntry};
use wb_storage::{Category, DocsHierarchy, FrontMatter, Storage};

use crate::error::SiteError;
use crate::navigation::{NavSection, build_navigation};
use crate::page_cache::{CachedPage, MemoryPageCache, NullPageCache, PageCache};
use crate::previews;

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Keep rendered pages in memory, validated by source mtime.
    pub cache_pages: bool,
    /// Record the first H1 of each page.
    pub extract_title: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cache_pages: true,
            extract_title: true,
        }
    }
}

/// Snapshot of the documentation structure.
#[derive(Debug, Default)]
pub struct SiteState {
    pub hierarchy: DocsHierarchy,
    /// Sidebar sections in display order.
    pub navigation: Vec<NavSection>,
}

impl SiteState {
    #[must_use]
    pub fn new(hierarchy: DocsHierarchy) -> Self {
        let navigation = build_navigation(&hierarchy);
        Self {
            hierarchy,
            navigation,
        }
    }
}

/// A rendered documentation page.
#[derive(Clone, Debug, PartialEq)]
pub struct DocPage {
    pub category: Category,
    /// Slug of the file that was found (may differ in case from the request).
    pub slug: String,
    /// Front-matter title, or the title derived from the filename.
    pub title: String,
    pub html: String,
    pub toc: Vec<TocEntry>,
    /// Markdown body without front matter.
    pub content: String,
    pub front_matter: FrontMatter,
    /// First H1 of the body, if any.
    pub h1_title: Option<String>,
    /// Source file relative to the context directory.
    pub source_path: PathBuf,
    pub source_mtime: f64,
    /// Whether a preview is registered for the slug.
    pub has_preview: bool,
    /// Problems found while loading or rendering.
    pub warnings: Vec<String>,
    /// Whether the HTML came from the page cache.
    pub from_cache: bool,
}

impl DocPage {
    /// Page URL (`/docs/<category>/<slug>`).
    #[must_use]
    pub fn href(&self) -> String {
        wb_storage::doc_href(self.category, &self.slug)
    }
}

/// Documentation site: hierarchy snapshot plus page rendering.
///
/// Uses an internal `RwLock<Arc<SiteState>>` for the current snapshot, a
/// `Mutex<()>` to serialize reloads and an `AtomicBool` for validity.
pub struct Site {
    storage: Arc<dyn Storage>,
    reload_lock: Mutex<()>,
    current_state: RwLock<Arc<SiteState>>,
    cache_valid: AtomicBool,
    page_cache: Box<dyn PageCache>,
    extract_title: bool,
}

impl Site {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        let page_cache: Box<dyn PageCache> = if config.cache_pages {
            Box::new(MemoryPageCache::new())
        } else {
            Box::new(NullPageCache)
        };

        Self {
            storage,
            reload_lock: Mutex::new(()),
            current_state: RwLock::new(Arc::new(SiteState::default())),
            cache_valid: AtomicBool::new(false),
            page_cache,
            extract_title: config.extract_title,
        }
    }

    /// Storage backend of this site.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Current snapshot without checking validity.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn state(&self) -> Arc<SiteState> {
        Arc::clone(&self.current_state.read().unwrap())
    }

    /// Reload the hierarchy from storage if it was invalidated.
    ///
    /// Uses double-checked locking:
    /// 1. Fast path: return current snapshot if valid
    /// 2. Slow path: acquire `reload_lock`, recheck, then reload
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the hierarchy cannot be scanned.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload_if_needed(&self) -> Result<Arc<SiteState>, SiteError> {
        if self.cache_valid.load(Ordering::Acquire) {
            return Ok(self.state());
        }

        let _guard = self.reload_lock.lock().unwrap();

        if self.cache_valid.load(Ordering::Acquire) {
            return Ok(self.state());
        }

        let hierarchy = self.storage.hierarchy()?;
        tracing::debug!(documents = hierarchy.len(), "Reloaded site state");
        let state = Arc::new(SiteState::new(hierarchy));

        *self.current_state.write().unwrap() = Arc::clone(&state);
        self.cache_valid.store(true, Ordering::Release);

        Ok(state)
    }

    /// Documentation hierarchy, reloading if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the hierarchy cannot be scanned.
    pub fn hierarchy(&self) -> Result<DocsHierarchy, SiteError> {
        Ok(self.reload_if_needed()?.hierarchy.clone())
    }

    /// Sidebar sections, reloading if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the hierarchy cannot be scanned.
    pub fn navigation(&self) -> Result<Vec<NavSection>, SiteError> {
        Ok(self.reload_if_needed()?.navigation.clone())
    }

    /// Mark the hierarchy as stale. Readers keep their current snapshot.
    pub fn invalidate(&self) {
        self.cache_valid.store(false, Ordering::Release);
    }

    /// Drop the cached rendering of one page.
    pub fn invalidate_page(&self, category: Category, slug: &str) {
        self.page_cache.invalidate(&cache_key(category, slug));
    }

    /// Drop every cached page and mark the hierarchy as stale.
    pub fn invalidate_all(&self) {
        self.invalidate();
        self.page_cache.clear();
    }

    /// Load and render a document.
    ///
    /// Relative `.md` links resolve against `/docs/<category>/`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] if no document matches and
    /// [`SiteError::Storage`] if it cannot be read.
    pub fn render(&self, category: Category, slug: &str) -> Result<DocPage, SiteError> {
        let doc = self
            .storage
            .read(category, slug)
            .map_err(|e| SiteError::from_storage(e, category, slug))?;

        let found_slug = doc
            .source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(slug)
            .to_owned();
        let key = cache_key(category, &found_slug);
        let title = doc.meta.title.clone().unwrap_or(doc.title);
        let has_preview = previews::has_preview(&found_slug);

        let (rendered, from_cache) = match self.page_cache.get(&key, doc.mtime) {
            Some(cached) => {
                tracing::debug!(page = %key, "Page cache hit");
                (cached, true)
            }
            None => {
                let rendered = self.render_markdown(category, &doc.content, doc.mtime);
                self.page_cache.set(&key, rendered.clone());
                (rendered, false)
            }
        };

        let mut warnings = doc.warnings;
        warnings.extend(rendered.warnings);
        for warning in &warnings {
            tracing::warn!(page = %key, %warning, "Render warning");
        }

        Ok(DocPage {
            category,
            slug: found_slug,
            title,
            html: rendered.html,
            toc: rendered.toc,
            content: doc.content,
            front_matter: doc.meta,
            h1_title: rendered.h1_title,
            source_path: doc.source_path,
            source_mtime: doc.mtime,
            has_preview,
            warnings,
            from_cache,
        })
    }

    fn render_markdown(&self, category: Category, markdown: &str, mtime: f64) -> CachedPage {
        let mut renderer = MarkdownRenderer::new()
            .with_gfm(true)
            .with_base_path(format!("/docs/{category}"));
        if self.extract_title {
            renderer = renderer.with_title_extraction();
        }

        let result = renderer.render_markdown(markdown);
        CachedPage {
            html: result.html,
            h1_title: result.h1_title,
            toc: result.toc,
            warnings: result.warnings,
            source_mtime: mtime,
        }
    }
}

fn cache_key(category: Category, slug: &str) -> String {
    format!("{category}/{slug}")
}
