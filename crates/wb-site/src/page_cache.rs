//! Page caching infrastructure.
//!
//! - [`PageCache`]: trait for cache implementations
//! - [`NullPageCache`]: no-op cache (caching disabled)
//! - [`MemoryPageCache`]: in-process cache of rendered pages

use std::collections::HashMap;
use std::sync::RwLock;

use wb_renderer::TocEntry;

/// Rendered output of a page, as stored in the cache.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedPage {
    pub html: String,
    /// First H1 of the body.
    pub h1_title: Option<String>,
    pub toc: Vec<TocEntry>,
    pub warnings: Vec<String>,
    /// Source file mtime at render time (for invalidation).
    pub source_mtime: f64,
}

/// Trait for page caching implementations.
pub trait PageCache: Send + Sync {
    /// Cached entry for `key`, if present and rendered from a source with
    /// the same mtime.
    fn get(&self, key: &str, source_mtime: f64) -> Option<CachedPage>;

    /// Store a rendered page.
    fn set(&self, key: &str, page: CachedPage);

    /// Remove one entry.
    fn invalidate(&self, key: &str);

    /// Remove every entry.
    fn clear(&self);
}

/// Always misses.
#[derive(Debug, Default)]
pub struct NullPageCache;

impl PageCache for NullPageCache {
    fn get(&self, _key: &str, _source_mtime: f64) -> Option<CachedPage> {
        None
    }

    fn set(&self, _key: &str, _page: CachedPage) {}

    fn invalidate(&self, _key: &str) {}

    fn clear(&self) {}
}

/// In-memory page cache validated by source mtime.
#[derive(Debug, Default)]
pub struct MemoryPageCache {
    entries: RwLock<HashMap<String, CachedPage>>,
}

impl MemoryPageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached pages.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PageCache for MemoryPageCache {
    fn get(&self, key: &str, source_mtime: f64) -> Option<CachedPage> {
        let entries = self.entries.read().unwrap();
        let page = entries.get(key)?;

        // 1ms tolerance, mtimes come from float conversions
        if (page.source_mtime - source_mtime).abs() > 0.001 {
            return None;
        }

        Some(page.clone())
    }

    fn set(&self, key: &str, page: CachedPage) {
        self.entries.write().unwrap().insert(key.to_owned(), page);
    }

    fn invalidate(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }

    fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str, mtime: f64) -> CachedPage {
        CachedPage {
            html: html.to_owned(),
            h1_title: None,
            toc: Vec::new(),
            warnings: Vec::new(),
            source_mtime: mtime,
        }
    }

    #[test]
    fn test_null_cache_always_misses() {
        let cache = NullPageCache;
        cache.set("components/button", page("<p>x</p>", 1.0));

        assert!(cache.get("components/button", 1.0).is_none());
    }

    #[test]
    fn test_memory_cache_hit() {
        let cache = MemoryPageCache::new();
        cache.set("components/button", page("<p>x</p>", 1.0));

        let hit = cache.get("components/button", 1.0).unwrap();

        assert_eq!(hit.html, "<p>x</p>");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memory_cache_mtime_mismatch() {
        let cache = MemoryPageCache::new();
        cache.set("components/button", page("<p>x</p>", 1.0));

        assert!(cache.get("components/button", 2.0).is_none());
        assert!(cache.get("components/button", 1.0005).is_some());
    }

    #[test]
    fn test_memory_cache_invalidate_and_clear() {
        let cache = MemoryPageCache::new();
        cache.set("a/x", page("x", 1.0));
        cache.set("a/y", page("y", 1.0));

        cache.invalidate("a/x");
        assert!(cache.get("a/x", 1.0).is_none());
        assert!(cache.get("a/y", 1.0).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }
}
