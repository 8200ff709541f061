//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::category::Category;
use crate::front_matter::parse_front_matter;
use crate::storage::{
    DocContent, DocsHierarchy, Storage, StorageError, WORKFLOW_FILE, WORKFLOW_SLUG,
    WORKFLOW_TITLE, format_title, validate_slug,
};

const BACKEND: &str = "Mock";

type DocKey = (Category, String);

/// Mock storage for testing.
///
/// Stores documents in memory. Use the builder methods to configure the mock
/// with test data and the `set_*` methods to change it afterwards.
///
/// # Example
///
/// ```
/// use wb_storage::{Category, MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_doc(Category::Components, "button", "# Button")
///     .with_workflow("# Workflow");
///
/// let hierarchy = storage.hierarchy().unwrap();
/// assert!(hierarchy.contains(Category::Tasks, "WORKFLOW"));
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    docs: RwLock<BTreeMap<DocKey, String>>,
    mtimes: RwLock<HashMap<DocKey, f64>>,
    empty_categories: RwLock<BTreeSet<Category>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with raw markdown (front matter included).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_doc(self, category: Category, slug: &str, content: impl Into<String>) -> Self {
        self.set_doc(category, slug, content);
        self
    }

    /// Add the root-level workflow document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_workflow(self, content: impl Into<String>) -> Self {
        self.set_doc(Category::Tasks, WORKFLOW_SLUG, content);
        self
    }

    /// Set modification time for a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_mtime(self, category: Category, slug: &str, mtime: f64) -> Self {
        self.set_mtime(category, slug, mtime);
        self
    }

    /// Mark a category as present but empty.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_empty_category(self, category: Category) -> Self {
        self.empty_categories.write().unwrap().insert(category);
        self
    }

    /// Replace or insert a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_doc(&self, category: Category, slug: &str, content: impl Into<String>) {
        self.docs
            .write()
            .unwrap()
            .insert((category, slug.to_owned()), content.into());
    }

    /// Change the modification time of a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_mtime(&self, category: Category, slug: &str, mtime: f64) {
        self.mtimes
            .write()
            .unwrap()
            .insert((category, slug.to_owned()), mtime);
    }

    /// Remove a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove_doc(&self, category: Category, slug: &str) {
        self.docs
            .write()
            .unwrap()
            .remove(&(category, slug.to_owned()));
    }

    fn source_path(category: Category, slug: &str) -> PathBuf {
        if category == Category::Tasks && slug == WORKFLOW_SLUG {
            PathBuf::from(WORKFLOW_FILE)
        } else {
            category.relative_dir().join(format!("{slug}.md"))
        }
    }

    fn not_found(category: Category, slug: &str) -> StorageError {
        StorageError::not_found(Self::source_path(category, slug)).with_backend(BACKEND)
    }
}

impl Storage for MockStorage {
    fn hierarchy(&self) -> Result<DocsHierarchy, StorageError> {
        let docs = self.docs.read().unwrap();

        let mut by_category: BTreeMap<Category, Vec<String>> = self
            .empty_categories
            .read()
            .unwrap()
            .iter()
            .map(|c| (*c, Vec::new()))
            .collect();
        let mut has_workflow = false;

        for (category, slug) in docs.keys() {
            if *category == Category::Tasks && slug == WORKFLOW_SLUG {
                has_workflow = true;
                continue;
            }
            by_category.entry(*category).or_default().push(slug.clone());
        }

        // Present categories in scan order
        let listing = Category::ALL
            .into_iter()
            .filter_map(|c| by_category.remove(&c).map(|slugs| (c, slugs)));

        Ok(DocsHierarchy::from_listing(listing, has_workflow))
    }

    fn read(&self, category: Category, slug: &str) -> Result<DocContent, StorageError> {
        validate_slug(slug).map_err(|e| e.with_backend(BACKEND))?;

        let key = (category, slug.to_owned());
        let text = self
            .docs
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| Self::not_found(category, slug))?;
        let mtime = self
            .mtimes
            .read()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or_default();

        let parsed = parse_front_matter(&text);
        let title = if category == Category::Tasks && slug == WORKFLOW_SLUG {
            WORKFLOW_TITLE.to_owned()
        } else {
            format_title(slug)
        };

        Ok(DocContent {
            meta: parsed.front_matter,
            content: parsed.body.to_owned(),
            title,
            source_path: Self::source_path(category, slug),
            mtime,
            warnings: parsed.warning.into_iter().collect(),
        })
    }

    fn mtime(&self, category: Category, slug: &str) -> Result<f64, StorageError> {
        validate_slug(slug).map_err(|e| e.with_backend(BACKEND))?;

        let key = (category, slug.to_owned());
        if !self.docs.read().unwrap().contains_key(&key) {
            return Err(Self::not_found(category, slug));
        }
        Ok(self
            .mtimes
            .read()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or_default())
    }
}
