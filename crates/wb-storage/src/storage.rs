//! Storage trait, document types, and error types.
//!
//! Documents are addressed by `(category, slug)`, where the slug is the
//! markdown filename without its `.md` extension. Storage implementations
//! map that pair to their own representation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::category::Category;
use crate::front_matter::FrontMatter;

/// Slug of the workflow document stored at the context root.
pub const WORKFLOW_SLUG: &str = "WORKFLOW";

/// File name of the workflow document.
pub const WORKFLOW_FILE: &str = "WORKFLOW.md";

/// Display title of the workflow document.
pub const WORKFLOW_TITLE: &str = "AI Agent Workflow";

/// One entry of the documentation hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMetadata {
    /// Title derived from the slug.
    pub title: String,
    /// Filename without `.md`.
    pub slug: String,
    pub category: Category,
    /// `<category>/<file>.md`, or `WORKFLOW.md` for the workflow entry.
    pub full_path: String,
}

impl DocMetadata {
    /// Build an entry for a markdown file in `category`.
    #[must_use]
    pub fn new(category: Category, slug: &str) -> Self {
        Self {
            title: format_title(slug),
            slug: slug.to_owned(),
            category,
            full_path: format!("{category}/{slug}.md"),
        }
    }

    /// Entry for the root-level workflow document.
    #[must_use]
    pub fn workflow() -> Self {
        Self {
            title: WORKFLOW_TITLE.to_owned(),
            slug: WORKFLOW_SLUG.to_owned(),
            category: Category::Tasks,
            full_path: WORKFLOW_FILE.to_owned(),
        }
    }

    /// Page URL (`/docs/<category>/<slug>`).
    #[must_use]
    pub fn href(&self) -> String {
        doc_href(self.category, &self.slug)
    }
}

/// Page URL for a document.
#[must_use]
pub fn doc_href(category: impl std::fmt::Display, slug: &str) -> String {
    format!("/docs/{category}/{slug}")
}

/// Documents grouped by category, in scan order.
///
/// Only categories whose directory exists are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocsHierarchy {
    entries: Vec<(Category, Vec<DocMetadata>)>,
}

impl DocsHierarchy {
    /// Assemble a hierarchy from per-category slug listings.
    ///
    /// Slugs are sorted within each category. When `has_workflow` is set, the
    /// workflow entry is put first under `tasks`, creating the category if no
    /// `tasks/` directory exists.
    #[must_use]
    pub fn from_listing(
        listing: impl IntoIterator<Item = (Category, Vec<String>)>,
        has_workflow: bool,
    ) -> Self {
        let mut entries: Vec<(Category, Vec<DocMetadata>)> = listing
            .into_iter()
            .map(|(category, mut slugs)| {
                slugs.sort();
                let docs = slugs
                    .iter()
                    .map(|slug| DocMetadata::new(category, slug))
                    .collect();
                (category, docs)
            })
            .collect();

        if has_workflow {
            if let Some((_, docs)) = entries.iter_mut().find(|(c, _)| *c == Category::Tasks) {
                docs.insert(0, DocMetadata::workflow());
            } else {
                entries.push((Category::Tasks, vec![DocMetadata::workflow()]));
            }
        }

        Self { entries }
    }

    /// Documents of one category, if the category is present.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&[DocMetadata]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, docs)| docs.as_slice())
    }

    /// Iterate categories with their documents.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[DocMetadata])> {
        self.entries.iter().map(|(c, docs)| (*c, docs.as_slice()))
    }

    /// Present categories in scan order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Total number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, docs)| docs.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the hierarchy lists `(category, slug)`.
    #[must_use]
    pub fn contains(&self, category: Category, slug: &str) -> bool {
        self.get(category)
            .is_some_and(|docs| docs.iter().any(|d| d.slug == slug))
    }
}

/// Loaded document ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DocContent {
    /// Parsed front matter (empty if absent).
    pub meta: FrontMatter,
    /// Markdown body without front matter.
    pub content: String,
    /// Display title derived from the slug.
    pub title: String,
    /// Source file relative to the context directory.
    pub source_path: PathBuf,
    /// Modification time as seconds since Unix epoch.
    pub mtime: f64,
    /// Problems found while loading (e.g. malformed front matter).
    pub warnings: Vec<String>,
}

/// Convert a slug to a display title.
///
/// Splits on `-` and upper-cases the first character of each word. Other
/// characters are left alone, so `README` stays `README`.
///
/// # Examples
///
/// ```
/// use wb_storage::format_title;
///
/// assert_eq!(format_title("alert-dialog"), "Alert Dialog");
/// assert_eq!(format_title("README"), "README");
/// ```
#[must_use]
pub fn format_title(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for (i, word) in slug.split('-').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Check that a slug is a single, non-hidden path segment.
pub(crate) fn validate_slug(slug: &str) -> Result<(), StorageError> {
    let invalid = slug.is_empty()
        || slug.starts_with('.')
        || slug.contains(['/', '\\', '\0'])
        || slug.contains("..");
    if invalid {
        return Err(StorageError::new(StorageErrorKind::InvalidPath).with_path(slug));
    }
    Ok(())
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Document does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Slug or path is not a valid document identifier.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<&Path>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Whether the error means "no such document" (missing or invalid path).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            StorageErrorKind::NotFound | StorageErrorKind::InvalidPath
        )
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for the design-system context.
pub trait Storage: Send + Sync {
    /// Scan all categories and return the documentation hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be listed.
    fn hierarchy(&self) -> Result<DocsHierarchy, StorageError>;

    /// Load a document with its front matter parsed.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` or `InvalidPath` error when no document matches.
    fn read(&self, category: Category, slug: &str) -> Result<DocContent, StorageError>;

    /// Modification time of a document as seconds since Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` or `InvalidPath` error when no document matches.
    fn mtime(&self, category: Category, slug: &str) -> Result<f64, StorageError>;

    /// Root directory on disk, if the backend has one (used for file watching).
    fn source_dir(&self) -> Option<&Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("button"), "Button");
        assert_eq!(format_title("alert-dialog"), "Alert Dialog");
        assert_eq!(format_title("README"), "README");
        assert_eq!(format_title("tech-stack"), "Tech Stack");
        assert_eq!(format_title("a11y"), "A11y");
    }

    #[test]
    fn test_format_title_keeps_empty_words() {
        assert_eq!(format_title("a--b"), "A  B");
        assert_eq!(format_title(""), "");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("button").is_ok());
        assert!(validate_slug("WORKFLOW").is_ok());
        assert!(validate_slug("alert-dialog").is_ok());

        for bad in ["", ".hidden", "../secrets", "a/b", "a\\b", "x..y"] {
            let err = validate_slug(bad).unwrap_err();
            assert_eq!(err.kind, StorageErrorKind::InvalidPath, "slug {bad:?}");
        }
    }

    #[test]
    fn test_doc_metadata_new() {
        let doc = DocMetadata::new(Category::Components, "alert-dialog");
        assert_eq!(doc.title, "Alert Dialog");
        assert_eq!(doc.full_path, "components/alert-dialog.md");
        assert_eq!(doc.href(), "/docs/components/alert-dialog");
    }

    #[test]
    fn test_hierarchy_sorts_slugs() {
        let hierarchy = DocsHierarchy::from_listing(
            [(
                Category::Tokens,
                vec!["spacing".to_owned(), "colors".to_owned()],
            )],
            false,
        );

        let slugs: Vec<_> = hierarchy
            .get(Category::Tokens)
            .unwrap()
            .iter()
            .map(|d| d.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["colors", "spacing"]);
    }

    #[test]
    fn test_hierarchy_workflow_goes_first_in_tasks() {
        let hierarchy = DocsHierarchy::from_listing(
            [(Category::Tasks, vec!["create-component".to_owned()])],
            true,
        );

        let tasks = hierarchy.get(Category::Tasks).unwrap();
        assert_eq!(tasks[0], DocMetadata::workflow());
        assert_eq!(tasks[1].slug, "create-component");
    }

    #[test]
    fn test_hierarchy_workflow_creates_tasks() {
        let hierarchy =
            DocsHierarchy::from_listing([(Category::Rules, vec!["tech-stack".to_owned()])], true);

        let categories: Vec<_> = hierarchy.categories().collect();
        assert_eq!(categories, vec![Category::Rules, Category::Tasks]);
        assert_eq!(hierarchy.get(Category::Tasks).unwrap().len(), 1);
        assert!(hierarchy.contains(Category::Tasks, "WORKFLOW"));
    }

    #[test]
    fn test_hierarchy_empty_category_present() {
        let hierarchy = DocsHierarchy::from_listing([(Category::Icons, Vec::new())], false);

        assert_eq!(hierarchy.get(Category::Icons), Some(&[][..]));
        assert!(hierarchy.is_empty());
        assert!(hierarchy.get(Category::Rules).is_none());
    }

    #[test]
    fn test_doc_metadata_serialization() {
        let json = serde_json::to_value(DocMetadata::workflow()).unwrap();
        assert_eq!(json["title"], "AI Agent Workflow");
        assert_eq!(json["category"], "tasks");
        assert_eq!(json["fullPath"], "WORKFLOW.md");
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::not_found("system/components/nope.md").with_backend("Fs");
        assert_eq!(
            err.to_string(),
            "[Fs] Not found (path: system/components/nope.md)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io(io, Some(Path::new("tasks")));
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
