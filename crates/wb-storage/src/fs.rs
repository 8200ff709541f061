//! Filesystem storage backend.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::category::Category;
use crate::front_matter::parse_front_matter;
use crate::storage::{
    DocContent, DocsHierarchy, Storage, StorageError, WORKFLOW_FILE, WORKFLOW_SLUG,
    WORKFLOW_TITLE, format_title, validate_slug,
};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Markdown file extension.
const MD_EXT: &str = "md";

/// Filesystem storage rooted at a design-system context directory.
pub struct FsStorage {
    context_dir: PathBuf,
}

impl FsStorage {
    /// Create a storage for the given context directory.
    ///
    /// The directory is not required to exist; missing categories are
    /// simply absent from the hierarchy.
    #[must_use]
    pub fn new(context_dir: PathBuf) -> Self {
        Self { context_dir }
    }

    /// List markdown slugs of a category, or `None` if its directory is missing.
    fn list_category(&self, category: Category) -> Result<Option<Vec<String>>, StorageError> {
        let dir = self.context_dir.join(category.relative_dir());
        if !dir.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| StorageError::io(e, Some(dir.as_path())).with_backend(BACKEND))?;

        let slugs = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy().into_owned();
                let slug = name.strip_suffix(".md")?;
                // Hidden files can never be addressed by a valid slug
                (!slug.is_empty() && !slug.starts_with('.')).then(|| slug.to_owned())
            })
            .collect();

        Ok(Some(slugs))
    }

    /// Resolve `(category, slug)` to a file path relative to the context directory.
    fn resolve(&self, category: Category, slug: &str) -> Result<PathBuf, StorageError> {
        validate_slug(slug).map_err(|e| e.with_backend(BACKEND))?;

        if category == Category::Tasks && slug == WORKFLOW_SLUG {
            return self.find_file(Path::new(""), WORKFLOW_FILE);
        }

        self.find_file(&category.relative_dir(), &format!("{slug}.{MD_EXT}"))
    }

    /// Find `file_name` in `dir` (relative), exactly first, then ignoring case.
    fn find_file(&self, dir: &Path, file_name: &str) -> Result<PathBuf, StorageError> {
        let relative = dir.join(file_name);
        if self.context_dir.join(&relative).is_file() {
            return Ok(relative);
        }

        let abs_dir = self.context_dir.join(dir);
        let not_found = || StorageError::not_found(&relative).with_backend(BACKEND);
        let Ok(entries) = fs::read_dir(&abs_dir) else {
            return Err(not_found());
        };

        let wanted = file_name.to_lowercase();
        let mut matches: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.to_lowercase() == wanted)
            .collect();
        // Deterministic pick when several spellings coexist
        matches.sort();

        matches
            .into_iter()
            .next()
            .map(|name| dir.join(name))
            .ok_or_else(not_found)
    }

    fn file_mtime(&self, relative: &Path) -> Result<f64, StorageError> {
        let abs = self.context_dir.join(relative);
        let modified = fs::metadata(&abs)
            .and_then(|m| m.modified())
            .map_err(|e| StorageError::io(e, Some(relative)).with_backend(BACKEND))?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default())
    }
}

impl Storage for FsStorage {
    fn hierarchy(&self) -> Result<DocsHierarchy, StorageError> {
        let mut listing = Vec::new();
        for category in Category::ALL {
            if let Some(slugs) = self.list_category(category)? {
                listing.push((category, slugs));
            }
        }

        let has_workflow = self.context_dir.join(WORKFLOW_FILE).is_file();
        let hierarchy = DocsHierarchy::from_listing(listing, has_workflow);

        tracing::debug!(
            context_dir = %self.context_dir.display(),
            documents = hierarchy.len(),
            "Scanned documentation hierarchy"
        );

        Ok(hierarchy)
    }

    fn read(&self, category: Category, slug: &str) -> Result<DocContent, StorageError> {
        let relative = self.resolve(category, slug)?;
        let abs = self.context_dir.join(&relative);

        let text = fs::read_to_string(&abs)
            .map_err(|e| StorageError::io(e, Some(relative.as_path())).with_backend(BACKEND))?;
        let mtime = self.file_mtime(&relative)?;

        let parsed = parse_front_matter(&text);
        let mut warnings = Vec::new();
        if let Some(warning) = parsed.warning {
            tracing::warn!(path = %relative.display(), %warning, "Ignoring front matter");
            warnings.push(warning);
        }

        let title = if category == Category::Tasks && slug == WORKFLOW_SLUG {
            WORKFLOW_TITLE.to_owned()
        } else {
            format_title(slug)
        };

        Ok(DocContent {
            meta: parsed.front_matter,
            content: parsed.body.to_owned(),
            title,
            source_path: relative,
            mtime,
            warnings,
        })
    }

    fn mtime(&self, category: Category, slug: &str) -> Result<f64, StorageError> {
        let relative = self.resolve(category, slug)?;
        self.file_mtime(&relative)
    }

    fn source_dir(&self) -> Option<&Path> {
        Some(&self.context_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DocMetadata, StorageErrorKind};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn context() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "system/components/button.md", "# Button\n");
        write(dir.path(), "system/components/alert-dialog.md", "# Alert Dialog\n");
        write(dir.path(), "system/components/notes.txt", "not markdown");
        write(dir.path(), "system/tokens/colors.md", "---\ntitle: Color Tokens\n---\n# Colors\n");
        write(dir.path(), "tasks/create-component.md", "# Create\n");
        write(dir.path(), "WORKFLOW.md", "# Workflow\n");
        dir
    }

    #[test]
    fn test_hierarchy_lists_existing_categories() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let hierarchy = storage.hierarchy().unwrap();
        let categories: Vec<_> = hierarchy.categories().collect();

        assert_eq!(
            categories,
            vec![Category::Tokens, Category::Components, Category::Tasks]
        );
        let components: Vec<_> = hierarchy
            .get(Category::Components)
            .unwrap()
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(components, vec!["Alert Dialog", "Button"]);
    }

    #[test]
    fn test_hierarchy_workflow_first() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let hierarchy = storage.hierarchy().unwrap();
        let tasks = hierarchy.get(Category::Tasks).unwrap();

        assert_eq!(tasks[0], DocMetadata::workflow());
        assert_eq!(tasks[1].slug, "create-component");
    }

    #[test]
    fn test_hierarchy_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("system/icons")).unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let hierarchy = storage.hierarchy().unwrap();

        assert_eq!(hierarchy.get(Category::Icons).map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_hierarchy_missing_context_dir() {
        let storage = FsStorage::new(PathBuf::from("/nonexistent/context"));
        let hierarchy = storage.hierarchy().unwrap();
        assert_eq!(hierarchy.categories().count(), 0);
    }

    #[test]
    fn test_hierarchy_skips_hidden_and_directories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "system/rules/.draft.md", "hidden");
        write(dir.path(), "system/rules/nested.md/inner.md", "dir named like a file");
        write(dir.path(), "system/rules/tech-stack.md", "# Stack");
        let storage = FsStorage::new(dir.path().to_path_buf());

        let hierarchy = storage.hierarchy().unwrap();
        let slugs: Vec<_> = hierarchy
            .get(Category::Rules)
            .unwrap()
            .iter()
            .map(|d| d.slug.as_str())
            .collect();

        assert_eq!(slugs, vec!["tech-stack"]);
    }

    #[test]
    fn test_read_system_doc() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Components, "alert-dialog").unwrap();

        assert_eq!(doc.title, "Alert Dialog");
        assert_eq!(doc.content, "# Alert Dialog\n");
        assert_eq!(
            doc.source_path,
            PathBuf::from("system/components/alert-dialog.md")
        );
        assert!(doc.mtime > 0.0);
    }

    #[test]
    fn test_read_strips_front_matter() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Tokens, "colors").unwrap();

        assert_eq!(doc.meta.title.as_deref(), Some("Color Tokens"));
        assert_eq!(doc.content, "# Colors\n");
        // Title stays filename-derived; front matter is exposed separately
        assert_eq!(doc.title, "Colors");
    }

    #[test]
    fn test_read_root_category() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Tasks, "create-component").unwrap();

        assert_eq!(doc.source_path, PathBuf::from("tasks/create-component.md"));
        assert_eq!(doc.title, "Create Component");
    }

    #[test]
    fn test_read_workflow() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Tasks, "WORKFLOW").unwrap();

        assert_eq!(doc.title, "AI Agent Workflow");
        assert_eq!(doc.source_path, PathBuf::from("WORKFLOW.md"));
        assert_eq!(doc.content, "# Workflow\n");
    }

    #[test]
    fn test_read_workflow_missing() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "tasks/WORKFLOW.md", "not the root workflow");
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read(Category::Tasks, "WORKFLOW").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_read_case_insensitive_fallback() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "system/decisions/README.md", "# Decisions\n");
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Decisions, "readme").unwrap();

        assert_eq!(doc.source_path, PathBuf::from("system/decisions/README.md"));
        assert_eq!(doc.title, "Readme");
    }

    #[test]
    fn test_read_missing_doc() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read(Category::Components, "missing").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_read_missing_category_dir() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read(Category::Patterns, "layout").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_rejects_traversal() {
        let dir = context();
        write(dir.path(), "secret.md", "top secret");
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read(Category::Components, "../../secret").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_read_malformed_front_matter_warns() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "system/rules/broken.md", "---\ntitle: [oops\n---\nBody\n");
        let storage = FsStorage::new(dir.path().to_path_buf());

        let doc = storage.read(Category::Rules, "broken").unwrap();

        assert_eq!(doc.content, "Body\n");
        assert_eq!(doc.warnings.len(), 1);
    }

    #[test]
    fn test_mtime() {
        let dir = context();
        let storage = FsStorage::new(dir.path().to_path_buf());

        assert!(storage.mtime(Category::Components, "button").unwrap() > 0.0);
        assert!(storage.mtime(Category::Components, "nope").is_err());
    }

    #[test]
    fn test_source_dir() {
        let storage = FsStorage::new(PathBuf::from("/ctx"));
        assert_eq!(storage.source_dir(), Some(Path::new("/ctx")));
    }
}
