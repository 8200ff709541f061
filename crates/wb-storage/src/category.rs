//! Documentation categories and their on-disk locations.
//!
//! The context directory has a fixed layout:
//!
//! ```text
//! .design-system-context/
//! ├── WORKFLOW.md            (listed first under "tasks")
//! ├── system/
//! │   ├── rules/*.md
//! │   ├── tokens/*.md
//! │   ├── components/*.md
//! │   ├── patterns/*.md
//! │   ├── icons/*.md
//! │   ├── decisions/*.md
//! │   └── a11y/*.md
//! └── tasks/*.md
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Directory holding the system categories.
pub const SYSTEM_DIR: &str = "system";

/// Documentation category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rules,
    Tokens,
    Components,
    Patterns,
    Icons,
    Decisions,
    A11y,
    Tasks,
}

/// Where a category lives relative to the context directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryRoot {
    /// Under `system/<category>/`.
    System,
    /// Directly under `<category>/`.
    Context,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Categories under `system/`, in scan order.
    pub const SYSTEM: [Self; 7] = [
        Self::Rules,
        Self::Tokens,
        Self::Components,
        Self::Patterns,
        Self::Icons,
        Self::Decisions,
        Self::A11y,
    ];

    /// Categories at the root of the context directory, in scan order.
    pub const ROOT: [Self; 1] = [Self::Tasks];

    /// All categories in scan order (system first, then root).
    pub const ALL: [Self; 8] = [
        Self::Rules,
        Self::Tokens,
        Self::Components,
        Self::Patterns,
        Self::Icons,
        Self::Decisions,
        Self::A11y,
        Self::Tasks,
    ];

    /// URL and directory name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Tokens => "tokens",
            Self::Components => "components",
            Self::Patterns => "patterns",
            Self::Icons => "icons",
            Self::Decisions => "decisions",
            Self::A11y => "a11y",
            Self::Tasks => "tasks",
        }
    }

    #[must_use]
    pub fn root(self) -> CategoryRoot {
        match self {
            Self::Tasks => CategoryRoot::Context,
            _ => CategoryRoot::System,
        }
    }

    /// Directory of this category relative to the context directory.
    #[must_use]
    pub fn relative_dir(self) -> PathBuf {
        match self.root() {
            CategoryRoot::System => Path::new(SYSTEM_DIR).join(self.as_str()),
            CategoryRoot::Context => PathBuf::from(self.as_str()),
        }
    }

    /// Label shown next to a page title, e.g. `system/components` or `tasks`.
    #[must_use]
    pub fn location_label(self) -> String {
        match self.root() {
            CategoryRoot::System => format!("{SYSTEM_DIR}/{}", self.as_str()),
            CategoryRoot::Context => self.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Map a file path relative to the context directory to `(category, slug)`.
///
/// Returns `None` for files outside the documented layout.
///
/// ```
/// use std::path::Path;
/// use wb_storage::{Category, doc_for_source};
///
/// assert_eq!(
///     doc_for_source(Path::new("system/components/button.md")),
///     Some((Category::Components, "button".to_owned()))
/// );
/// ```
#[must_use]
pub fn doc_for_source(relative: &Path) -> Option<(Category, String)> {
    if relative.extension().is_none_or(|e| e != "md") {
        return None;
    }
    let slug = relative.file_stem()?.to_str()?.to_owned();
    let parent = relative.parent()?;

    if parent.as_os_str().is_empty() {
        return slug
            .eq_ignore_ascii_case("WORKFLOW")
            .then(|| (Category::Tasks, "WORKFLOW".to_owned()));
    }

    Category::ALL
        .into_iter()
        .find(|c| c.relative_dir() == parent)
        .map(|c| (c, slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_category() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "governance".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: governance");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Components".parse::<Category>().is_err());
    }

    #[test]
    fn test_relative_dir() {
        assert_eq!(
            Category::Components.relative_dir(),
            PathBuf::from("system/components")
        );
        assert_eq!(Category::Tasks.relative_dir(), PathBuf::from("tasks"));
    }

    #[test]
    fn test_location_label() {
        assert_eq!(Category::A11y.location_label(), "system/a11y");
        assert_eq!(Category::Tasks.location_label(), "tasks");
    }

    #[test]
    fn test_doc_for_source() {
        assert_eq!(
            doc_for_source(Path::new("system/tokens/colors.md")),
            Some((Category::Tokens, "colors".to_owned()))
        );
        assert_eq!(
            doc_for_source(Path::new("tasks/review.md")),
            Some((Category::Tasks, "review".to_owned()))
        );
        assert_eq!(
            doc_for_source(Path::new("WORKFLOW.md")),
            Some((Category::Tasks, "WORKFLOW".to_owned()))
        );
    }

    #[test]
    fn test_doc_for_source_outside_layout() {
        assert_eq!(doc_for_source(Path::new("README.md")), None);
        assert_eq!(doc_for_source(Path::new("system/README.md")), None);
        assert_eq!(doc_for_source(Path::new("system/unknown/x.md")), None);
        assert_eq!(doc_for_source(Path::new("system/components/x.txt")), None);
        assert_eq!(doc_for_source(Path::new("system/components/deep/x.md")), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::A11y).unwrap();
        assert_eq!(json, "\"a11y\"");
    }
}
