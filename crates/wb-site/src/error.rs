//! Site errors.

use wb_storage::{Category, StorageError};

/// Error returned by [`Site`](crate::Site) operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No document with this category and slug.
    #[error("Document not found: {category}/{slug}")]
    NotFound { category: Category, slug: String },
    /// Storage backend failure other than a missing document.
    #[error(transparent)]
    Storage(StorageError),
}

impl SiteError {
    /// Map a storage error for `(category, slug)`, turning missing documents
    /// into [`SiteError::NotFound`].
    pub(crate) fn from_storage(err: StorageError, category: Category, slug: &str) -> Self {
        if err.is_not_found() {
            Self::NotFound {
                category,
                slug: slug.to_owned(),
            }
        } else {
            Self::Storage(err)
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StorageError> for SiteError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wb_storage::StorageErrorKind;

    #[test]
    fn test_from_storage_not_found() {
        let err = SiteError::from_storage(
            StorageError::not_found("system/components/x.md"),
            Category::Components,
            "x",
        );

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Document not found: components/x");
    }

    #[test]
    fn test_from_storage_other() {
        let err = SiteError::from_storage(
            StorageError::new(StorageErrorKind::PermissionDenied),
            Category::Rules,
            "x",
        );

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Permission denied");
    }
}
