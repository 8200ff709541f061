//! HTTP request handlers.

pub(crate) mod assets;
pub(crate) mod docs;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod previews;
pub(crate) mod todos;

use wb_storage::Category;

use crate::error::ServerError;

/// Parse the `{category}` path segment.
pub(crate) fn parse_category(raw: &str) -> Result<Category, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::UnknownCategory(raw.to_owned()))
}
