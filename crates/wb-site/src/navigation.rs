//! Sidebar navigation built from the documentation hierarchy.

use serde::Serialize;

use wb_storage::{Category, DocsHierarchy};

/// Order of categories in the sidebar.
pub const SIDEBAR_ORDER: [Category; 8] = [
    Category::Tasks,
    Category::Rules,
    Category::Tokens,
    Category::Components,
    Category::Patterns,
    Category::Icons,
    Category::Decisions,
    Category::A11y,
];

/// Sidebar rank of a category.
#[must_use]
pub fn sidebar_rank(category: Category) -> usize {
    SIDEBAR_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(SIDEBAR_ORDER.len())
}

/// Icon name (lucide) shown next to a category.
#[must_use]
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Rules => "book-open",
        Category::Tokens => "palette",
        Category::Components => "component",
        Category::Patterns => "rss",
        Category::Icons => "smile",
        Category::Decisions => "scale",
        Category::A11y => "accessibility",
        Category::Tasks => "list-checks",
    }
}

/// Link to one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    /// Page URL (`/docs/<category>/<slug>`).
    pub path: String,
}

/// One category block of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub category: Category,
    pub label: String,
    pub icon: &'static str,
    pub items: Vec<NavItem>,
}

/// Build sidebar sections from a hierarchy in [`SIDEBAR_ORDER`].
///
/// Documents keep the hierarchy order inside each section.
#[must_use]
pub fn build_navigation(hierarchy: &DocsHierarchy) -> Vec<NavSection> {
    let mut sections: Vec<NavSection> = hierarchy
        .iter()
        .map(|(category, docs)| NavSection {
            category,
            label: category.as_str().to_owned(),
            icon: category_icon(category),
            items: docs
                .iter()
                .map(|doc| NavItem {
                    title: doc.title.clone(),
                    path: doc.href(),
                })
                .collect(),
        })
        .collect();

    sections.sort_by_key(|s| sidebar_rank(s.category));
    sections
}
