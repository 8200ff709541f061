//! Documentation backlog: items that still need human input.
//!
//! The list is fixed at compile time. Items point at the context file that
//! needs work, so the home page and `wb todos` can link straight to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use wb_storage::doc_href;

/// Area a todo belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoCategory {
    A11y,
    Decisions,
    Governance,
    Tokens,
    Components,
    Patterns,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    NeedsInput,
    InProgress,
    Complete,
}

/// Error returned when parsing an unknown todo enum value.
#[derive(Debug, thiserror::Error)]
#[error("Unknown {kind}: {value} (expected one of: {expected})")]
pub struct ParseTodoError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

macro_rules! str_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseTodoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseTodoError {
                        kind: $kind,
                        value: s.to_owned(),
                        expected: concat!($($name, " "),+).trim_ascii_end(),
                    }),
                }
            }
        }
    };
}

str_enum!(TodoCategory, "category", {
    A11y => "a11y",
    Decisions => "decisions",
    Governance => "governance",
    Tokens => "tokens",
    Components => "components",
    Patterns => "patterns",
});

str_enum!(Priority, "priority", {
    High => "high",
    Medium => "medium",
    Low => "low",
});

str_enum!(TodoStatus, "status", {
    NeedsInput => "needs-input",
    InProgress => "in-progress",
    Complete => "complete",
});

/// One backlog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: TodoCategory,
    pub priority: Priority,
    /// Context file, relative to the context directory.
    pub file_path: &'static str,
    pub status: TodoStatus,
}

impl TodoItem {
    /// Page URL: `/docs/<category>/<file stem>`.
    ///
    /// The category is the todo's own, which is not always the directory the
    /// file lives in (governance items link to `/docs/governance/...`).
    #[must_use]
    pub fn doc_href(&self) -> String {
        let file = self.file_path.rsplit('/').next().unwrap_or(self.file_path);
        let stem = file.strip_suffix(".md").unwrap_or(file);
        doc_href(self.category, stem)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == TodoStatus::Complete
    }
}

/// The documentation backlog.
pub const SYSTEM_TODOS: [TodoItem; 10] = [
    TodoItem {
        id: "a11y-forms",
        title: "Forms Accessibility",
        description: "ARIA patterns, keyboard interactions, validation patterns",
        category: TodoCategory::A11y,
        priority: Priority::High,
        file_path: "system/a11y/forms.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "a11y-dialogs",
        title: "Dialogs Accessibility",
        description: "Focus behavior, keyboard patterns, stacked dialog handling",
        category: TodoCategory::A11y,
        priority: Priority::High,
        file_path: "system/a11y/dialogs.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "a11y-data-tables",
        title: "Data Tables Accessibility",
        description: "Sortable columns, row selection, pagination, filtering",
        category: TodoCategory::A11y,
        priority: Priority::High,
        file_path: "system/a11y/data-tables.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "a11y-navigation",
        title: "Navigation Accessibility",
        description: "Keyboard patterns, ARIA usage, screen reader behavior",
        category: TodoCategory::A11y,
        priority: Priority::High,
        file_path: "system/a11y/navigation.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "decision-color-system",
        title: "Color System Rationale",
        description: "Primary color rationale, color relationships, a11y considerations",
        category: TodoCategory::Decisions,
        priority: Priority::High,
        file_path: "system/decisions/color-system.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "decision-token-scale",
        title: "Token Scale Rationale",
        description: "4px base unit rationale, breakpoints, border radius, typography scale",
        category: TodoCategory::Decisions,
        priority: Priority::High,
        file_path: "system/decisions/token-scale.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "decision-component-library",
        title: "Component Library Choice",
        description: "shadcn/ui + Radix rationale, alternatives evaluated, trade-offs",
        category: TodoCategory::Decisions,
        priority: Priority::High,
        file_path: "system/decisions/component-library.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "decision-typography",
        title: "Typography Decisions",
        description: "Adelle Sans rationale, licensing, fallback strategy",
        category: TodoCategory::Decisions,
        priority: Priority::High,
        file_path: "system/decisions/typography.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "decision-multi-theme",
        title: "Multi-Theme Architecture",
        description: "3-theme rationale, Member/Campus/Admin strategy",
        category: TodoCategory::Decisions,
        priority: Priority::High,
        file_path: "system/decisions/multi-theme.md",
        status: TodoStatus::NeedsInput,
    },
    TodoItem {
        id: "governance-approval",
        title: "Governance Approval Authority",
        description: "Who approves variants, tokens, exceptions; enforcement tooling",
        category: TodoCategory::Governance,
        priority: Priority::Medium,
        file_path: "system/rules/governance.md",
        status: TodoStatus::NeedsInput,
    },
];

/// Counts shown in the "Needs Human Input" widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: usize,
    pub complete: usize,
    pub needs_input: usize,
    pub in_progress: usize,
    /// High-priority items that are not complete.
    pub high_priority: usize,
}

impl TodoStats {
    /// Compute counts over `items`.
    pub fn of<'a>(items: impl IntoIterator<Item = &'a TodoItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut stats, item| {
            stats.total += 1;
            match item.status {
                TodoStatus::Complete => stats.complete += 1,
                TodoStatus::NeedsInput => stats.needs_input += 1,
                TodoStatus::InProgress => stats.in_progress += 1,
            }
            if item.priority == Priority::High && !item.is_complete() {
                stats.high_priority += 1;
            }
            stats
        })
    }
}

/// Optional filters, all of which must match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TodoFilter {
    pub priority: Option<Priority>,
    pub category: Option<TodoCategory>,
    pub status: Option<TodoStatus>,
}

impl TodoFilter {
    #[must_use]
    pub fn matches(&self, item: &TodoItem) -> bool {
        self.priority.is_none_or(|p| item.priority == p)
            && self.category.is_none_or(|c| item.category == c)
            && self.status.is_none_or(|s| item.status == s)
    }

    /// Backlog items passing the filter, in backlog order.
    #[must_use]
    pub fn apply(&self) -> Vec<&'static TodoItem> {
        SYSTEM_TODOS.iter().filter(|t| self.matches(t)).collect()
    }
}

#[must_use]
pub fn by_priority(priority: Priority) -> Vec<&'static TodoItem> {
    TodoFilter {
        priority: Some(priority),
        ..TodoFilter::default()
    }
    .apply()
}

#[must_use]
pub fn by_category(category: TodoCategory) -> Vec<&'static TodoItem> {
    TodoFilter {
        category: Some(category),
        ..TodoFilter::default()
    }
    .apply()
}

#[must_use]
pub fn by_status(status: TodoStatus) -> Vec<&'static TodoItem> {
    TodoFilter {
        status: Some(status),
        ..TodoFilter::default()
    }
    .apply()
}

/// Items whose status is not `complete`.
#[must_use]
pub fn incomplete() -> Vec<&'static TodoItem> {
    SYSTEM_TODOS.iter().filter(|t| !t.is_complete()).collect()
}

/// Counts over the whole backlog.
#[must_use]
pub fn stats() -> TodoStats {
    TodoStats::of(&SYSTEM_TODOS)
}
