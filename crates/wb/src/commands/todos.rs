//! `wb todos` command implementation.

use clap::Args;
use wb_site::todos::{self, Priority, TodoCategory, TodoFilter, TodoItem, TodoStatus};

use crate::output::Output;

/// Arguments for the todos command.
#[derive(Args)]
pub(crate) struct TodosArgs {
    /// Only show items with this priority (high, medium, low).
    #[arg(long)]
    priority: Option<Priority>,

    /// Only show items in this category.
    #[arg(long)]
    category: Option<TodoCategory>,

    /// Only show items with this status (needs-input, in-progress, complete).
    #[arg(long)]
    status: Option<TodoStatus>,
}

impl TodosArgs {
    pub(crate) fn execute(self) {
        let output = Output::new();
        let filter = TodoFilter {
            priority: self.priority,
            category: self.category,
            status: self.status,
        };

        let items = filter.apply();
        if items.is_empty() {
            output.warning("No matching items");
        }
        for item in items {
            output.line_with_note(&todo_line(item), &item.doc_href());
        }

        let stats = todos::stats();
        output.heading(&format!(
            "{} high priority, {} of {} need input",
            stats.high_priority, stats.needs_input, stats.total
        ));
    }
}

fn todo_line(item: &TodoItem) -> String {
    format!(
        "[{:<6}] {:<11} {}",
        item.priority.as_str(),
        item.category.as_str(),
        item.title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_line_alignment() {
        let item = todos::by_category(TodoCategory::Governance)[0];

        let line = todo_line(item);

        assert!(line.starts_with("[medium] governance "));
        assert!(line.ends_with(item.title));
    }
}
