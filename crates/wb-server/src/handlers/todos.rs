//! Todo backlog API endpoint.

use axum::Json;
use axum::extract::Query;
use serde::Serialize;
use wb_site::todos::{self, TodoFilter, TodoItem, TodoStats};

/// Response for GET /api/todos.
#[derive(Serialize)]
pub(crate) struct TodosResponse {
    /// Items matching the filter.
    items: Vec<&'static TodoItem>,
    /// Counts over the whole backlog.
    stats: TodoStats,
}

/// Handle GET /api/todos?priority=&category=&status=.
///
/// Unknown filter values are rejected by the query extractor with 400.
pub(crate) async fn get_todos(Query(filter): Query<TodoFilter>) -> Json<TodosResponse> {
    Json(TodosResponse {
        items: filter.apply(),
        stats: todos::stats(),
    })
}
