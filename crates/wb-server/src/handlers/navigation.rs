//! Navigation API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use wb_site::NavSection;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Sidebar sections in display order.
    sections: Vec<NavSection>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let sections = state.navigation()?;
    Ok(Json(NavigationResponse { sections }))
}

#[cfg(test)]
mod tests {
    use wb_site::NavItem;

    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            sections: vec![NavSection {
                category: wb_storage::Category::Components,
                label: "components".to_owned(),
                icon: "component",
                items: vec![NavItem {
                    title: "Button".to_owned(),
                    path: "/docs/components/button".to_owned(),
                }],
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["sections"][0]["category"], "components");
        assert_eq!(json["sections"][0]["items"][0]["title"], "Button");
        assert_eq!(json["sections"][0]["items"][0]["path"], "/docs/components/button");
    }
}
