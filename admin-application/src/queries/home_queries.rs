use serde_json::json;
use tracing::error;

use crate::queries::site_queries::site_view;
use crate::{AppError, AppState};

pub const HOME_TEMPLATE: &str = "home.html";

/// Renders the dashboard landing page.
pub fn render_home(state: &AppState) -> Result<String, AppError> {
    let context = json!({
        "site": site_view(&state.admin),
        "resources": state.admin.registry.len(),
    });
    state
        .renderer
        .render(HOME_TEMPLATE, &context)
        .map_err(|err| {
            error!("failed to render {}: {}", HOME_TEMPLATE, err);
            AppError::Internal(err)
        })
}
