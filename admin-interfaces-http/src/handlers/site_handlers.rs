use axum::extract::State;
use axum::Json;
use serde::Serialize;

use admin_application::queries::{home_queries, site_queries};
use admin_application::AppState;
use admin_domain::SiteView;

use crate::error::HttpError;

#[derive(Serialize)]
pub struct HomePage {
    html: String,
}

pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, HttpError> {
    let html = home_queries::render_home(&state)?;
    Ok(Json(HomePage { html }))
}

pub async fn site(State(state): State<AppState>) -> Json<SiteView> {
    Json(site_queries::site_view(&state.admin))
}
