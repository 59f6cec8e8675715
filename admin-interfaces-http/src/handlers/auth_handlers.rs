use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use admin_application::commands::auth_commands;
use admin_application::AppState;
use admin_domain::{LoginRequest, TokenResponse};

use crate::error::HttpError;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, HttpError> {
    let Json(payload) = payload?;
    let response = auth_commands::login(&state, payload).await?;
    Ok(Json(response))
}
