use chrono::{TimeZone, Utc};
use tracing::{info, warn};

use admin_domain::{LoginRequest, TokenClaims, TokenResponse};

use crate::auth::{issue_token, verify_password};
use crate::{AppError, AppState};

pub async fn login(state: &AppState, request: LoginRequest) -> Result<TokenResponse, AppError> {
    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    let user = state
        .user_repo
        .find_by_username(username)
        .await
        .map_err(AppError::Internal)?;
    let Some(user) = user.filter(|user| {
        user.is_active && verify_password(&request.password, &user.password_hash)
    }) else {
        state.metrics.record_login(false);
        warn!(username, "login rejected");
        return Err(AppError::Unauthorized);
    };

    let ttl = i64::try_from(state.config.token_ttl_seconds).unwrap_or(i64::MAX);
    let expires_at = Utc::now().timestamp().saturating_add(ttl);
    let token = issue_token(
        state.admin.admin_secret(),
        TokenClaims {
            user_id: user.id,
            expires_at,
        },
    )?;
    let expires_at = Utc
        .timestamp_opt(expires_at, 0)
        .single()
        .map(|at| at.to_rfc3339())
        .unwrap_or_default();

    state.metrics.record_login(true);
    info!(user = %user.username, "admin login");
    Ok(TokenResponse { token, expires_at })
}
