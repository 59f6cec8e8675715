// Administrator account entities

use serde::{Deserialize, Serialize};

use crate::value_objects::PrimaryKey;

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: PrimaryKey,
    pub username: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: String,
}

/// Fields carried by a verified login token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: PrimaryKey,
    pub expires_at: i64,
}
