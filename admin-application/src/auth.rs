use anyhow::anyhow;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use admin_domain::{AdminUser, TokenClaims};

use crate::{AppError, AppState};

const TOKEN_PREFIX: &str = "admin";
const TOKEN_VERSION: &str = "v1";

type HmacSha256 = Hmac<Sha256>;

/// `admin.v1.<user_id>.<expires_unix>.<hex signature>`
pub fn issue_token(secret: &str, claims: TokenClaims) -> Result<String, AppError> {
    let payload = signing_payload(claims);
    let signature = sign_hmac_sha256(secret, &payload)?;
    Ok(format!(
        "{}.{}.{}.{}.{}",
        TOKEN_PREFIX, TOKEN_VERSION, claims.user_id, claims.expires_at, signature
    ))
}

pub fn verify_token(secret: &str, token: &str, now: i64) -> Result<TokenClaims, AppError> {
    let parts = token.trim().split('.').collect::<Vec<_>>();
    let [prefix, version, user_id, expires_at, signature] = parts.as_slice() else {
        return Err(AppError::Unauthorized);
    };
    if *prefix != TOKEN_PREFIX || *version != TOKEN_VERSION {
        return Err(AppError::Unauthorized);
    }
    let claims = TokenClaims {
        user_id: user_id.parse().map_err(|_| AppError::Unauthorized)?,
        expires_at: expires_at.parse().map_err(|_| AppError::Unauthorized)?,
    };
    let expected = hex::decode(signature).map_err(|_| AppError::Unauthorized)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| AppError::Internal(anyhow!("hmac init failed: {err}")))?;
    mac.update(signing_payload(claims).as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| AppError::Unauthorized)?;

    if claims.expires_at <= now {
        return Err(AppError::Unauthorized);
    }
    Ok(claims)
}

/// Resolves the caller from a bearer token. Without permission enforcement
/// the admin surface is open and no caller is required.
pub async fn authenticate(
    state: &AppState,
    token: Option<&str>,
) -> Result<Option<AdminUser>, AppError> {
    if !state.admin.permission {
        return Ok(None);
    }
    let token = token.ok_or(AppError::Unauthorized)?;
    let claims = verify_token(
        state.admin.admin_secret(),
        token,
        chrono::Utc::now().timestamp(),
    )?;
    let user = state
        .user_repo
        .find_by_id(claims.user_id)
        .await
        .map_err(AppError::Internal)?
        .filter(|user| user.is_active)
        .ok_or(AppError::Unauthorized)?;
    Ok(Some(user))
}

/// Superusers pass; everyone else needs a role granting `action` on `model`.
pub async fn ensure_permission(
    state: &AppState,
    caller: Option<&AdminUser>,
    model: &str,
    action: &str,
) -> Result<(), AppError> {
    if !state.admin.permission {
        return Ok(());
    }
    let user = caller.ok_or(AppError::Unauthorized)?;
    if user.is_superuser {
        return Ok(());
    }
    let granted = state
        .user_repo
        .has_permission(user.id, model, action)
        .await
        .map_err(AppError::Internal)?;
    if granted {
        Ok(())
    } else {
        warn!(user = %user.username, model, action, "permission denied");
        Err(AppError::Forbidden(format!(
            "missing '{}' permission on '{}'",
            action, model
        )))
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::Internal(anyhow!("password hash failed: {err}")))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn signing_payload(claims: TokenClaims) -> String {
    format!(
        "{}|{}|{}|{}",
        TOKEN_PREFIX, TOKEN_VERSION, claims.user_id, claims.expires_at
    )
}

fn sign_hmac_sha256(secret: &str, payload: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| AppError::Internal(anyhow!("hmac init failed: {err}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_state, seed_users};

    const SECRET: &str = "test";

    fn claims() -> TokenClaims {
        TokenClaims {
            user_id: 7,
            expires_at: 2_000_000_000,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let token = issue_token(SECRET, claims()).expect("token");
        assert!(token.starts_with("admin.v1.7.2000000000."));
        let verified = verify_token(SECRET, &token, 1_900_000_000).expect("verify");
        assert_eq!(verified, claims());
    }

    #[test]
    fn tampered_or_expired_tokens_are_rejected() {
        let token = issue_token(SECRET, claims()).expect("token");
        let forged = token.replacen("admin.v1.7.", "admin.v1.8.", 1);
        assert!(matches!(
            verify_token(SECRET, &forged, 0),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify_token("other", &token, 0),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify_token(SECRET, &token, 2_000_000_000),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify_token(SECRET, "garbage", 0),
            Err(AppError::Unauthorized)
        ));
        let odd_length = format!("{}0", token);
        assert!(matches!(
            verify_token(SECRET, &odd_length, 0),
            Err(AppError::Unauthorized)
        ));
        let not_hex = format!("{}zz", &token[..token.len() - 2]);
        assert!(matches!(
            verify_token(SECRET, &not_hex, 0),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").expect("hash");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-hash"));
    }

    #[tokio::test]
    async fn permission_requires_grant_for_regular_users() {
        let (state, store) = demo_state(true).await;
        let (admin, staff) = seed_users(&store).await;

        ensure_permission(&state, Some(&admin), "Product", "delete")
            .await
            .expect("superuser");
        assert!(matches!(
            ensure_permission(&state, Some(&staff), "Product", "delete").await,
            Err(AppError::Forbidden(_))
        ));
        ensure_permission(&state, Some(&staff), "Product", "read")
            .await
            .expect("granted read");
        assert!(matches!(
            ensure_permission(&state, None, "Product", "read").await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn authenticate_resolves_active_users() {
        let (state, store) = demo_state(true).await;
        let (admin, _) = seed_users(&store).await;
        let token = issue_token(
            SECRET,
            TokenClaims {
                user_id: admin.id,
                expires_at: chrono::Utc::now().timestamp() + 60,
            },
        )
        .expect("token");

        let caller = authenticate(&state, Some(&token)).await.expect("caller");
        assert_eq!(caller.map(|user| user.username), Some("root".to_string()));
        assert!(matches!(
            authenticate(&state, None).await,
            Err(AppError::Unauthorized)
        ));
    }
}
