use axum::http::HeaderMap;

use admin_application::auth::authenticate;
use admin_application::AppState;
use admin_domain::AdminUser;

use crate::error::HttpError;

/// Resolves the calling administrator from the `Authorization` header.
/// Returns `None` when permission enforcement is off.
pub async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<Option<AdminUser>, HttpError> {
    let token = extract_bearer(headers);
    Ok(authenticate(state, token.as_deref()).await?)
}

pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_bearer(&headers).as_deref(), Some("abc.def"));

        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_bearer(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer   "));
        assert_eq!(extract_bearer(&headers), None);
    }
}
