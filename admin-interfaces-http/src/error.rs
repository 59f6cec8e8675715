use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use admin_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    Forbidden { code: &'static str, message: String },
    BadRequest { code: &'static str, message: String },
    NotFound { code: &'static str, message: String },
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        let message = value.to_string();
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::Forbidden(_) => HttpError::Forbidden {
                code: "forbidden",
                message,
            },
            AppError::ActionDisabled { .. } => HttpError::Forbidden {
                code: "action_disabled",
                message,
            },
            AppError::BadRequest(_) => HttpError::BadRequest {
                code: "bad_request",
                message,
            },
            AppError::UnknownAction { .. } => HttpError::BadRequest {
                code: "unknown_action",
                message,
            },
            AppError::EmptyKeyList => HttpError::BadRequest {
                code: "empty_key_list",
                message,
            },
            AppError::UnresolvedModel(_) => HttpError::NotFound {
                code: "unresolved_model",
                message,
            },
            AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(value: JsonRejection) -> Self {
        HttpError::BadRequest {
            code: "invalid_body",
            message: value.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            HttpError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "unauthorized".to_string(),
            ),
            HttpError::Forbidden { code, message } => (StatusCode::FORBIDDEN, code, message),
            HttpError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            HttpError::NotFound { code, message } => (StatusCode::NOT_FOUND, code, message),
            HttpError::Internal(msg) => {
                error!("request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                )
            }
        };
        (
            status,
            Json(ErrorBody {
                error: message,
                code,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_errors_map_to_status_codes() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::UnresolvedModel("Widget".into()), StatusCode::NOT_FOUND),
            (
                AppError::UnknownAction {
                    resource: "Product".into(),
                    action: "x".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::ActionDisabled {
                    resource: "Role".into(),
                    action: "delete".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (AppError::EmptyKeyList, StatusCode::BAD_REQUEST),
            (
                AppError::Internal(anyhow::anyhow!("db down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from(err).into_response().status(), status);
        }
    }
}
