use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::services::{AccessError, SlideOrderError};
use shared::jwt::JwtError;
use shared::password::PasswordError;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::response::failure;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

const EMAIL_UNIQUE_INDEX: &str = "idx_accounts_email_lower";
const ANNOUNCEMENT_WINDOW_CHECK: &str = "chk_announcements_window";

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            ApiError::Validation(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::InvalidOperation(msg) => msg,
        };

        (status, Json(failure(message))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found.".into()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") if db_err.constraint() == Some(EMAIL_UNIQUE_INDEX) => {
                    ApiError::InvalidOperation("Email already exists.".into())
                }
                Some("23505") => ApiError::InvalidOperation("Resource already exists.".into()),
                Some("23514") if db_err.constraint() == Some(ANNOUNCEMENT_WINDOW_CHECK) => {
                    ApiError::Validation("Expiry date must be on or after the start date.".into())
                }
                Some("23514") => ApiError::Validation("Value out of range.".into()),
                Some("23503") => ApiError::NotFound("Referenced resource not found.".into()),
                _ => ApiError::Internal(format!("Database error: {}", db_err)),
            },
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(&errors, &mut messages);

        let message = match messages.as_slice() {
            [] => "Invalid request".to_string(),
            [single] => single.clone(),
            many => format!("{} validation errors: {}", many.len(), many.join("; ")),
        };

        ApiError::Validation(message)
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated(msg) => ApiError::Unauthorized(msg.into()),
            AccessError::Forbidden(msg) => ApiError::Forbidden(msg.into()),
            AccessError::SelfAction(msg) => ApiError::InvalidOperation(msg.into()),
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingError(_) | JwtError::InvalidKey(_) => {
                ApiError::Internal(format!("Token signing failed: {}", err))
            }
            JwtError::TokenExpired | JwtError::InvalidToken | JwtError::DecodingError(_) => {
                ApiError::Unauthorized("Invalid token.".into())
            }
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<SlideOrderError> for ApiError {
    fn from(err: SlideOrderError) -> Self {
        ApiError::Validation(err.to_string())
    }
}
