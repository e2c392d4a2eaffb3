//! Credential exchange for staff accounts.

use domain::models::account::{normalize_email, LoginResponse};
use domain::models::{Account, AccountSummary};
use persistence::repositories::AccountRepository;
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Account is inactive. Please contact super admin.")]
    AccountInactive,

    #[error("Password verification failed: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    /// Label used for the login metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid",
            AuthError::AccountInactive => "inactive",
            _ => "error",
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::AccountInactive => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Password(e) => e.into(),
            AuthError::Token(e) => e.into(),
            AuthError::Database(e) => e.into(),
        }
    }
}

pub struct AuthService<'a> {
    accounts: AccountRepository,
    jwt: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(pool: PgPool, jwt: &'a JwtConfig) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
            jwt,
        }
    }

    /// Checks the account exists, is active and the password matches, in
    /// that order, then stamps `last_login` and issues a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let email = normalize_email(email);
        let entity = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !entity.is_active {
            return Err(AuthError::AccountInactive);
        }

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.accounts.touch_last_login(entity.id).await?;

        let account = Account::from(entity);
        let (token, jti) = self
            .jwt
            .generate_token(account.id, &account.email, account.role.as_str())?;

        info!(account_id = %account.id, jti = %jti, "Staff login");

        Ok(LoginResponse {
            token,
            admin: AccountSummary::from(&account),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_credential_errors_are_unauthorized() {
        let err: ApiError = AuthError::InvalidCredentials.into();
        assert!(matches!(err, ApiError::Unauthorized(ref m) if m == "Invalid credentials."));

        let err: ApiError = AuthError::AccountInactive.into();
        assert!(matches!(
            err,
            ApiError::Unauthorized(ref m) if m == "Account is inactive. Please contact super admin."
        ));
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        let err: ApiError = AuthError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = AuthError::Token(JwtError::EncodingError("x".into())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(AuthError::InvalidCredentials.outcome(), "invalid");
        assert_eq!(AuthError::AccountInactive.outcome(), "inactive");
        assert_eq!(AuthError::Database(sqlx::Error::PoolTimedOut).outcome(), "error");
    }
}
