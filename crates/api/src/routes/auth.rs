//! Staff login and session endpoints.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use domain::models::account::{LoginRequest, LoginResponse};
use domain::models::{Account, AccountSummary};
use persistence::repositories::AccountRepository;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, ValidatedJson};
use crate::middleware::metrics::record_login_attempt;
use crate::response::{ok, ok_with_message, ApiResponse};
use crate::services::AuthService;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub admin: AccountSummary,
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/api/admin/login", post(login))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/verify", get(verify))
        .route("/api/admin/profile", get(profile))
}

/// POST /api/admin/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, ApiError> {
    let result = AuthService::new(state.pool.clone(), &state.jwt)
        .login(&request.email, &request.password)
        .await;

    match result {
        Ok(response) => {
            record_login_attempt("success");
            Ok(ok_with_message("Login successful.", response))
        }
        Err(err) => {
            record_login_attempt(err.outcome());
            Err(err.into())
        }
    }
}

/// GET /api/admin/verify
async fn verify(auth: AuthContext) -> Result<ApiResponse<SessionResponse>, ApiError> {
    Ok(ok(SessionResponse {
        admin: AccountSummary::from(&auth),
    }))
}

/// GET /api/admin/profile
async fn profile(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<ApiResponse<Account>, ApiError> {
    let account = AccountRepository::new(state.pool.clone())
        .find_by_id(auth.account_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin not found.".into()))?;
    Ok(ok(account))
}
