//! Bearer token authentication middleware.
//!
//! `require_auth` resolves the session into an [`AuthContext`] stored in
//! request extensions; `require_owner` layers the owner check on top.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use domain::services::access::{self, Capability, NO_TOKEN};
use persistence::repositories::AccountRepository;
use shared::jwt::extract_account_id;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AuthContext;

pub const INVALID_SESSION: &str = "Invalid token or admin account is inactive.";

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}

/// Validates the token, then reloads the account so a deactivated or
/// deleted account loses access before its token expires.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthContext, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| ApiError::Unauthorized(NO_TOKEN.into()))?;

    let claims = state.jwt.validate_token(&token)?;
    let account_id = extract_account_id(&claims)?;

    let account = AccountRepository::new(state.pool.clone())
        .find_by_id(account_id)
        .await?
        .filter(|account| account.is_active)
        .ok_or_else(|| ApiError::Unauthorized(INVALID_SESSION.into()))?;

    Ok(AuthContext::from(&account))
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state, req.headers()).await {
        Ok(context) => {
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "Authentication failed");
            err.into_response()
        }
    }
}

/// Must run inside `require_auth`.
pub async fn require_owner(req: Request<Body>, next: Next) -> Response {
    let role = req.extensions().get::<AuthContext>().map(|ctx| ctx.role);
    match access::check(role, Capability::Owner) {
        Ok(()) => next.run(req).await,
        Err(err) => ApiError::from(err).into_response(),
    }
}
