//! Session extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use domain::models::{Account, AccountSummary, Role};
use domain::services::access::NO_TOKEN;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// The signed-in staff member, attached by `require_auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&Account> for AuthContext {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
        }
    }
}

impl From<&AuthContext> for AccountSummary {
    fn from(ctx: &AuthContext) -> Self {
        Self {
            id: ctx.account_id,
            email: ctx.email.clone(),
            name: ctx.name.clone(),
            role: ctx.role,
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized(NO_TOKEN.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account() -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "staff@excellenceacademy.edu".into(),
            name: "Front Office".into(),
            role: Role::Staff,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_context_from_account() {
        let account = account();
        let ctx = AuthContext::from(&account);
        assert_eq!(ctx.account_id, account.id);
        assert_eq!(ctx.role, Role::Staff);
    }

    #[test]
    fn test_summary_from_context() {
        let ctx = AuthContext::from(&account());
        let summary = AccountSummary::from(&ctx);
        assert_eq!(summary.id, ctx.account_id);
        assert_eq!(summary.email, ctx.email);
    }
}
