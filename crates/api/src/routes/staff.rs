//! Staff account management. Owner only.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use domain::models::account::{
    normalize_email, CreateAccountRequest, ResetPasswordRequest, UpdateAccountRequest,
};
use domain::models::{Account, PageQuery};
use domain::services::{guard_self_action, StaffAction};
use persistence::repositories::AccountRepository;
use shared::pagination::PageRequest;
use shared::password::hash_password;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, QueryParams, ValidatedJson};
use crate::response::{created, message, ok, ok_with_message, ApiResponse, Page};

const NOT_FOUND: &str = "Staff member not found.";
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Mounted behind both `require_auth` and `require_owner`.
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/api/staff", get(list_staff).post(create_staff))
        .route(
            "/api/staff/:id",
            get(get_staff).patch(update_staff).delete(delete_staff),
        )
        .route("/api/staff/:id/reset-password", post(reset_staff_password))
}

fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}

/// Accounts are addressed by UUID only.
fn account_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| not_found())
}

/// GET /api/staff?page=&limit=
async fn list_staff(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<ApiResponse<Page<Account>>, ApiError> {
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_SIZE);
    let (accounts, total) = AccountRepository::new(state.pool.clone())
        .list_page(page)
        .await?;
    Ok(ok(Page::new("staff", accounts, page.info(total))))
}

/// GET /api/staff/:id
async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Account>, ApiError> {
    let account = AccountRepository::new(state.pool.clone())
        .find_by_id(account_id(&id)?)
        .await?
        .ok_or_else(not_found)?;
    Ok(ok(account))
}

/// POST /api/staff
async fn create_staff(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> Result<ApiResponse<Account>, ApiError> {
    let accounts = AccountRepository::new(state.pool.clone());
    let email = normalize_email(&request.email);

    if accounts.exists_by_email(&email).await? {
        return Err(ApiError::InvalidOperation("Email already exists.".into()));
    }

    let password_hash = hash_password(&request.password)?;
    let account = accounts
        .create(&email, &password_hash, request.name.trim(), request.role)
        .await?;

    info!(
        account_id = %account.id,
        role = account.role.as_str(),
        by = %auth.account_id,
        "Staff member created"
    );
    Ok(created("Staff member created successfully.", account))
}

/// PATCH /api/staff/:id
async fn update_staff(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> Result<ApiResponse<Account>, ApiError> {
    let target = account_id(&id)?;
    guard_self_action(auth.account_id, target, StaffAction::Modify)?;

    let account = AccountRepository::new(state.pool.clone())
        .update(target, &request)
        .await?
        .ok_or_else(not_found)?;

    info!(account_id = %account.id, by = %auth.account_id, "Staff member updated");
    Ok(ok_with_message("Staff member updated successfully.", account))
}

/// DELETE /api/staff/:id
async fn delete_staff(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let target = account_id(&id)?;
    guard_self_action(auth.account_id, target, StaffAction::Delete)?;

    let account = AccountRepository::new(state.pool.clone())
        .delete(target)
        .await?
        .ok_or_else(not_found)?;

    info!(account_id = %account.id, by = %auth.account_id, "Staff member deleted");
    Ok(message("Staff member deleted successfully."))
}

/// POST /api/staff/:id/reset-password
async fn reset_staff_password(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    let target = account_id(&id)?;
    guard_self_action(auth.account_id, target, StaffAction::ResetPassword)?;

    let password_hash = hash_password(&request.password)?;
    let updated = AccountRepository::new(state.pool.clone())
        .set_password_hash(target, &password_hash)
        .await?;
    if !updated {
        return Err(not_found());
    }

    info!(account_id = %target, by = %auth.account_id, "Staff password reset");
    Ok(message("Password reset successfully."))
}
