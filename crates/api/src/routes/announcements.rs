//! Announcement endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Router,
};
use chrono::Utc;
use domain::models::announcement::{
    visible_announcements, CreateAnnouncementRequest, UpdateAnnouncementRequest,
    ANNOUNCEMENT_ID_PREFIX,
};
use domain::models::{Announcement, PageQuery};
use persistence::entities::AnnouncementEntity;
use persistence::repositories::AnnouncementRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, QueryParams, ValidatedJson};
use crate::response::{created, message, ok, ok_with_message, ApiResponse, Page};
use crate::services::{toggle_message, ResourceService};

type Announcements = ResourceService<AnnouncementEntity>;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/api/announcements/active", get(list_active_announcements))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/api/announcements/:id",
            get(get_announcement)
                .patch(update_announcement)
                .delete(delete_announcement),
        )
        .route("/api/announcements/:id/toggle", patch(toggle_announcement))
}

/// GET /api/announcements/active
async fn list_active_announcements(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Announcement>>, ApiError> {
    let candidates = Announcements::new(state.pool.clone())
        .list_public(&[])
        .await?;
    Ok(ok(visible_announcements(candidates, Utc::now())))
}

/// GET /api/announcements?page=&limit=
async fn list_announcements(
    State(state): State<AppState>,
    QueryParams(page): QueryParams<PageQuery>,
) -> Result<ApiResponse<Page<Announcement>>, ApiError> {
    let result = Announcements::new(state.pool.clone())
        .list_page(&[], &page)
        .await?;
    Ok(ok(result))
}

/// GET /api/announcements/:id
async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Announcement>, ApiError> {
    Ok(ok(Announcements::new(state.pool.clone()).get(&id).await?))
}

/// POST /api/announcements
async fn create_announcement(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateAnnouncementRequest>,
) -> Result<ApiResponse<Announcement>, ApiError> {
    let announcement_id = shared::business_id::generate(ANNOUNCEMENT_ID_PREFIX);
    let start_date = request.start_date.unwrap_or_else(Utc::now);

    let announcement = AnnouncementRepository::new(state.pool.clone())
        .insert(&announcement_id, &request, start_date, auth.account_id)
        .await?;

    info!(
        announcement_id = %announcement.announcement_id,
        by = %auth.account_id,
        "Announcement created"
    );
    Ok(created("Announcement created successfully.", announcement))
}

/// PATCH /api/announcements/:id
async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAnnouncementRequest>,
) -> Result<ApiResponse<Announcement>, ApiError> {
    let key = Announcements::key(&id)?;
    let announcement = Announcements::found(
        AnnouncementRepository::new(state.pool.clone())
            .update(&key, &request)
            .await?,
    )?;
    Ok(ok_with_message(
        "Announcement updated successfully.",
        announcement,
    ))
}

/// DELETE /api/announcements/:id
async fn delete_announcement(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let announcement = Announcements::new(state.pool.clone()).delete(&id).await?;
    info!(
        announcement_id = %announcement.announcement_id,
        by = %auth.account_id,
        "Announcement deleted"
    );
    Ok(message("Announcement deleted successfully."))
}

/// PATCH /api/announcements/:id/toggle
async fn toggle_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Announcement>, ApiError> {
    let announcement = Announcements::new(state.pool.clone()).toggle(&id).await?;
    Ok(ok_with_message(
        toggle_message("Announcement", announcement.is_active),
        announcement,
    ))
}
