//! Homepage slider endpoints.
//!
//! Slides keep a dense `1..=N` order. Create appends, delete renumbers,
//! and only reorder and move change positions.

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Router,
};
use domain::models::slide::{
    CreateSlideRequest, MoveSlideRequest, ReorderSlidesRequest, UpdateSlideRequest,
    SLIDE_ID_PREFIX,
};
use domain::models::Slide;
use domain::services::slide_order;
use persistence::entities::SlideEntity;
use persistence::repositories::SlideRepository;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, ValidatedJson};
use crate::response::{created, message, ok, ok_with_message, ApiResponse};
use crate::services::{toggle_message, ResourceService};

type Slides = ResourceService<SlideEntity>;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/api/slider/active", get(list_active_slides))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/slider", get(list_slides).post(create_slide))
        .route("/api/slider/reorder", post(reorder_slides))
        .route(
            "/api/slider/:id",
            get(get_slide).patch(update_slide).delete(delete_slide),
        )
        .route("/api/slider/:id/toggle", patch(toggle_slide))
        .route("/api/slider/:id/move", post(move_slide))
}

/// GET /api/slider/active
async fn list_active_slides(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Slide>>, ApiError> {
    Ok(ok(Slides::new(state.pool.clone()).list_public(&[]).await?))
}

/// GET /api/slider
///
/// Every slide in carousel order, unpaginated.
async fn list_slides(State(state): State<AppState>) -> Result<ApiResponse<Vec<Slide>>, ApiError> {
    Ok(ok(Slides::new(state.pool.clone()).list_all(&[]).await?))
}

/// GET /api/slider/:id
async fn get_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Slide>, ApiError> {
    Ok(ok(Slides::new(state.pool.clone()).get(&id).await?))
}

/// POST /api/slider
async fn create_slide(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateSlideRequest>,
) -> Result<ApiResponse<Slide>, ApiError> {
    let slider_id = shared::business_id::generate(SLIDE_ID_PREFIX);
    let slide = SlideRepository::new(state.pool.clone())
        .insert(&slider_id, &request, auth.account_id)
        .await?;

    info!(
        slider_id = %slide.slider_id,
        order = slide.order,
        by = %auth.account_id,
        "Slide created"
    );
    Ok(created("Slide created successfully.", slide))
}

/// PATCH /api/slider/:id
async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSlideRequest>,
) -> Result<ApiResponse<Slide>, ApiError> {
    let key = Slides::key(&id)?;
    let slide = Slides::found(
        SlideRepository::new(state.pool.clone())
            .update(&key, &request)
            .await?,
    )?;
    Ok(ok_with_message("Slide updated successfully.", slide))
}

/// DELETE /api/slider/:id
async fn delete_slide(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let key = Slides::key(&id)?;
    let slide = Slides::found(
        SlideRepository::new(state.pool.clone())
            .delete_and_renumber(&key)
            .await?,
    )?;

    info!(slider_id = %slide.slider_id, by = %auth.account_id, "Slide deleted");
    Ok(message("Slide deleted successfully."))
}

/// PATCH /api/slider/:id/toggle
async fn toggle_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Slide>, ApiError> {
    let slide = Slides::new(state.pool.clone()).toggle(&id).await?;
    Ok(ok_with_message(
        toggle_message("Slide", slide.is_active),
        slide,
    ))
}

/// POST /api/slider/reorder
///
/// Applies each `{id, order}` pair as given. Callers send a consistent
/// permutation (usually a pairwise swap); the result is not re-densified.
async fn reorder_slides(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<ReorderSlidesRequest>,
) -> Result<ApiResponse<Vec<Slide>>, ApiError> {
    slide_order::validate_assignments(&request.slides)?;

    let slides = SlideRepository::new(state.pool.clone())
        .reorder(&request.slides)
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => Slides::not_found(),
            other => other.into(),
        })?;

    let orders: Vec<i32> = slides.iter().map(|s| s.order).collect();
    if !slide_order::is_dense(&orders) {
        warn!(?orders, "Slide orders are not contiguous after reorder");
    }

    info!(count = request.slides.len(), by = %auth.account_id, "Slides reordered");
    Ok(ok_with_message("Slides reordered successfully.", slides))
}

/// POST /api/slider/:id/move
///
/// Swaps with the neighbour above or below. At either end the slide is
/// returned unchanged.
async fn move_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<MoveSlideRequest>,
) -> Result<ApiResponse<Slide>, ApiError> {
    let key = Slides::key(&id)?;
    let slide = Slides::found(
        SlideRepository::new(state.pool.clone())
            .move_slide(&key, request.direction)
            .await?,
    )?;
    Ok(ok_with_message("Slide moved successfully.", slide))
}
