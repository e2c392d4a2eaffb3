//! Gallery endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use domain::models::gallery::{
    CreateGalleryImageRequest, GalleryQuery, UpdateGalleryImageRequest, GALLERY_ID_PREFIX,
};
use domain::models::{GalleryImage, PageQuery};
use persistence::entities::GalleryImageEntity;
use persistence::repositories::GalleryRepository;
use persistence::Filter;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, QueryParams, ValidatedJson};
use crate::response::{created, message, ok, ok_with_message, ApiResponse, Page};
use crate::services::ResourceService;

type Gallery = ResourceService<GalleryImageEntity>;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/api/gallery", get(list_images))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/gallery", post(upload_image))
        .route("/api/gallery/all", get(list_all_images))
        .route(
            "/api/gallery/:id",
            get(get_image).patch(update_image).delete(delete_image),
        )
}

fn filters(query: &GalleryQuery) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(category) = query.category {
        filters.push(Filter::eq("category", category.as_str()));
    }
    if let Some(branch) = query.branch_filter() {
        filters.push(Filter::eq("branch", branch.as_str()));
    }
    filters
}

/// GET /api/gallery?category=&branch=
async fn list_images(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<GalleryQuery>,
) -> Result<ApiResponse<Vec<GalleryImage>>, ApiError> {
    let images = Gallery::new(state.pool.clone())
        .list_public(&filters(&query))
        .await?;
    Ok(ok(images))
}

/// GET /api/gallery/all?category=&branch=&page=&limit=
async fn list_all_images(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<GalleryQuery>,
    QueryParams(page): QueryParams<PageQuery>,
) -> Result<ApiResponse<Page<GalleryImage>>, ApiError> {
    let result = Gallery::new(state.pool.clone())
        .list_page(&filters(&query), &page)
        .await?;
    Ok(ok(result))
}

/// GET /api/gallery/:id
async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<GalleryImage>, ApiError> {
    Ok(ok(Gallery::new(state.pool.clone()).get(&id).await?))
}

/// POST /api/gallery
async fn upload_image(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateGalleryImageRequest>,
) -> Result<ApiResponse<GalleryImage>, ApiError> {
    let image_id = shared::business_id::generate(GALLERY_ID_PREFIX);
    let image = GalleryRepository::new(state.pool.clone())
        .insert(&image_id, &request, auth.account_id)
        .await?;

    info!(image_id = %image.image_id, by = %auth.account_id, "Gallery image uploaded");
    Ok(created("Image uploaded successfully.", image))
}

/// PATCH /api/gallery/:id
async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGalleryImageRequest>,
) -> Result<ApiResponse<GalleryImage>, ApiError> {
    let key = Gallery::key(&id)?;
    let image = Gallery::found(
        GalleryRepository::new(state.pool.clone())
            .update(&key, &request)
            .await?,
    )?;
    Ok(ok_with_message("Image updated successfully.", image))
}

/// DELETE /api/gallery/:id
async fn delete_image(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let image = Gallery::new(state.pool.clone()).delete(&id).await?;
    info!(image_id = %image.image_id, by = %auth.account_id, "Gallery image deleted");
    Ok(message("Image deleted successfully."))
}
