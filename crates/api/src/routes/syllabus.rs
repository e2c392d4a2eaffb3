//! Syllabus endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use domain::models::syllabus::{
    CreateSyllabusRequest, SyllabusQuery, UpdateSyllabusRequest, SYLLABUS_ID_PREFIX,
};
use domain::models::{PageQuery, SchoolClass, SyllabusEntry};
use persistence::entities::SyllabusEntryEntity;
use persistence::repositories::SyllabusRepository;
use persistence::Filter;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, QueryParams, ValidatedJson};
use crate::response::{created, message, ok, ok_with_message, ApiResponse, Page};
use crate::services::ResourceService;

type Syllabus = ResourceService<SyllabusEntryEntity>;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/syllabus/active", get(list_active_syllabus))
        .route("/api/syllabus/class/:class", get(list_class_syllabus))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/syllabus", get(list_syllabus).post(create_syllabus))
        .route(
            "/api/syllabus/:id",
            get(get_syllabus)
                .patch(update_syllabus)
                .delete(delete_syllabus),
        )
}

fn filters(query: &SyllabusQuery) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(class) = query.class {
        filters.push(Filter::eq("class", class.as_str()));
    }
    if let Some(subject) = query.subject {
        filters.push(Filter::eq("subject", subject.as_str()));
    }
    filters
}

/// GET /api/syllabus/active?class=&subject=
async fn list_active_syllabus(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SyllabusQuery>,
) -> Result<ApiResponse<Vec<SyllabusEntry>>, ApiError> {
    let entries = Syllabus::new(state.pool.clone())
        .list_public(&filters(&query))
        .await?;
    Ok(ok(entries))
}

/// GET /api/syllabus/class/:class
///
/// Accepts `Class 7`, `class 7` or a bare `7`.
async fn list_class_syllabus(
    State(state): State<AppState>,
    Path(class): Path<String>,
) -> Result<ApiResponse<Vec<SyllabusEntry>>, ApiError> {
    let class = SchoolClass::parse(&class)
        .ok_or_else(|| ApiError::Validation(format!("Unknown class: {}", class)))?;

    let query = SyllabusQuery {
        class: Some(class),
        subject: None,
    };
    let entries = Syllabus::new(state.pool.clone())
        .list_public(&filters(&query))
        .await?;
    Ok(ok(entries))
}

/// GET /api/syllabus?class=&subject=&page=&limit=
async fn list_syllabus(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SyllabusQuery>,
    QueryParams(page): QueryParams<PageQuery>,
) -> Result<ApiResponse<Page<SyllabusEntry>>, ApiError> {
    let result = Syllabus::new(state.pool.clone())
        .list_page(&filters(&query), &page)
        .await?;
    Ok(ok(result))
}

/// GET /api/syllabus/:id
async fn get_syllabus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<SyllabusEntry>, ApiError> {
    Ok(ok(Syllabus::new(state.pool.clone()).get(&id).await?))
}

/// POST /api/syllabus
async fn create_syllabus(
    State(state): State<AppState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateSyllabusRequest>,
) -> Result<ApiResponse<SyllabusEntry>, ApiError> {
    let syllabus_id = shared::business_id::generate(SYLLABUS_ID_PREFIX);
    let entry = SyllabusRepository::new(state.pool.clone())
        .insert(&syllabus_id, &request, auth.account_id)
        .await?;

    info!(
        syllabus_id = %entry.syllabus_id,
        class = entry.class.as_str(),
        by = %auth.account_id,
        "Syllabus uploaded"
    );
    Ok(created("Syllabus uploaded successfully.", entry))
}

/// PATCH /api/syllabus/:id
async fn update_syllabus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSyllabusRequest>,
) -> Result<ApiResponse<SyllabusEntry>, ApiError> {
    let key = Syllabus::key(&id)?;
    let entry = Syllabus::found(
        SyllabusRepository::new(state.pool.clone())
            .update(&key, &request)
            .await?,
    )?;
    Ok(ok_with_message("Syllabus updated successfully.", entry))
}

/// DELETE /api/syllabus/:id
async fn delete_syllabus(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let entry = Syllabus::new(state.pool.clone()).delete(&id).await?;
    info!(syllabus_id = %entry.syllabus_id, by = %auth.account_id, "Syllabus deleted");
    Ok(message("Syllabus deleted successfully."))
}
