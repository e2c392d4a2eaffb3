//! Admission enquiry endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Router,
};
use domain::models::enquiry::{
    CreateEnquiryRequest, EnquiryListQuery, EnquiryReceipt, EnquiryStats,
    UpdateEnquiryStatusRequest, ENQUIRY_ID_PREFIX,
};
use domain::models::{Enquiry, PageQuery};
use persistence::entities::EnquiryEntity;
use persistence::repositories::EnquiryRepository;
use persistence::Filter;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AuthContext, QueryParams, ValidatedJson};
use crate::middleware::metrics::record_enquiry_submitted;
use crate::response::{created, message, ok, ok_with_message, ApiResponse, Page};
use crate::services::ResourceService;

type Enquiries = ResourceService<EnquiryEntity>;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/api/enquiries", post(submit_enquiry))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/enquiries", get(list_enquiries))
        .route("/api/enquiries/stats", get(enquiry_stats))
        .route(
            "/api/enquiries/:id",
            get(get_enquiry).delete(delete_enquiry),
        )
        .route("/api/enquiries/:id/status", patch(update_enquiry_status))
}

/// POST /api/enquiries
async fn submit_enquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEnquiryRequest>,
) -> Result<ApiResponse<EnquiryReceipt>, ApiError> {
    let enquiry_id = shared::business_id::generate(ENQUIRY_ID_PREFIX);
    let enquiry = EnquiryRepository::new(state.pool.clone())
        .insert(&enquiry_id, &request)
        .await?;

    record_enquiry_submitted(enquiry.branch.as_str());
    info!(
        enquiry_id = %enquiry.enquiry_id,
        branch = %enquiry.branch,
        "Enquiry submitted"
    );

    Ok(created(
        "Enquiry submitted successfully. We will contact you within 24 hours.",
        EnquiryReceipt::from(&enquiry),
    ))
}

/// GET /api/enquiries?branch=&status=&page=&limit=
async fn list_enquiries(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EnquiryListQuery>,
) -> Result<ApiResponse<Page<Enquiry>>, ApiError> {
    let mut filters = Vec::new();
    if let Some(branch) = query.branch {
        filters.push(Filter::eq("branch", branch.as_str()));
    }
    if let Some(status) = query.status {
        filters.push(Filter::eq("status", status.as_str()));
    }

    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    };
    let result = Enquiries::new(state.pool.clone())
        .list_page(&filters, &page)
        .await?;
    Ok(ok(result))
}

/// GET /api/enquiries/stats
async fn enquiry_stats(
    State(state): State<AppState>,
) -> Result<ApiResponse<EnquiryStats>, ApiError> {
    let stats = EnquiryRepository::new(state.pool.clone()).stats().await?;
    Ok(ok(stats))
}

/// GET /api/enquiries/:id
async fn get_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Enquiry>, ApiError> {
    let enquiry = Enquiries::new(state.pool.clone()).get(&id).await?;
    Ok(ok(enquiry))
}

/// PATCH /api/enquiries/:id/status
async fn update_enquiry_status(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateEnquiryStatusRequest>,
) -> Result<ApiResponse<Enquiry>, ApiError> {
    let key = Enquiries::key(&id)?;
    let enquiry = Enquiries::found(
        EnquiryRepository::new(state.pool.clone())
            .update_status(&key, request.status)
            .await?,
    )?;

    info!(
        enquiry_id = %enquiry.enquiry_id,
        status = enquiry.status.as_str(),
        by = %auth.account_id,
        "Enquiry status changed"
    );
    Ok(ok_with_message("Enquiry status updated successfully.", enquiry))
}

/// DELETE /api/enquiries/:id
async fn delete_enquiry(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let enquiry = Enquiries::new(state.pool.clone()).delete(&id).await?;
    info!(enquiry_id = %enquiry.enquiry_id, by = %auth.account_id, "Enquiry deleted");
    Ok(message("Enquiry deleted successfully."))
}
