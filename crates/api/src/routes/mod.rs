//! HTTP route handlers.

pub mod announcements;
pub mod auth;
pub mod enquiries;
pub mod gallery;
pub mod health;
pub mod slider;
pub mod staff;
pub mod syllabus;

use axum::http::StatusCode;
use axum::Json;

use crate::response::{failure, Envelope};

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(failure("Route not found")))
}
