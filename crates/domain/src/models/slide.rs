//! Homepage slider domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{deserialize_some, PublicView};

/// Business id prefix for slides.
pub const SLIDE_ID_PREFIX: &str = "SLD";

/// A homepage carousel slide. Orders across all slides form `1..=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: Uuid,
    pub slider_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub order: i32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicView for Slide {
    fn strip_owner(&mut self) {
        self.uploaded_by = None;
    }
}

fn default_active() -> bool {
    true
}

/// Request payload for creating a slide. The order is always assigned by
/// the server as the next free position.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,

    #[validate(length(max = 50, message = "Button text must be at most 50 characters"))]
    pub button_text: Option<String>,

    #[validate(custom(function = "shared::validation::validate_link"))]
    pub button_link: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request payload for updating a slide (partial update).
///
/// Position changes go through reorder or move, never through update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlideRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<Option<String>>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 50, message = "Button text must be at most 50 characters"))]
    pub button_text: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(custom(function = "shared::validation::validate_link"))]
    pub button_link: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// One `{id, order}` pair of a reorder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlideOrderAssignment {
    pub id: Uuid,

    #[validate(range(min = 1, message = "Order must be at least 1"))]
    pub order: i32,
}

/// Request payload for `POST /api/slider/reorder`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderSlidesRequest {
    #[validate(length(min = 1, message = "At least one slide is required"), nested)]
    pub slides: Vec<SlideOrderAssignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Request payload for `POST /api/slider/:id/move`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MoveSlideRequest {
    pub direction: MoveDirection,
}
