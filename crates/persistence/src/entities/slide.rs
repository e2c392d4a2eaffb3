//! Slide entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Slide;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the slides table.
#[derive(Debug, Clone, FromRow)]
pub struct SlideEntity {
    pub id: Uuid,
    pub slider_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SlideEntity> for Slide {
    fn from(entity: SlideEntity) -> Self {
        Self {
            id: entity.id,
            slider_id: entity.slider_id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            button_text: entity.button_text,
            button_link: entity.button_link,
            order: entity.sort_order,
            is_active: entity.is_active,
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
