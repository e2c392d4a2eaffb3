//! Announcement entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Announcement;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the announcements table.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementEntity {
    pub id: Uuid,
    pub announcement_id: String,
    pub title: String,
    pub message: String,
    pub is_important: bool,
    pub is_pinned: bool,
    pub start_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnnouncementEntity> for Announcement {
    fn from(entity: AnnouncementEntity) -> Self {
        Self {
            id: entity.id,
            announcement_id: entity.announcement_id,
            title: entity.title,
            message: entity.message,
            is_important: entity.is_important,
            is_pinned: entity.is_pinned,
            start_date: entity.start_date,
            expiry_date: entity.expiry_date,
            is_active: entity.is_active,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
