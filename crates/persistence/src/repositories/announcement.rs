//! Announcement repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::announcement::{
    CreateAnnouncementRequest, UpdateAnnouncementRequest, ANNOUNCEMENT_ID_PREFIX,
};
use domain::models::{Announcement, ResourceKey};
use sqlx::PgPool;
use uuid::Uuid;

use crate::collection::{bind_key, key_predicate, Collection, Toggle};
use crate::entities::AnnouncementEntity;
use crate::metrics::QueryTimer;

impl Collection for AnnouncementEntity {
    type Model = Announcement;

    const TABLE: &'static str = "announcements";
    const BUSINESS_ID_COLUMN: &'static str = "announcement_id";
    const BUSINESS_ID_PREFIX: &'static str = ANNOUNCEMENT_ID_PREFIX;
    const PUBLIC_FILTER: &'static str =
        "is_active AND start_date <= NOW() AND (expiry_date IS NULL OR expiry_date >= NOW())";
    const PUBLIC_ORDER: &'static str = "is_pinned DESC, is_important DESC, start_date DESC";
    const ADMIN_ORDER: &'static str = "created_at DESC";
}

impl Toggle for AnnouncementEntity {}

/// Repository for announcement writes.
#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new announcement. A missing start date means "now".
    pub async fn insert(
        &self,
        announcement_id: &str,
        request: &CreateAnnouncementRequest,
        start_date: DateTime<Utc>,
        created_by: Uuid,
    ) -> Result<Announcement, sqlx::Error> {
        let timer = QueryTimer::new(AnnouncementEntity::TABLE, "insert");
        let result = sqlx::query_as::<_, AnnouncementEntity>(
            r#"
            INSERT INTO announcements
                (announcement_id, title, message, is_important, is_pinned, start_date, expiry_date, is_active, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(announcement_id)
        .bind(request.title.trim())
        .bind(request.message.trim())
        .bind(request.is_important)
        .bind(request.is_pinned)
        .bind(start_date)
        .bind(request.expiry_date)
        .bind(request.is_active)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?.into())
    }

    /// Apply a partial update. `expiry_date: Some(None)` clears the expiry.
    pub async fn update(
        &self,
        key: &ResourceKey,
        request: &UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE announcements SET
                title = COALESCE($2, title),
                message = COALESCE($3, message),
                is_important = COALESCE($4, is_important),
                is_pinned = COALESCE($5, is_pinned),
                start_date = COALESCE($6, start_date),
                expiry_date = CASE WHEN $7 THEN $8 ELSE expiry_date END,
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
            WHERE {}
            RETURNING *
            "#,
            key_predicate(key, AnnouncementEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(AnnouncementEntity::TABLE, "update");
        let result = bind_key(sqlx::query_as::<_, AnnouncementEntity>(&sql), key)
            .bind(request.title.as_deref().map(str::trim))
            .bind(request.message.as_deref().map(str::trim))
            .bind(request.is_important)
            .bind(request.is_pinned)
            .bind(request.start_date)
            .bind(request.expiry_date.is_some())
            .bind(request.expiry_date.flatten())
            .bind(request.is_active)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}
