//! Gallery repository for database operations.

use domain::models::gallery::{
    CreateGalleryImageRequest, UpdateGalleryImageRequest, GALLERY_ID_PREFIX,
};
use domain::models::{GalleryImage, ResourceKey};
use sqlx::PgPool;
use uuid::Uuid;

use crate::collection::{bind_key, key_predicate, Collection};
use crate::entities::gallery::{GalleryBranchDb, GalleryCategoryDb, GalleryImageEntity};
use crate::metrics::QueryTimer;

impl Collection for GalleryImageEntity {
    type Model = GalleryImage;

    const TABLE: &'static str = "gallery_images";
    const BUSINESS_ID_COLUMN: &'static str = "image_id";
    const BUSINESS_ID_PREFIX: &'static str = GALLERY_ID_PREFIX;
    const PUBLIC_FILTER: &'static str = "TRUE";
    const PUBLIC_ORDER: &'static str = "created_at DESC";
    const ADMIN_ORDER: &'static str = "created_at DESC";
}

/// Repository for gallery writes.
#[derive(Clone)]
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        image_id: &str,
        request: &CreateGalleryImageRequest,
        uploaded_by: Uuid,
    ) -> Result<GalleryImage, sqlx::Error> {
        let timer = QueryTimer::new(GalleryImageEntity::TABLE, "insert");
        let result = sqlx::query_as::<_, GalleryImageEntity>(
            r#"
            INSERT INTO gallery_images (image_id, title, category, image_url, description, branch, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(image_id)
        .bind(request.title.trim())
        .bind(GalleryCategoryDb::from(request.category))
        .bind(&request.image_url)
        .bind(request.description.as_deref())
        .bind(request.branch.map(GalleryBranchDb::from))
        .bind(uploaded_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?.into())
    }

    pub async fn update(
        &self,
        key: &ResourceKey,
        request: &UpdateGalleryImageRequest,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE gallery_images SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                image_url = COALESCE($4, image_url),
                description = CASE WHEN $5 THEN $6 ELSE description END,
                branch = CASE WHEN $7 THEN $8 ELSE branch END,
                updated_at = NOW()
            WHERE {}
            RETURNING *
            "#,
            key_predicate(key, GalleryImageEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(GalleryImageEntity::TABLE, "update");
        let result = bind_key(sqlx::query_as::<_, GalleryImageEntity>(&sql), key)
            .bind(request.title.as_deref().map(str::trim))
            .bind(request.category.map(GalleryCategoryDb::from))
            .bind(request.image_url.as_deref())
            .bind(request.description.is_some())
            .bind(request.description.as_ref().and_then(Option::as_deref))
            .bind(request.branch.is_some())
            .bind(request.branch.flatten().map(GalleryBranchDb::from))
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}
