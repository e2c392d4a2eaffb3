//! Slide repository for database operations.
//!
//! Every operation that changes `sort_order` runs in a transaction holding
//! a table lock, so concurrent creates and deletes cannot break the dense
//! `1..=N` sequence.

use domain::models::slide::{
    CreateSlideRequest, MoveDirection, SlideOrderAssignment, UpdateSlideRequest, SLIDE_ID_PREFIX,
};
use domain::models::{ResourceKey, Slide};
use domain::services::slide_order;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::collection::{bind_key, key_predicate, Collection, Toggle};
use crate::entities::SlideEntity;
use crate::metrics::QueryTimer;

impl Collection for SlideEntity {
    type Model = Slide;

    const TABLE: &'static str = "slides";
    const BUSINESS_ID_COLUMN: &'static str = "slider_id";
    const BUSINESS_ID_PREFIX: &'static str = SLIDE_ID_PREFIX;
    const PUBLIC_FILTER: &'static str = "is_active";
    const PUBLIC_ORDER: &'static str = "sort_order ASC";
    const ADMIN_ORDER: &'static str = "sort_order ASC";
}

impl Toggle for SlideEntity {}

/// Repository for slide writes and ordering.
#[derive(Clone)]
pub struct SlideRepository {
    pool: PgPool,
}

async fn lock_slides(tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query("LOCK TABLE slides IN SHARE ROW EXCLUSIVE MODE")
        .execute(&mut **tx)
        .await?;
    Ok(())
}

impl SlideRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a slide at `max(order) + 1`.
    pub async fn insert(
        &self,
        slider_id: &str,
        request: &CreateSlideRequest,
        uploaded_by: Uuid,
    ) -> Result<Slide, sqlx::Error> {
        let timer = QueryTimer::new(SlideEntity::TABLE, "insert");
        let result = async {
            let mut tx = self.pool.begin().await?;
            lock_slides(&mut tx).await?;

            let current_max: Option<i32> =
                sqlx::query_scalar("SELECT MAX(sort_order) FROM slides")
                    .fetch_one(&mut *tx)
                    .await?;

            let entity = sqlx::query_as::<_, SlideEntity>(
                r#"
                INSERT INTO slides
                    (slider_id, title, description, image_url, button_text, button_link, sort_order, is_active, uploaded_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
                "#,
            )
            .bind(slider_id)
            .bind(request.title.trim())
            .bind(request.description.as_deref())
            .bind(&request.image_url)
            .bind(request.button_text.as_deref())
            .bind(request.button_link.as_deref())
            .bind(slide_order::next_order(current_max))
            .bind(request.is_active)
            .bind(uploaded_by)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok::<_, sqlx::Error>(entity)
        }
        .await;
        timer.record();

        Ok(result?.into())
    }

    /// Partial update of content fields. The order is never touched here.
    pub async fn update(
        &self,
        key: &ResourceKey,
        request: &UpdateSlideRequest,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE slides SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                image_url = COALESCE($5, image_url),
                button_text = CASE WHEN $6 THEN $7 ELSE button_text END,
                button_link = CASE WHEN $8 THEN $9 ELSE button_link END,
                is_active = COALESCE($10, is_active),
                updated_at = NOW()
            WHERE {}
            RETURNING *
            "#,
            key_predicate(key, SlideEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(SlideEntity::TABLE, "update");
        let result = bind_key(sqlx::query_as::<_, SlideEntity>(&sql), key)
            .bind(request.title.as_deref().map(str::trim))
            .bind(request.description.is_some())
            .bind(request.description.as_ref().and_then(Option::as_deref))
            .bind(request.image_url.as_deref())
            .bind(request.button_text.is_some())
            .bind(request.button_text.as_ref().and_then(Option::as_deref))
            .bind(request.button_link.is_some())
            .bind(request.button_link.as_ref().and_then(Option::as_deref))
            .bind(request.is_active)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }

    /// Delete a slide and shift every later slide down by one.
    pub async fn delete_and_renumber(
        &self,
        key: &ResourceKey,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let sql = format!(
            "DELETE FROM slides WHERE {} RETURNING *",
            key_predicate(key, SlideEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(SlideEntity::TABLE, "delete_and_renumber");
        let result = async {
            let mut tx = self.pool.begin().await?;
            lock_slides(&mut tx).await?;

            let deleted = bind_key(sqlx::query_as::<_, SlideEntity>(&sql), key)
                .fetch_optional(&mut *tx)
                .await?;

            let Some(deleted) = deleted else {
                tx.rollback().await?;
                return Ok(None);
            };

            let shifted = sqlx::query(
                r#"
                UPDATE slides
                SET sort_order = sort_order - 1, updated_at = NOW()
                WHERE sort_order > $1
                "#,
            )
            .bind(deleted.sort_order)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            debug!(
                slider_id = %deleted.slider_id,
                shifted = shifted.rows_affected(),
                "Renumbered slides after delete"
            );
            Ok::<_, sqlx::Error>(Some(deleted))
        }
        .await;
        timer.record();

        Ok(result?.map(Into::into))
    }

    /// Apply `{id, order}` assignments verbatim and return the whole carousel.
    ///
    /// Fails with `RowNotFound` and rolls back if any id does not exist.
    pub async fn reorder(
        &self,
        assignments: &[SlideOrderAssignment],
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let timer = QueryTimer::new(SlideEntity::TABLE, "reorder");
        let result = async {
            let mut tx = self.pool.begin().await?;

            for assignment in assignments {
                let updated = sqlx::query(
                    "UPDATE slides SET sort_order = $2, updated_at = NOW() WHERE id = $1",
                )
                .bind(assignment.id)
                .bind(assignment.order)
                .execute(&mut *tx)
                .await?;

                if updated.rows_affected() == 0 {
                    tx.rollback().await?;
                    return Err(sqlx::Error::RowNotFound);
                }
            }

            let slides =
                sqlx::query_as::<_, SlideEntity>("SELECT * FROM slides ORDER BY sort_order ASC")
                    .fetch_all(&mut *tx)
                    .await?;

            tx.commit().await?;
            Ok::<_, sqlx::Error>(slides)
        }
        .await;
        timer.record();

        Ok(result?.into_iter().map(Into::into).collect())
    }

    /// Swap a slide with its neighbour. At either end this is a no-op that
    /// returns the slide unchanged.
    pub async fn move_slide(
        &self,
        key: &ResourceKey,
        direction: MoveDirection,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let sql = format!(
            "SELECT * FROM slides WHERE {}",
            key_predicate(key, SlideEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(SlideEntity::TABLE, "move");
        let result = async {
            let mut tx = self.pool.begin().await?;
            lock_slides(&mut tx).await?;

            let slide = bind_key(sqlx::query_as::<_, SlideEntity>(&sql), key)
                .fetch_optional(&mut *tx)
                .await?;

            let Some(slide) = slide else {
                tx.rollback().await?;
                return Ok(None);
            };

            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM slides")
                .fetch_one(&mut *tx)
                .await?;

            let Some(target) = slide_order::neighbour_order(slide.sort_order, total, direction)
            else {
                tx.rollback().await?;
                return Ok(Some(slide));
            };

            sqlx::query(
                "UPDATE slides SET sort_order = $1, updated_at = NOW() WHERE sort_order = $2",
            )
            .bind(slide.sort_order)
            .bind(target)
            .execute(&mut *tx)
            .await?;

            let moved = sqlx::query_as::<_, SlideEntity>(
                "UPDATE slides SET sort_order = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
            )
            .bind(slide.id)
            .bind(target)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok::<_, sqlx::Error>(Some(moved))
        }
        .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}
