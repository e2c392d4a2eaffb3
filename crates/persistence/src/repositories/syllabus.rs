//! Syllabus repository for database operations.

use domain::models::syllabus::{CreateSyllabusRequest, UpdateSyllabusRequest, SYLLABUS_ID_PREFIX};
use domain::models::{ResourceKey, SyllabusEntry};
use sqlx::PgPool;
use uuid::Uuid;

use crate::collection::{bind_key, key_predicate, Collection};
use crate::entities::syllabus::{SchoolClassDb, SubjectDb, SyllabusEntryEntity};
use crate::metrics::QueryTimer;

impl Collection for SyllabusEntryEntity {
    type Model = SyllabusEntry;

    const TABLE: &'static str = "syllabus_entries";
    const BUSINESS_ID_COLUMN: &'static str = "syllabus_id";
    const BUSINESS_ID_PREFIX: &'static str = SYLLABUS_ID_PREFIX;
    const PUBLIC_FILTER: &'static str = "is_active";
    // Enum order for classes (Class 2 before Class 10), alphabetical subjects.
    const PUBLIC_ORDER: &'static str = "class, subject::text";
    const ADMIN_ORDER: &'static str = "created_at DESC";
}

/// Repository for syllabus writes.
#[derive(Clone)]
pub struct SyllabusRepository {
    pool: PgPool,
}

impl SyllabusRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        syllabus_id: &str,
        request: &CreateSyllabusRequest,
        uploaded_by: Uuid,
    ) -> Result<SyllabusEntry, sqlx::Error> {
        let timer = QueryTimer::new(SyllabusEntryEntity::TABLE, "insert");
        let result = sqlx::query_as::<_, SyllabusEntryEntity>(
            r#"
            INSERT INTO syllabus_entries
                (syllabus_id, title, class, subject, academic_year, description, file_url, file_size, is_active, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(syllabus_id)
        .bind(request.title.trim())
        .bind(SchoolClassDb::from(request.class))
        .bind(SubjectDb::from(request.subject))
        .bind(request.academic_year.trim())
        .bind(request.description.as_deref())
        .bind(&request.file_url)
        .bind(request.file_size.as_deref())
        .bind(request.is_active)
        .bind(uploaded_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?.into())
    }

    pub async fn update(
        &self,
        key: &ResourceKey,
        request: &UpdateSyllabusRequest,
    ) -> Result<Option<SyllabusEntry>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE syllabus_entries SET
                title = COALESCE($2, title),
                class = COALESCE($3, class),
                subject = COALESCE($4, subject),
                academic_year = COALESCE($5, academic_year),
                description = CASE WHEN $6 THEN $7 ELSE description END,
                file_url = COALESCE($8, file_url),
                file_size = CASE WHEN $9 THEN $10 ELSE file_size END,
                is_active = COALESCE($11, is_active),
                updated_at = NOW()
            WHERE {}
            RETURNING *
            "#,
            key_predicate(key, SyllabusEntryEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(SyllabusEntryEntity::TABLE, "update");
        let result = bind_key(sqlx::query_as::<_, SyllabusEntryEntity>(&sql), key)
            .bind(request.title.as_deref().map(str::trim))
            .bind(request.class.map(SchoolClassDb::from))
            .bind(request.subject.map(SubjectDb::from))
            .bind(request.academic_year.as_deref().map(str::trim))
            .bind(request.description.is_some())
            .bind(request.description.as_ref().and_then(Option::as_deref))
            .bind(request.file_url.as_deref())
            .bind(request.file_size.is_some())
            .bind(request.file_size.as_ref().and_then(Option::as_deref))
            .bind(request.is_active)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}
