//! Enquiry repository for database operations.

use domain::models::enquiry::{
    BranchCount, CreateEnquiryRequest, EnquiryStats, StatusCounts, ENQUIRY_ID_PREFIX,
};
use domain::models::{Enquiry, EnquiryStatus, ResourceKey};
use sqlx::PgPool;

use crate::collection::{bind_key, key_predicate, Collection};
use crate::entities::enquiry::{
    BranchCountRow, BranchDb, EnquiryEntity, EnquiryStatusDb, StatusCountRow,
};
use crate::metrics::QueryTimer;

impl Collection for EnquiryEntity {
    type Model = Enquiry;

    const TABLE: &'static str = "enquiries";
    const BUSINESS_ID_COLUMN: &'static str = "enquiry_id";
    const BUSINESS_ID_PREFIX: &'static str = ENQUIRY_ID_PREFIX;
    // Enquiries are never listed publicly.
    const PUBLIC_FILTER: &'static str = "FALSE";
    const PUBLIC_ORDER: &'static str = "created_at DESC";
    const ADMIN_ORDER: &'static str = "created_at DESC";
}

/// Repository for enquiry writes and statistics.
#[derive(Clone)]
pub struct EnquiryRepository {
    pool: PgPool,
}

impl EnquiryRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new enquiry with status `pending`.
    pub async fn insert(
        &self,
        enquiry_id: &str,
        request: &CreateEnquiryRequest,
    ) -> Result<Enquiry, sqlx::Error> {
        let timer = QueryTimer::new(EnquiryEntity::TABLE, "insert");
        let result = sqlx::query_as::<_, EnquiryEntity>(
            r#"
            INSERT INTO enquiries (enquiry_id, student_name, parent_name, email, phone, branch, grade, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(enquiry_id)
        .bind(request.student_name.trim())
        .bind(request.parent_name.trim())
        .bind(request.email.trim().to_lowercase())
        .bind(request.phone.trim())
        .bind(BranchDb::from(request.branch))
        .bind(request.grade.trim())
        .bind(request.message.as_deref().map(str::trim))
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?.into())
    }

    /// Set the follow-up status of one enquiry.
    pub async fn update_status(
        &self,
        key: &ResourceKey,
        status: EnquiryStatus,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let sql = format!(
            "UPDATE enquiries SET status = $2, updated_at = NOW() WHERE {} RETURNING *",
            key_predicate(key, EnquiryEntity::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(EnquiryEntity::TABLE, "update_status");
        let result = bind_key(sqlx::query_as::<_, EnquiryEntity>(&sql), key)
            .bind(EnquiryStatusDb::from(status))
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }

    /// Totals per status and per campus, computed on demand.
    pub async fn stats(&self) -> Result<EnquiryStats, sqlx::Error> {
        let timer = QueryTimer::new(EnquiryEntity::TABLE, "stats");
        let by_status = sqlx::query_as::<_, StatusCountRow>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM enquiries
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        let by_branch = sqlx::query_as::<_, BranchCountRow>(
            r#"
            SELECT branch, COUNT(*) AS count
            FROM enquiries
            GROUP BY branch
            ORDER BY branch
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();

        let overall = StatusCounts::from_rows(
            by_status?
                .into_iter()
                .map(|row| (EnquiryStatus::from(row.status), row.count)),
        );
        let by_branch = by_branch?
            .into_iter()
            .map(|row| BranchCount {
                branch: row.branch.into(),
                count: row.count,
            })
            .collect();

        Ok(EnquiryStats { overall, by_branch })
    }
}
