//! Staff account repository for database operations.

use domain::models::account::UpdateAccountRequest;
use domain::models::{Account, Role};
use shared::pagination::PageRequest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AccountEntity, AccountRoleDb};
use crate::metrics::QueryTimer;

const TABLE: &str = "accounts";

/// Repository for staff account database operations.
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account row (including the password hash) by email.
    ///
    /// Emails are compared case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountEntity>, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "find_by_email");
        let result = sqlx::query_as::<_, AccountEntity>(
            "SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, AccountEntity>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        Ok(result?.map(Into::into))
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "exists_by_email");
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert an account. A duplicate email fails with a unique violation.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        role: Role,
    ) -> Result<Account, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "create");
        let result = sqlx::query_as::<_, AccountEntity>(
            r#"
            INSERT INTO accounts (email, password_hash, name, role)
            VALUES (LOWER($1), $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(AccountRoleDb::from(role))
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?.into())
    }

    /// One page of accounts, newest first, plus the total count.
    pub async fn list_page(&self, page: PageRequest) -> Result<(Vec<Account>, i64), sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "list_page");
        let result = async {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
                .fetch_one(&self.pool)
                .await?;
            let rows = sqlx::query_as::<_, AccountEntity>(
                r#"
                SELECT * FROM accounts
                ORDER BY created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(page.limit_i64())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
            Ok::<_, sqlx::Error>((rows, total))
        }
        .await;
        timer.record();

        let (rows, total) = result?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Partial update of name, role and active flag.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAccountRequest,
    ) -> Result<Option<Account>, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "update");
        let result = sqlx::query_as::<_, AccountEntity>(
            r#"
            UPDATE accounts SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.role.map(AccountRoleDb::from))
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?.map(Into::into))
    }

    /// Replace the password hash. Returns false when the account is missing.
    pub async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "set_password_hash");
        let result = sqlx::query(
            "UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn touch_last_login(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "touch_last_login");
        let result = sqlx::query("UPDATE accounts SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|_| ())
    }

    /// Delete an account, returning it when it existed.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        let timer = QueryTimer::new(TABLE, "delete");
        let result = sqlx::query_as::<_, AccountEntity>("DELETE FROM accounts WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        Ok(result?.map(Into::into))
    }
}
