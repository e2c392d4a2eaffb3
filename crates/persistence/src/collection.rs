//! Generic read/delete/toggle access shared by every content table.
//!
//! A content table is described once by implementing [`Collection`] on its
//! row entity. Inserts and updates stay per entity because their column
//! lists differ.

use std::marker::PhantomData;

use domain::models::ResourceKey;
use shared::pagination::PageRequest;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use crate::metrics::QueryTimer;

/// Static description of a content table.
///
/// All SQL fragments are compile-time constants; only filter values are
/// bound as parameters.
pub trait Collection: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Domain model the rows convert into.
    type Model: From<Self> + Send;

    const TABLE: &'static str;
    const BUSINESS_ID_COLUMN: &'static str;
    const BUSINESS_ID_PREFIX: &'static str;
    /// Predicate selecting rows shown on the public site.
    const PUBLIC_FILTER: &'static str;
    const PUBLIC_ORDER: &'static str;
    const ADMIN_ORDER: &'static str;
}

/// Collections with an `is_active` flag that can be flipped.
pub trait Toggle: Collection {}

/// An equality filter on one column, compared as text so enum columns
/// accept their display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Renders `WHERE base AND col::text = $n ...` starting at `$first_param`.
pub(crate) fn where_clause(base: Option<&str>, filters: &[Filter], first_param: usize) -> String {
    let mut conditions: Vec<String> = base.map(|b| vec![format!("({})", b)]).unwrap_or_default();
    conditions.extend(
        filters
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{}::text = ${}", f.column, first_param + i)),
    );

    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

/// Predicate addressing one row by opaque id or business id, bound as `$1`.
pub(crate) fn key_predicate(key: &ResourceKey, business_column: &str) -> String {
    match key {
        ResourceKey::Id(_) => "id = $1".to_string(),
        ResourceKey::BusinessId(_) => format!("{} = $1", business_column),
    }
}

/// Binds the value matching [`key_predicate`].
pub(crate) fn bind_key<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    key: &ResourceKey,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    match key {
        ResourceKey::Id(id) => query.bind(*id),
        ResourceKey::BusinessId(business_id) => query.bind(business_id.clone()),
    }
}

/// Read, delete and toggle operations for any [`Collection`].
pub struct CollectionRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for CollectionRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Collection> CollectionRepository<E> {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Find one record by opaque id or business id.
    pub async fn find(&self, key: &ResourceKey) -> Result<Option<E::Model>, sqlx::Error> {
        let sql = format!(
            "SELECT * FROM {} WHERE {}",
            E::TABLE,
            key_predicate(key, E::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(E::TABLE, "find");
        let result = bind_key(sqlx::query_as::<_, E>(&sql), key)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }

    /// Records visible on the public site, in public order.
    pub async fn list_public(&self, filters: &[Filter]) -> Result<Vec<E::Model>, sqlx::Error> {
        let sql = format!(
            "SELECT * FROM {}{} ORDER BY {}",
            E::TABLE,
            where_clause(Some(E::PUBLIC_FILTER), filters, 1),
            E::PUBLIC_ORDER
        );

        let mut query = sqlx::query_as::<_, E>(&sql);
        for filter in filters {
            query = query.bind(filter.value.clone());
        }

        let timer = QueryTimer::new(E::TABLE, "list_public");
        let result = query.fetch_all(&self.pool).await;
        timer.record();

        Ok(result?.into_iter().map(Into::into).collect())
    }

    /// Every matching record in admin order, unpaginated.
    pub async fn list_all(&self, filters: &[Filter]) -> Result<Vec<E::Model>, sqlx::Error> {
        let sql = format!(
            "SELECT * FROM {}{} ORDER BY {}",
            E::TABLE,
            where_clause(None, filters, 1),
            E::ADMIN_ORDER
        );

        let mut query = sqlx::query_as::<_, E>(&sql);
        for filter in filters {
            query = query.bind(filter.value.clone());
        }

        let timer = QueryTimer::new(E::TABLE, "list_all");
        let result = query.fetch_all(&self.pool).await;
        timer.record();

        Ok(result?.into_iter().map(Into::into).collect())
    }

    /// One page of matching records in admin order, plus the total count.
    pub async fn list_page(
        &self,
        filters: &[Filter],
        page: PageRequest,
    ) -> Result<(Vec<E::Model>, i64), sqlx::Error> {
        let where_sql = where_clause(None, filters, 1);

        let count_sql = format!("SELECT COUNT(*) FROM {}{}", E::TABLE, where_sql);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for filter in filters {
            count_query = count_query.bind(filter.value.clone());
        }

        let list_sql = format!(
            "SELECT * FROM {}{} ORDER BY {} LIMIT ${} OFFSET ${}",
            E::TABLE,
            where_sql,
            E::ADMIN_ORDER,
            filters.len() + 1,
            filters.len() + 2
        );
        let mut list_query = sqlx::query_as::<_, E>(&list_sql);
        for filter in filters {
            list_query = list_query.bind(filter.value.clone());
        }

        let timer = QueryTimer::new(E::TABLE, "list_page");
        let result = async {
            let total = count_query.fetch_one(&self.pool).await?;
            let rows = list_query
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

    /// Delete one record, returning it when it existed.
    pub async fn delete(&self, key: &ResourceKey) -> Result<Option<E::Model>, sqlx::Error> {
        let sql = format!(
            "DELETE FROM {} WHERE {} RETURNING *",
            E::TABLE,
            key_predicate(key, E::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(E::TABLE, "delete");
        let result = bind_key(sqlx::query_as::<_, E>(&sql), key)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}

impl<E: Toggle> CollectionRepository<E> {
    /// Flip `is_active`, returning the updated record when it exists.
    pub async fn toggle_active(&self, key: &ResourceKey) -> Result<Option<E::Model>, sqlx::Error> {
        let sql = format!(
            "UPDATE {} SET is_active = NOT is_active, updated_at = NOW() WHERE {} RETURNING *",
            E::TABLE,
            key_predicate(key, E::BUSINESS_ID_COLUMN)
        );

        let timer = QueryTimer::new(E::TABLE, "toggle_active");
        let result = bind_key(sqlx::query_as::<_, E>(&sql), key)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        Ok(result?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_where_clause_empty() {
        assert_eq!(where_clause(None, &[], 1), "");
    }

    #[test]
    fn test_where_clause_base_only() {
        assert_eq!(
            where_clause(Some("is_active = TRUE"), &[], 1),
            " WHERE (is_active = TRUE)"
        );
    }

    #[test]
    fn test_where_clause_with_filters() {
        let filters = [
            Filter::eq("class", "Class 5"),
            Filter::eq("subject", "Science"),
        ];
        assert_eq!(
            where_clause(Some("is_active = TRUE"), &filters, 1),
            " WHERE (is_active = TRUE) AND class::text = $1 AND subject::text = $2"
        );
        assert_eq!(
            where_clause(None, &filters[..1], 3),
            " WHERE class::text = $3"
        );
    }

    #[test]
    fn test_key_predicate() {
        assert_eq!(
            key_predicate(&ResourceKey::Id(Uuid::new_v4()), "slider_id"),
            "id = $1"
        );
        assert_eq!(
            key_predicate(&ResourceKey::BusinessId("SLD-0A1B2C3D".into()), "slider_id"),
            "slider_id = $1"
        );
    }
}
