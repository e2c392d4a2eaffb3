//! Database metrics collection.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Records one query duration, labelled by collection and operation.
pub fn record_query_duration(collection: &'static str, operation: &'static str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "collection" => collection,
        "operation" => operation
    )
    .record(duration_secs);
}

/// Records connection pool gauges. The health check calls this on every request.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times a database operation.
///
/// ```ignore
/// let timer = QueryTimer::new("slides", "reorder");
/// let result = sqlx::query(...).execute(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    collection: &'static str,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(collection: &'static str, operation: &'static str) -> Self {
        Self {
            collection,
            operation,
            start: Instant::now(),
        }
    }

    /// Records the elapsed duration.
    pub fn record(self) {
        record_query_duration(
            self.collection,
            self.operation,
            self.start.elapsed().as_secs_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_labels() {
        let timer = QueryTimer::new("slides", "reorder");
        assert_eq!(timer.collection, "slides");
        assert_eq!(timer.operation, "reorder");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        QueryTimer::new("enquiries", "insert").record();
    }
}
