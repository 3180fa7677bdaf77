//! # Revenue Repository
//!
//! Monthly revenue for the dashboard chart. Rows come back in insertion
//! order, which is chronological.

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::DbResult;
use acme_core::Revenue;

/// Repository for the revenue table.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    pool: SqlitePool,
}

impl RevenueRepository {
    /// Creates a new RevenueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RevenueRepository { pool }
    }

    /// Every month, in the order they were recorded.
    pub async fn all(&self) -> DbResult<Vec<Revenue>> {
        let months = sqlx::query_as::<_, Revenue>(
            r#"
            SELECT month, revenue
            FROM revenue
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(months)
    }

    /// Number of recorded months.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revenue")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Records a month's revenue.
    pub async fn insert<'e, E>(executor: E, revenue: &Revenue) -> DbResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("INSERT INTO revenue (month, revenue) VALUES (?1, ?2)")
            .bind(&revenue.month)
            .bind(revenue.revenue)
            .execute(executor)
            .await?;

        Ok(())
    }
}
