//! # Invoice Repository
//!
//! Database operations for invoices.
//!
//! ## Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoices JOIN customers                                                │
//! │                                                                         │
//! │  page()    ORDER BY invoices.rowid    the order invoices were stored    │
//! │                                                                         │
//! │            1  John Doe        ◄── page 1, row 1                         │
//! │            2  Jane Doe                                                  │
//! │            ...                                                          │
//! │            7  Joe Walsh       ◄── page 2, row 1  (OFFSET 6)             │
//! │                                                                         │
//! │  latest()  ORDER BY date DESC, id ASC    newest first                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::search_pattern;
use acme_core::{Invoice, InvoiceRow, InvoiceStatusTotals, LatestInvoiceRow, PageRequest};

/// Repository for invoice database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InvoiceRepository::new(pool);
///
/// let latest = repo.latest(3).await?;
/// let rows = repo.page(Some("lee"), PageRequest::new(2)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Most recent invoices with their customer, newest first.
    pub async fn latest(&self, limit: u32) -> DbResult<Vec<LatestInvoiceRow>> {
        let rows = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT
                invoices.id,
                customers.name,
                customers.email,
                customers.image_url,
                invoices.amount
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC, invoices.id ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched latest invoices");
        Ok(rows)
    }

    /// Total number of invoices.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Sums of paid and pending amounts, in cents.
    ///
    /// Both are zero when there are no invoices.
    pub async fn status_totals(&self) -> DbResult<InvoiceStatusTotals> {
        let totals = sqlx::query_as::<_, InvoiceStatusTotals>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0) AS paid,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0) AS pending
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    /// One page of the invoices table, in storage order.
    ///
    /// ## Arguments
    /// * `filter` - `None` lists every invoice. `Some(q)` keeps invoices whose
    ///   customer name, email, date, status or amount (cents) contains `q`,
    ///   ignoring case.
    /// * `page` - 1-indexed page; a page past the end is empty
    pub async fn page(&self, filter: Option<&str>, page: PageRequest) -> DbResult<Vec<InvoiceRow>> {
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                customers.name,
                customers.email,
                customers.image_url,
                invoices.date,
                invoices.amount,
                invoices.status
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE ?1 IS NULL
               OR customers.name_folded LIKE ?1 ESCAPE '\'
               OR customers.email_folded LIKE ?1 ESCAPE '\'
               OR invoices.date LIKE ?1 ESCAPE '\'
               OR invoices.status LIKE ?1 ESCAPE '\'
               OR CAST(invoices.amount AS TEXT) LIKE ?1 ESCAPE '\'
            ORDER BY invoices.rowid
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(filter.map(search_pattern))
        .bind(page.limit())
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            page = page.page(),
            filtered = filter.is_some(),
            count = rows.len(),
            "Fetched invoice page"
        );
        Ok(rows)
    }

    /// Number of invoices [`page`](Self::page) would list across all pages.
    pub async fn matching_count(&self, filter: Option<&str>) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE ?1 IS NULL
               OR customers.name_folded LIKE ?1 ESCAPE '\'
               OR customers.email_folded LIKE ?1 ESCAPE '\'
               OR invoices.date LIKE ?1 ESCAPE '\'
               OR invoices.status LIKE ?1 ESCAPE '\'
               OR CAST(invoices.amount AS TEXT) LIKE ?1 ESCAPE '\'
            "#,
        )
        .bind(filter.map(search_pattern))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Gets an invoice by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Invoice))` - Invoice found
    /// * `Ok(None)` - No invoice with that id
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_id, amount, date, status
            FROM invoices
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Inserts an invoice. The customer must already exist.
    ///
    /// Runs on any executor: the pool, or a transaction (`&mut *tx`).
    pub async fn insert<'e, E>(executor: E, invoice: &Invoice) -> DbResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, date, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(&invoice.date)
        .bind(invoice.status)
        .execute(executor)
        .await?;

        debug!(id = %invoice.id, "Inserted invoice");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
