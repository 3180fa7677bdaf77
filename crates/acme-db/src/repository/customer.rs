//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Customers Table Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customers LEFT JOIN invoices                                           │
//! │                                                                         │
//! │  Amy Burns  ──┬── inv paid    1000                                      │
//! │               └── inv pending 2500   → 2 invoices, $25.00, $10.00       │
//! │                                                                         │
//! │  New Person ───── (no invoices)      → 0 invoices, $0.00,  $0.00        │
//! │                                                                         │
//! │  LEFT JOIN keeps customers without invoices; COALESCE turns the NULL    │
//! │  sums into zero.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::{fold_case, search_pattern};
use acme_core::{Customer, CustomerField, CustomerSummaryRow};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Id and name of every customer, ordered by name.
    pub async fn fields(&self) -> DbResult<Vec<CustomerField>> {
        let fields = sqlx::query_as::<_, CustomerField>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(fields)
    }

    /// Customers whose name or email contains `query`, with their invoice
    /// count and paid/pending totals.
    ///
    /// Case is ignored for any script: the query is folded with
    /// [`fold_case`] and compared against the folded columns. An empty query
    /// matches every customer.
    pub async fn summaries(&self, query: &str) -> DbResult<Vec<CustomerSummaryRow>> {
        let rows = sqlx::query_as::<_, CustomerSummaryRow>(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0) AS total_pending,
                COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE customers.name_folded LIKE ?1 ESCAPE '\'
               OR customers.email_folded LIKE ?1 ESCAPE '\'
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC, customers.id ASC
            "#,
        )
        .bind(search_pattern(query))
        .fetch_all(&self.pool)
        .await?;

        debug!(query = %query, count = rows.len(), "Fetched customer summaries");
        Ok(rows)
    }

    /// Total number of customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserts a customer, with the folded search columns.
    ///
    /// Runs on any executor: the pool, or a transaction (`&mut *tx`).
    pub async fn insert<'e, E>(executor: E, customer: &Customer) -> DbResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url, name_folded, email_folded)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .bind(fold_case(&customer.name))
        .bind(fold_case(&customer.email))
        .execute(executor)
        .await?;

        debug!(id = %customer.id, "Inserted customer");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Dataset;
    use crate::pool::{Database, DbConfig};
    use crate::seed::seed_dataset;
    use acme_core::{Invoice, InvoiceStatus};

    fn customer(id: &str, name: &str, email: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: format!("/customers/{id}.png"),
        }
    }

    fn invoice(id: &str, customer_id: &str, amount: i64, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            amount,
            date: "2023-06-01".to_string(),
            status,
        }
    }

    async fn small_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let dataset = Dataset {
            customers: vec![
                customer("c2", "Zed Lee", "zed@lee.com"),
                customer("c1", "Amy Burns", "amy@burns.com"),
                customer("c3", "New Person", "new@example.com"),
            ],
            invoices: vec![
                invoice("i1", "c1", 1000, InvoiceStatus::Paid),
                invoice("i2", "c1", 2500, InvoiceStatus::Pending),
                invoice("i3", "c2", 700, InvoiceStatus::Paid),
            ],
            revenue: Vec::new(),
            users: Vec::new(),
        };
        seed_dataset(&db, &dataset).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_fields_are_sorted_by_name() {
        let db = small_db().await;

        let names: Vec<_> = db
            .customers()
            .fields()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Amy Burns", "New Person", "Zed Lee"]);
    }

    #[tokio::test]
    async fn test_summaries_aggregate_by_status() {
        let db = small_db().await;

        let rows = db.customers().summaries("").await.unwrap();
        assert_eq!(rows.len(), 3);

        let amy = &rows[0];
        assert_eq!(amy.name, "Amy Burns");
        assert_eq!(amy.total_invoices, 2);
        assert_eq!(amy.total_paid, 1000);
        assert_eq!(amy.total_pending, 2500);

        let new_person = &rows[1];
        assert_eq!(new_person.total_invoices, 0);
        assert_eq!(new_person.total_paid, 0);
        assert_eq!(new_person.total_pending, 0);
    }

    #[tokio::test]
    async fn test_summaries_filter_on_name_or_email() {
        let db = small_db().await;
        let repo = db.customers();

        let by_name = repo.summaries("LEE").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "c2");

        let by_email = repo.summaries("example.com").await.unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, "c3");

        assert!(repo.summaries("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summaries_ignore_case_beyond_ascii() {
        let db = small_db().await;
        CustomerRepository::insert(
            db.pool(),
            &customer("c4", "Élodie Ünal", "ELODIE@UNAL.FR"),
        )
        .await
        .unwrap();
        let repo = db.customers();

        for query in ["élodie", "ÉLODIE", "ünal", "Ünal", "elodie@unal"] {
            let rows = repo.summaries(query).await.unwrap();
            assert_eq!(rows.len(), 1, "query {query:?}");
            assert_eq!(rows[0].name, "Élodie Ünal");
        }
    }

    #[tokio::test]
    async fn test_sample_counts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_dataset(&db, &Dataset::sample()).await.unwrap();

        assert_eq!(db.customers().count().await.unwrap(), 12);
    }
}
