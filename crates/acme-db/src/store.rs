//! # Dashboard Store
//!
//! The one seam between the data access layer and wherever the rows live.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  DataAccess ── Arc<dyn DashboardStore> ──┬──► Database     (SQLite)     │
//! │                                          │                              │
//! │                                          └──► FixtureStore (in memory)  │
//! │                                                                         │
//! │  Both return raw rows with amounts in cents. Formatting happens above.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use crate::error::DbResult;
use crate::pool::Database;
use acme_core::{
    CustomerField, CustomerSummaryRow, Invoice, InvoiceRow, InvoiceStatusTotals,
    LatestInvoiceRow, PageRequest, Revenue, User,
};

/// Read access to dashboard data.
///
/// Implementations must agree on ordering and matching so callers can swap
/// one for the other:
/// - revenue in insertion order
/// - invoice pages in insertion order; only `latest_invoices` is newest
///   first (`date` desc, then `id` asc)
/// - customers by name (byte order), then `id`
/// - text filters are literal substrings compared after Unicode lowercasing,
///   so `%` and `_` match only themselves
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Monthly revenue, chronological.
    async fn revenue(&self) -> DbResult<Vec<Revenue>>;

    /// The `limit` most recent invoices with their customer.
    async fn latest_invoices(&self, limit: u32) -> DbResult<Vec<LatestInvoiceRow>>;

    /// Total number of invoices.
    async fn invoice_count(&self) -> DbResult<i64>;

    /// Total number of customers.
    async fn customer_count(&self) -> DbResult<i64>;

    /// Paid and pending sums, in cents.
    async fn invoice_status_totals(&self) -> DbResult<InvoiceStatusTotals>;

    /// One page of invoices joined with customers, in insertion order.
    ///
    /// `filter: None` lists everything; `Some(q)` matches `q` against
    /// customer name, email, invoice date, status and amount.
    async fn invoices_page(
        &self,
        filter: Option<&str>,
        page: PageRequest,
    ) -> DbResult<Vec<InvoiceRow>>;

    /// Number of invoices `invoices_page` would list for `filter`.
    async fn matching_invoice_count(&self, filter: Option<&str>) -> DbResult<i64>;

    /// Invoice by id, `None` if absent.
    async fn invoice_by_id(&self, id: &str) -> DbResult<Option<Invoice>>;

    /// Id and name of every customer, by name.
    async fn customer_fields(&self) -> DbResult<Vec<CustomerField>>;

    /// Customers matching `query` on name or email, with invoice aggregates.
    async fn customer_summaries(&self, query: &str) -> DbResult<Vec<CustomerSummaryRow>>;

    /// User with exactly this email, `None` if absent.
    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>>;

    /// Succeeds when the store can serve reads.
    async fn health_check(&self) -> DbResult<()>;
}

#[async_trait]
impl DashboardStore for Database {
    async fn revenue(&self) -> DbResult<Vec<Revenue>> {
        self.revenues().all().await
    }

    async fn latest_invoices(&self, limit: u32) -> DbResult<Vec<LatestInvoiceRow>> {
        self.invoices().latest(limit).await
    }

    async fn invoice_count(&self) -> DbResult<i64> {
        self.invoices().count().await
    }

    async fn customer_count(&self) -> DbResult<i64> {
        self.customers().count().await
    }

    async fn invoice_status_totals(&self) -> DbResult<InvoiceStatusTotals> {
        self.invoices().status_totals().await
    }

    async fn invoices_page(
        &self,
        filter: Option<&str>,
        page: PageRequest,
    ) -> DbResult<Vec<InvoiceRow>> {
        self.invoices().page(filter, page).await
    }

    async fn matching_invoice_count(&self, filter: Option<&str>) -> DbResult<i64> {
        self.invoices().matching_count(filter).await
    }

    async fn invoice_by_id(&self, id: &str) -> DbResult<Option<Invoice>> {
        self.invoices().find_by_id(id).await
    }

    async fn customer_fields(&self) -> DbResult<Vec<CustomerField>> {
        self.customers().fields().await
    }

    async fn customer_summaries(&self, query: &str) -> DbResult<Vec<CustomerSummaryRow>> {
        self.customers().summaries(query).await
    }

    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.users().find_by_email(email).await
    }

    async fn health_check(&self) -> DbResult<()> {
        self.ping().await
    }
}
