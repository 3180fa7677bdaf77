//! # Data Access
//!
//! The nine reads behind the dashboard pages.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Dashboard Read                               │
//! │                                                                         │
//! │  fetch_filtered_customers("amy")     (input passed through as given)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  guard(Operation::FilteredCustomers, store.customer_summaries(..))      │
//! │       │                                                                 │
//! │       ├── simulated latency (0 by default)                              │
//! │       ├── store read ─────────────── DbError ───► error!, generic error │
//! │       ▼                                                                 │
//! │  rows in cents ──► display records ("$1,000.00")                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found is never an error: a missing invoice or user is `None`, a query
//! nothing matches gives an empty `Vec`, and so does a page past the end.
//! Inputs are not trimmed or length-checked on the way to the store.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::{DashboardConfig, StoreBackend};
use crate::error::{ConfigError, ConfigResult, DataAccessError, DataResult, Operation};
use acme_core::{
    page_count, CardData, CustomerField, CustomerSummary, InvoiceDisplay, InvoiceForm,
    LatestInvoice, PageRequest, PageRounding, Revenue, User, LATEST_INVOICES_LIMIT,
};
use acme_db::{DashboardStore, Database, DbConfig, DbError, DbResult, FixtureStore};

// =============================================================================
// Options
// =============================================================================

/// Behavior switches for [`DataAccess`].
///
/// The defaults reproduce the dashboard as it has always behaved: no delay,
/// the invoices page ignores its search query, and a partial last page is
/// not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataOptions {
    /// Delay before every store read.
    pub simulated_latency: Duration,

    /// Match the search query on the invoices page.
    pub filter_invoices: bool,

    /// How `fetch_invoices_pages` treats a partial last page.
    pub page_rounding: PageRounding,
}

impl DataOptions {
    pub fn simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn filter_invoices(mut self, on: bool) -> Self {
        self.filter_invoices = on;
        self
    }

    pub fn page_rounding(mut self, rounding: PageRounding) -> Self {
        self.page_rounding = rounding;
        self
    }
}

// =============================================================================
// Data Access
// =============================================================================

/// Read access to everything the dashboard shows.
///
/// Cheap to clone; clones share the same store.
///
/// ## Usage
/// ```rust,ignore
/// let dal = DataAccess::connect(&DashboardConfig::load(None)?).await?;
///
/// let cards = dal.fetch_card_data().await?;
/// let invoices = dal.fetch_filtered_invoices("", 2).await?;
/// ```
#[derive(Clone)]
pub struct DataAccess {
    store: Arc<dyn DashboardStore>,
    options: DataOptions,
}

impl fmt::Debug for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataAccess")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl DataAccess {
    /// Data access over `store` with default options.
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self::with_options(store, DataOptions::default())
    }

    pub fn with_options(store: Arc<dyn DashboardStore>, options: DataOptions) -> Self {
        DataAccess { store, options }
    }

    /// Data access over the built-in sample dataset.
    pub fn fixture() -> Self {
        Self::new(Arc::new(FixtureStore::sample()))
    }

    /// Opens the store named by `config` and checks it can serve reads.
    pub async fn connect(config: &DashboardConfig) -> ConfigResult<Self> {
        config.validate()?;

        let store: Arc<dyn DashboardStore> = match config.store.backend {
            StoreBackend::Fixture => Arc::new(FixtureStore::sample()),
            StoreBackend::Sqlite => {
                let path = config.database_path().ok_or_else(|| {
                    ConfigError::Invalid("no database path for sqlite backend".into())
                })?;
                let db_config =
                    DbConfig::new(path).max_connections(config.store.max_connections);
                Arc::new(Database::new(db_config).await?)
            }
        };

        store.health_check().await?;

        let options = config.data_options();
        info!(
            backend = %config.store.backend,
            latency_ms = options.simulated_latency.as_millis() as u64,
            filter_invoices = options.filter_invoices,
            "Data access ready"
        );

        Ok(Self::with_options(store, options))
    }

    pub fn options(&self) -> &DataOptions {
        &self.options
    }

    // =========================================================================
    // Dashboard Overview
    // =========================================================================

    /// Monthly revenue, chronological.
    pub async fn fetch_revenue(&self) -> DataResult<Vec<Revenue>> {
        let revenue = self
            .guard(Operation::Revenue, self.store.revenue())
            .await?;

        debug!(months = revenue.len(), "Fetched revenue");
        Ok(revenue)
    }

    /// The three most recent invoices, amounts formatted.
    pub async fn fetch_latest_invoices(&self) -> DataResult<Vec<LatestInvoice>> {
        let rows = self
            .guard(
                Operation::LatestInvoices,
                self.store.latest_invoices(LATEST_INVOICES_LIMIT),
            )
            .await?;

        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// Invoice and customer counts plus paid/pending totals.
    ///
    /// The three store reads run concurrently; any failure fails the whole
    /// call.
    pub async fn fetch_card_data(&self) -> DataResult<CardData> {
        let store = &self.store;

        self.guard(Operation::CardData, async {
            let (invoices, customers, totals) = tokio::try_join!(
                store.invoice_count(),
                store.customer_count(),
                store.invoice_status_totals(),
            )?;

            Ok::<_, DbError>(CardData::new(invoices, customers, totals))
        })
        .await
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// One page (six rows) of the invoices table, in the order the invoices
    /// were stored.
    ///
    /// Pages start at 1; lower numbers are treated as 1. The query only
    /// narrows the listing when `filter_invoices` is on.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: i64,
    ) -> DataResult<Vec<InvoiceDisplay>> {
        let page = PageRequest::new(page);
        let filter = self.invoice_filter(query);

        let rows = self
            .guard(Operation::FilteredInvoices, self.store.invoices_page(filter, page))
            .await?;

        debug!(
            query = %query,
            page = page.page(),
            filtered = filter.is_some(),
            rows = rows.len(),
            "Fetched invoices page"
        );
        Ok(rows.into_iter().map(InvoiceDisplay::from).collect())
    }

    /// Number of pages the invoices table has for `query`.
    pub async fn fetch_invoices_pages(&self, query: &str) -> DataResult<i64> {
        let filter = self.invoice_filter(query);

        let total = self
            .guard(Operation::InvoicePages, self.store.matching_invoice_count(filter))
            .await?;
        let pages = page_count(total, self.options.page_rounding);

        debug!(query = %query, total, pages, "Counted invoice pages");
        Ok(pages)
    }

    /// Invoice for the edit form, amount in dollars.
    pub async fn fetch_invoice_by_id(&self, id: &str) -> DataResult<Option<InvoiceForm>> {
        let invoice = self
            .guard(Operation::InvoiceById, self.store.invoice_by_id(id))
            .await?;

        if invoice.is_none() {
            debug!(id, "Invoice not found");
        }
        Ok(invoice.map(InvoiceForm::from))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Every customer's id and name, by name.
    pub async fn fetch_customers(&self) -> DataResult<Vec<CustomerField>> {
        self.guard(Operation::Customers, self.store.customer_fields())
            .await
    }

    /// Customers whose name or email contains `query`, with invoice counts
    /// and formatted totals. Customers without invoices are included with
    /// zeros.
    ///
    /// Case is ignored for any script ("élodie" finds "Élodie"). `%` and `_`
    /// are matched literally, never as wildcards.
    pub async fn fetch_filtered_customers(&self, query: &str) -> DataResult<Vec<CustomerSummary>> {
        let rows = self
            .guard(Operation::FilteredCustomers, self.store.customer_summaries(query))
            .await?;

        debug!(query = %query, customers = rows.len(), "Fetched customer table");
        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// The user registered under exactly this email. Anything that is not a
    /// stored email, malformed or empty included, is `None`.
    pub async fn get_user(&self, email: &str) -> DataResult<Option<User>> {
        self.guard(Operation::User, self.store.user_by_email(email))
            .await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Runs one store read for `operation`.
    ///
    /// Waits out the simulated latency first. A failed read is logged with
    /// its cause and replaced by the operation's generic error.
    async fn guard<T, F>(&self, operation: Operation, read: F) -> DataResult<T>
    where
        F: Future<Output = DbResult<T>>,
    {
        let latency = self.options.simulated_latency;
        if !latency.is_zero() {
            debug!(%operation, latency_ms = latency.as_millis() as u64, "Simulating latency");
            tokio::time::sleep(latency).await;
        }

        read.await.map_err(|e| {
            error!(%operation, error = %e, "Store read failed");
            DataAccessError::new(operation)
        })
    }

    fn invoice_filter<'q>(&self, query: &'q str) -> Option<&'q str> {
        (self.options.filter_invoices && !query.is_empty()).then_some(query)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use acme_core::{Customer, Invoice, InvoiceStatus};
    use acme_db::fixture::{Dataset, SAMPLE_USER_EMAIL};
    use acme_db::seed::seed_dataset;
    use async_trait::async_trait;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
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

    fn over(dataset: Dataset) -> DataAccess {
        DataAccess::new(Arc::new(FixtureStore::new(dataset)))
    }

    /// The sample dataset plus a thirteenth invoice.
    fn thirteen_invoices() -> Dataset {
        let mut dataset = Dataset::sample();
        dataset
            .invoices
            .push(invoice("13", "1", 4200, InvoiceStatus::Pending));
        dataset
    }

    // -------------------------------------------------------------------------
    // Overview
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_revenue_is_six_months() {
        let revenue = DataAccess::fixture().fetch_revenue().await.unwrap();

        let months: Vec<_> = revenue.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(
            months,
            ["January", "February", "March", "April", "May", "June"]
        );
        let amounts: Vec<_> = revenue.iter().map(|r| r.revenue).collect();
        assert_eq!(amounts, [1000, 2000, 3000, 4000, 5000, 6000]);
    }

    #[tokio::test]
    async fn test_latest_invoices_are_formatted() {
        let latest = DataAccess::fixture().fetch_latest_invoices().await.unwrap();

        assert_eq!(latest.len(), 3);
        assert_eq!(latest[0].name, "Julia Roberts");
        assert_eq!(latest[0].amount, "$14.50");
        assert_eq!(latest[2].name, "Janice Joplin");
    }

    #[tokio::test]
    async fn test_card_data() {
        let cards = DataAccess::fixture().fetch_card_data().await.unwrap();

        assert_eq!(cards.number_of_invoices, 12);
        assert_eq!(cards.number_of_customers, 12);
        assert_eq!(cards.total_paid_invoices, "$89.00");
        assert_eq!(cards.total_pending_invoices, "$77.50");
    }

    // -------------------------------------------------------------------------
    // Invoices
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_pages_tile_without_gaps() {
        let dal = over(thirteen_invoices());
        let mut seen = Vec::new();

        for page in 1..=4 {
            let rows = dal.fetch_filtered_invoices("", page).await.unwrap();
            assert!(rows.len() <= 6);
            seen.extend(rows.into_iter().map(|r| r.id));
        }

        assert_eq!(seen.len(), 13);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 13);
    }

    #[tokio::test]
    async fn test_pages_follow_storage_order() {
        let dal = DataAccess::fixture();

        let first = dal.fetch_filtered_invoices("", 1).await.unwrap();
        let ids: Vec<_> = first.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(first[0].name, "John Doe");
        assert_eq!(first[5].name, "Julie Reeds");

        let second = dal.fetch_filtered_invoices("", 2).await.unwrap();
        let ids: Vec<_> = second.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["7", "8", "9", "10", "11", "12"]);
    }

    #[tokio::test]
    async fn test_page_below_one_is_first_page() {
        let dal = DataAccess::fixture();

        let first = dal.fetch_filtered_invoices("", 1).await.unwrap();
        assert_eq!(dal.fetch_filtered_invoices("", 0).await.unwrap(), first);
        assert_eq!(dal.fetch_filtered_invoices("", -7).await.unwrap(), first);
        assert!(dal.fetch_filtered_invoices("", 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invoice_query_ignored_by_default() {
        let dal = DataAccess::fixture();

        let rows = dal.fetch_filtered_invoices("johnny", 1).await.unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(dal.fetch_invoices_pages("johnny").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_invoice_query_applied_when_enabled() {
        let options = DataOptions::default().filter_invoices(true);
        let dal = DataAccess::with_options(Arc::new(FixtureStore::sample()), options);

        let rows = dal.fetch_filtered_invoices("JOHNNY", 1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Johnny Cash");
        assert_eq!(rows[0].amount, "$22.00");

        // One match is less than a page.
        assert_eq!(dal.fetch_invoices_pages("johnny").await.unwrap(), 0);
        assert_eq!(dal.fetch_invoices_pages("").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_page_count_rounding() {
        let floor = over(thirteen_invoices());
        assert_eq!(floor.fetch_invoices_pages("").await.unwrap(), 2);

        let ceil = DataAccess::with_options(
            Arc::new(FixtureStore::new(thirteen_invoices())),
            DataOptions::default().page_rounding(PageRounding::Ceil),
        );
        assert_eq!(ceil.fetch_invoices_pages("").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_invoice_by_id_in_dollars() {
        let dal = over(Dataset {
            customers: vec![customer("c1", "Amy Burns")],
            invoices: vec![invoice("inv-1", "c1", 150000, InvoiceStatus::Paid)],
            ..Dataset::default()
        });

        let form = dal.fetch_invoice_by_id("inv-1").await.unwrap().unwrap();
        assert_eq!(form.amount, 1500.0);
        assert_eq!(form.customer_id, "c1");
        assert_eq!(form.status, InvoiceStatus::Paid);

        assert_eq!(dal.fetch_invoice_by_id("inv-404").await.unwrap(), None);
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_customers_by_name() {
        let customers = DataAccess::fixture().fetch_customers().await.unwrap();

        assert_eq!(customers.len(), 12);
        assert_eq!(customers[0].name, "Jack Ripper");
        assert_eq!(customers[11].name, "Julie Reeds");
    }

    #[tokio::test]
    async fn test_customer_table_aggregates() {
        let dal = over(Dataset {
            customers: vec![
                customer("c2", "Zed Lee"),
                customer("c1", "Amy Burns"),
                customer("c3", "New Person"),
            ],
            invoices: vec![
                invoice("i1", "c1", 1000, InvoiceStatus::Paid),
                invoice("i2", "c1", 2500, InvoiceStatus::Pending),
                invoice("i3", "c2", 700, InvoiceStatus::Paid),
            ],
            ..Dataset::default()
        });

        let all = dal.fetch_filtered_customers("").await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Amy Burns", "New Person", "Zed Lee"]);

        let amy = &all[0];
        assert_eq!(amy.total_invoices, 2);
        assert_eq!(amy.total_paid, "$10.00");
        assert_eq!(amy.total_pending, "$25.00");

        let newcomer = &all[1];
        assert_eq!(newcomer.total_invoices, 0);
        assert_eq!(newcomer.total_paid, "$0.00");
        assert_eq!(newcomer.total_pending, "$0.00");

        let matched = dal.fetch_filtered_customers("AMY.B").await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "c1");
    }

    #[tokio::test]
    async fn test_customer_search_ignores_case_beyond_ascii() {
        let dataset = Dataset {
            customers: vec![customer("c1", "Élodie Ünal"), customer("c2", "Amy Burns")],
            invoices: vec![invoice("i1", "c1", 1250, InvoiceStatus::Pending)],
            ..Dataset::default()
        };
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_dataset(&db, &dataset).await.unwrap();

        let stores = [DataAccess::new(Arc::new(db)), over(dataset)];
        for dal in &stores {
            for query in ["élodie", "ünal", "ÉLODIE", "Ünal"] {
                let rows = dal.fetch_filtered_customers(query).await.unwrap();
                assert_eq!(rows.len(), 1, "query {query:?}");
                assert_eq!(rows[0].name, "Élodie Ünal");
                assert_eq!(rows[0].total_pending, "$12.50");
            }
        }
    }

    #[tokio::test]
    async fn test_wildcards_match_literally() {
        let dal = DataAccess::fixture();

        assert!(dal.fetch_filtered_customers("%").await.unwrap().is_empty());
        assert!(dal.fetch_filtered_customers("j_hn").await.unwrap().is_empty());
        assert_eq!(dal.fetch_filtered_customers("john").await.unwrap().len(), 2);
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_get_user() {
        let dal = DataAccess::fixture();

        let user = dal.get_user(SAMPLE_USER_EMAIL).await.unwrap().unwrap();
        assert_eq!(user.name, "User");

        assert_eq!(dal.get_user("nonexistent@x.com").await.unwrap(), None);
    }

    // -------------------------------------------------------------------------
    // Failures
    // -------------------------------------------------------------------------

    /// A store whose every read fails.
    struct FailingStore;

    fn down<T>() -> DbResult<T> {
        Err(DbError::ConnectionFailed("connection refused".into()))
    }

    #[async_trait]
    impl DashboardStore for FailingStore {
        async fn revenue(&self) -> DbResult<Vec<Revenue>> {
            down()
        }
        async fn latest_invoices(&self, _: u32) -> DbResult<Vec<acme_core::LatestInvoiceRow>> {
            down()
        }
        async fn invoice_count(&self) -> DbResult<i64> {
            down()
        }
        async fn customer_count(&self) -> DbResult<i64> {
            Ok(12)
        }
        async fn invoice_status_totals(&self) -> DbResult<acme_core::InvoiceStatusTotals> {
            Ok(Default::default())
        }
        async fn invoices_page(
            &self,
            _: Option<&str>,
            _: PageRequest,
        ) -> DbResult<Vec<acme_core::InvoiceRow>> {
            down()
        }
        async fn matching_invoice_count(&self, _: Option<&str>) -> DbResult<i64> {
            down()
        }
        async fn invoice_by_id(&self, _: &str) -> DbResult<Option<Invoice>> {
            down()
        }
        async fn customer_fields(&self) -> DbResult<Vec<CustomerField>> {
            down()
        }
        async fn customer_summaries(
            &self,
            _: &str,
        ) -> DbResult<Vec<acme_core::CustomerSummaryRow>> {
            down()
        }
        async fn user_by_email(&self, _: &str) -> DbResult<Option<User>> {
            down()
        }
        async fn health_check(&self) -> DbResult<()> {
            down()
        }
    }

    fn message<T: fmt::Debug>(result: DataResult<T>) -> String {
        result.unwrap_err().to_string()
    }

    #[tokio::test]
    async fn test_every_operation_has_its_own_message() {
        let dal = DataAccess::new(Arc::new(FailingStore));

        assert_eq!(message(dal.fetch_revenue().await), "Failed to fetch revenue data.");
        assert_eq!(
            message(dal.fetch_latest_invoices().await),
            "Failed to fetch the latest invoices."
        );
        assert_eq!(message(dal.fetch_card_data().await), "Failed to fetch card data.");
        assert_eq!(
            message(dal.fetch_filtered_invoices("", 1).await),
            "Failed to fetch invoices."
        );
        assert_eq!(
            message(dal.fetch_invoices_pages("").await),
            "Failed to fetch total number of invoices."
        );
        assert_eq!(
            message(dal.fetch_invoice_by_id("1").await),
            "Failed to fetch invoice."
        );
        assert_eq!(
            message(dal.fetch_customers().await),
            "Failed to fetch all customers."
        );
        assert_eq!(
            message(dal.fetch_filtered_customers("").await),
            "Failed to fetch customer table."
        );
        assert_eq!(
            message(dal.get_user("user@nextmail.com").await),
            "Failed to fetch user."
        );
    }

    #[tokio::test]
    async fn test_closed_pool_gives_generic_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;
        let dal = DataAccess::new(Arc::new(db));

        let err = dal.fetch_card_data().await.unwrap_err();
        assert_eq!(err.operation, Operation::CardData);
        assert_eq!(err.message, "Failed to fetch card data.");
    }

    #[tokio::test]
    async fn test_unmatched_input_is_empty_not_an_error() {
        let dal = DataAccess::fixture();

        assert_eq!(dal.get_user("nobody").await.unwrap(), None);
        assert_eq!(dal.get_user("").await.unwrap(), None);
        assert_eq!(dal.fetch_invoice_by_id("").await.unwrap(), None);
        assert_eq!(dal.fetch_invoice_by_id("   ").await.unwrap(), None);

        let long = dal
            .fetch_filtered_customers(&"x".repeat(101))
            .await
            .unwrap();
        assert!(long.is_empty());
    }

    #[tokio::test]
    async fn test_queries_are_not_trimmed() {
        let dal = over(Dataset {
            customers: vec![customer("c1", "Amy Burns")],
            ..Dataset::default()
        });

        assert_eq!(dal.fetch_filtered_customers("amy").await.unwrap().len(), 1);
        assert!(dal.fetch_filtered_customers(" amy").await.unwrap().is_empty());
        assert_eq!(dal.fetch_filtered_customers(" burns").await.unwrap().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Latency & Concurrency
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let options = DataOptions::default().simulated_latency(Duration::from_secs(3));
        let dal = DataAccess::with_options(Arc::new(FixtureStore::sample()), options);

        let start = tokio::time::Instant::now();
        dal.fetch_revenue().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));

        let start = tokio::time::Instant::now();
        DataAccess::fixture().fetch_revenue().await.unwrap();
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_clones_serve_concurrent_calls() {
        let dal = DataAccess::fixture();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dal = dal.clone();
                tokio::spawn(async move { dal.fetch_card_data().await })
            })
            .collect();

        for handle in handles {
            let cards = handle.await.unwrap().unwrap();
            assert_eq!(cards.number_of_invoices, 12);
        }
    }

    // -------------------------------------------------------------------------
    // Store Agreement
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_sqlite_and_fixture_agree() {
        let dataset = thirteen_invoices();
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_dataset(&db, &dataset).await.unwrap();

        let options = DataOptions::default().filter_invoices(true);
        let sqlite = DataAccess::with_options(Arc::new(db), options);
        let fixture = DataAccess::with_options(Arc::new(FixtureStore::new(dataset)), options);

        assert_eq!(
            sqlite.fetch_revenue().await.unwrap(),
            fixture.fetch_revenue().await.unwrap()
        );
        assert_eq!(
            sqlite.fetch_latest_invoices().await.unwrap(),
            fixture.fetch_latest_invoices().await.unwrap()
        );
        assert_eq!(
            sqlite.fetch_card_data().await.unwrap(),
            fixture.fetch_card_data().await.unwrap()
        );
        assert_eq!(
            sqlite.fetch_customers().await.unwrap(),
            fixture.fetch_customers().await.unwrap()
        );

        for query in ["", "jo", "PENDING", "2023-0", "%", "1450"] {
            for page in 1..=3 {
                assert_eq!(
                    sqlite.fetch_filtered_invoices(query, page).await.unwrap(),
                    fixture.fetch_filtered_invoices(query, page).await.unwrap(),
                    "query {query:?} page {page}"
                );
            }
            assert_eq!(
                sqlite.fetch_invoices_pages(query).await.unwrap(),
                fixture.fetch_invoices_pages(query).await.unwrap()
            );
            assert_eq!(
                sqlite.fetch_filtered_customers(query).await.unwrap(),
                fixture.fetch_filtered_customers(query).await.unwrap()
            );
        }

        assert_eq!(
            sqlite.fetch_invoice_by_id("13").await.unwrap(),
            fixture.fetch_invoice_by_id("13").await.unwrap()
        );
        assert_eq!(
            sqlite.get_user(SAMPLE_USER_EMAIL).await.unwrap(),
            fixture.get_user(SAMPLE_USER_EMAIL).await.unwrap()
        );
    }

    // -------------------------------------------------------------------------
    // Connect
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_connect_fixture() {
        let dal = DataAccess::connect(&DashboardConfig::default()).await.unwrap();
        assert_eq!(dal.fetch_customers().await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_connect_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DashboardConfig::default();
        config.store.backend = StoreBackend::Sqlite;
        config.store.database_path = Some(dir.path().join("dashboard.db"));
        config.data.round_up_invoice_pages = true;

        let dal = DataAccess::connect(&config).await.unwrap();
        assert_eq!(dal.options().page_rounding, PageRounding::Ceil);

        // Freshly migrated, nothing seeded.
        assert!(dal.fetch_revenue().await.unwrap().is_empty());
        assert_eq!(dal.fetch_invoices_pages("").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let mut config = DashboardConfig::default();
        config.data.simulated_latency_ms = u64::MAX;

        assert!(matches!(
            DataAccess::connect(&config).await,
            Err(ConfigError::Invalid(_))
        ));
    }
}
