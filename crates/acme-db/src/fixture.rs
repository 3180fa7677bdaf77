//! # Fixture Store
//!
//! An in-memory [`DashboardStore`] over an immutable [`Dataset`].
//!
//! Used for local development without a database file and as the reference
//! the SQLite queries are tested against. Every ordering and matching rule
//! here mirrors the SQL in `repository/`.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;

use crate::error::DbResult;
use crate::repository::fold_case;
use crate::store::DashboardStore;
use acme_core::validation::{
    validate_amount_cents, validate_email, validate_invoice_id, validate_iso_date,
};
use acme_core::{
    CoreError, CoreResult, Customer, CustomerField, CustomerSummaryRow, Invoice, InvoiceRow,
    InvoiceStatus, InvoiceStatusTotals, LatestInvoiceRow, Money, PageRequest, Revenue, User,
};

// =============================================================================
// Dataset
// =============================================================================

/// Every table the dashboard reads, as plain vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    /// Chronological.
    pub revenue: Vec<Revenue>,
    pub users: Vec<User>,
}

/// `(name, email, image)` for the twelve sample customers. Invoice `n`
/// belongs to customer `n`.
const SAMPLE_CUSTOMERS: [(&str, &str, &str); 12] = [
    ("John Doe", "john.doe@example.com", "amy-burns"),
    ("Jane Doe", "jane.doe@example.com", "balazs-orban"),
    ("Jim Beam", "jim.beam@example.com", "delba-de-oliveira"),
    ("Jenny Smith", "jenny.smith@example.com", "amy-burns"),
    ("Jack Ripper", "jack.ripper@example.com", "balazs-orban"),
    ("Julie Reeds", "julie.reeds@example.com", "delba-de-oliveira"),
    ("Joe Walsh", "joe.walsh@example.com", "amy-burns"),
    ("Jessica Rabbit", "jessica.rabbit@example.com", "balazs-orban"),
    ("James Bond", "james.bond@example.com", "delba-de-oliveira"),
    ("Janice Joplin", "janice.joplin@example.com", "amy-burns"),
    ("Johnny Cash", "johnny.cash@example.com", "balazs-orban"),
    ("Julia Roberts", "julia.roberts@example.com", "delba-de-oliveira"),
];

/// `(amount in cents, date, status)` for the twelve sample invoices.
const SAMPLE_INVOICES: [(i64, &str, InvoiceStatus); 12] = [
    (1000, "2021-08-01", InvoiceStatus::Paid),
    (2500, "2022-01-15", InvoiceStatus::Pending),
    (1300, "2022-05-20", InvoiceStatus::Paid),
    (500, "2022-08-09", InvoiceStatus::Pending),
    (800, "2023-02-11", InvoiceStatus::Paid),
    (1600, "2023-03-18", InvoiceStatus::Pending),
    (2400, "2023-04-25", InvoiceStatus::Paid),
    (950, "2023-05-30", InvoiceStatus::Pending),
    (1200, "2023-07-22", InvoiceStatus::Paid),
    (750, "2023-09-15", InvoiceStatus::Pending),
    (2200, "2023-11-05", InvoiceStatus::Paid),
    (1450, "2024-01-10", InvoiceStatus::Pending),
];

const SAMPLE_MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// Email of the sample dashboard user.
pub const SAMPLE_USER_EMAIL: &str = "user@nextmail.com";

/// Plain-text password the `seed` binary hashes for the sample user.
pub const SAMPLE_USER_PASSWORD: &str = "123456";

impl Dataset {
    /// The built-in sample data: twelve customers with one invoice each, six
    /// months of revenue and one user.
    ///
    /// The sample user carries no password hash; the `seed` binary hashes
    /// [`SAMPLE_USER_PASSWORD`] before writing it to SQLite.
    pub fn sample() -> Self {
        let customers = SAMPLE_CUSTOMERS
            .iter()
            .enumerate()
            .map(|(i, (name, email, image))| Customer {
                id: (i + 1).to_string(),
                name: name.to_string(),
                email: email.to_string(),
                image_url: format!("/customers/{image}.png"),
            })
            .collect();

        let invoices = SAMPLE_INVOICES
            .iter()
            .enumerate()
            .map(|(i, (amount, date, status))| Invoice {
                id: (i + 1).to_string(),
                customer_id: (i + 1).to_string(),
                amount: *amount,
                date: date.to_string(),
                status: *status,
            })
            .collect();

        let revenue = SAMPLE_MONTHS
            .iter()
            .zip(1..)
            .map(|(month, n)| Revenue {
                month: month.to_string(),
                revenue: n * 1000,
            })
            .collect();

        let users = vec![User {
            id: "410544b2-4001-4271-9855-fec4b6a6442a".to_string(),
            name: "User".to_string(),
            email: SAMPLE_USER_EMAIL.to_string(),
            password: String::new(),
        }];

        Dataset {
            customers,
            invoices,
            revenue,
            users,
        }
    }

    /// Checks every record before it is written to a store.
    ///
    /// Invoices need a known customer, a usable id, an ISO date and a
    /// non-negative amount; users need a well-formed email.
    pub fn validate(&self) -> CoreResult<()> {
        for invoice in &self.invoices {
            let invalid =
                |reason: String| CoreError::invalid_record("invoice", &invoice.id, reason);

            validate_invoice_id(&invoice.id).map_err(|e| invalid(e.to_string()))?;
            validate_iso_date(&invoice.date).map_err(|e| invalid(e.to_string()))?;
            validate_amount_cents(invoice.amount).map_err(|e| invalid(e.to_string()))?;

            if self.customer(&invoice.customer_id).is_none() {
                return Err(invalid(format!("unknown customer '{}'", invoice.customer_id)));
            }
        }

        for user in &self.users {
            validate_email(&user.email)?;
        }

        Ok(())
    }

    fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Invoices joined with their customer, in the order they were added.
    /// Invoices whose customer is missing are dropped, like an inner join.
    fn joined_invoices(&self) -> Vec<(&Invoice, &Customer)> {
        self.invoices
            .iter()
            .filter_map(|inv| self.customer(&inv.customer_id).map(|c| (inv, c)))
            .collect()
    }

    fn matching_invoices(&self, filter: Option<&str>) -> Vec<(&Invoice, &Customer)> {
        let joined = self.joined_invoices();
        match filter {
            None => joined,
            Some(query) => {
                let needle = fold_case(query);
                joined
                    .into_iter()
                    .filter(|(inv, c)| {
                        contains(&c.name, &needle)
                            || contains(&c.email, &needle)
                            || contains(&inv.date, &needle)
                            || contains(inv.status.as_str(), &needle)
                            || contains(&inv.amount.to_string(), &needle)
                    })
                    .collect()
            }
        }
    }
}

/// Literal substring match ignoring case; `needle` is already folded.
fn contains(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Sum of `status` invoice amounts, in cents.
fn status_total<'a>(invoices: impl Iterator<Item = &'a Invoice>, status: InvoiceStatus) -> i64 {
    invoices
        .filter(|inv| inv.status == status)
        .map(Invoice::amount)
        .sum::<Money>()
        .cents()
}

fn invoice_row(invoice: &Invoice, customer: &Customer) -> InvoiceRow {
    InvoiceRow {
        id: invoice.id.clone(),
        customer_id: invoice.customer_id.clone(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        image_url: customer.image_url.clone(),
        date: invoice.date.clone(),
        amount: invoice.amount,
        status: invoice.status,
    }
}

fn to_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

// =============================================================================
// Fixture Store
// =============================================================================

/// Read-only store over a shared [`Dataset`].
///
/// ## Usage
/// ```rust
/// use acme_db::fixture::FixtureStore;
///
/// let store = FixtureStore::sample();
/// assert_eq!(store.dataset().invoices.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct FixtureStore {
    data: Arc<Dataset>,
}

impl FixtureStore {
    /// Serves `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        FixtureStore {
            data: Arc::new(dataset),
        }
    }

    /// Serves [`Dataset::sample`].
    pub fn sample() -> Self {
        FixtureStore::new(Dataset::sample())
    }

    /// The data being served.
    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

#[async_trait]
impl DashboardStore for FixtureStore {
    async fn revenue(&self) -> DbResult<Vec<Revenue>> {
        Ok(self.data.revenue.clone())
    }

    async fn latest_invoices(&self, limit: u32) -> DbResult<Vec<LatestInvoiceRow>> {
        let mut newest = self.data.joined_invoices();
        newest.sort_by(|(a, _), (b, _)| {
            (Reverse(&a.date), &a.id).cmp(&(Reverse(&b.date), &b.id))
        });

        Ok(newest
            .into_iter()
            .take(limit as usize)
            .map(|(inv, c)| LatestInvoiceRow {
                id: inv.id.clone(),
                name: c.name.clone(),
                email: c.email.clone(),
                image_url: c.image_url.clone(),
                amount: inv.amount,
            })
            .collect())
    }

    async fn invoice_count(&self) -> DbResult<i64> {
        Ok(to_count(self.data.invoices.len()))
    }

    async fn customer_count(&self) -> DbResult<i64> {
        Ok(to_count(self.data.customers.len()))
    }

    async fn invoice_status_totals(&self) -> DbResult<InvoiceStatusTotals> {
        let invoices = &self.data.invoices;

        Ok(InvoiceStatusTotals {
            paid: status_total(invoices.iter(), InvoiceStatus::Paid),
            pending: status_total(invoices.iter(), InvoiceStatus::Pending),
        })
    }

    async fn invoices_page(
        &self,
        filter: Option<&str>,
        page: PageRequest,
    ) -> DbResult<Vec<InvoiceRow>> {
        let matching = self.data.matching_invoices(filter);
        let bounds = page.slice_bounds(matching.len());

        Ok(matching[bounds]
            .iter()
            .map(|(inv, c)| invoice_row(inv, c))
            .collect())
    }

    async fn matching_invoice_count(&self, filter: Option<&str>) -> DbResult<i64> {
        Ok(to_count(self.data.matching_invoices(filter).len()))
    }

    async fn invoice_by_id(&self, id: &str) -> DbResult<Option<Invoice>> {
        Ok(self.data.invoices.iter().find(|inv| inv.id == id).cloned())
    }

    async fn customer_fields(&self) -> DbResult<Vec<CustomerField>> {
        let mut fields: Vec<_> = self.data.customers.iter().map(CustomerField::from).collect();
        fields.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        Ok(fields)
    }

    async fn customer_summaries(&self, query: &str) -> DbResult<Vec<CustomerSummaryRow>> {
        let needle = fold_case(query);

        let mut rows: Vec<_> = self
            .data
            .customers
            .iter()
            .filter(|c| contains(&c.name, &needle) || contains(&c.email, &needle))
            .map(|c| {
                let own = || self.data.invoices.iter().filter(|inv| inv.customer_id == c.id);

                CustomerSummaryRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    email: c.email.clone(),
                    image_url: c.image_url.clone(),
                    total_invoices: to_count(own().count()),
                    total_pending: status_total(own(), InvoiceStatus::Pending),
                    total_paid: status_total(own(), InvoiceStatus::Paid),
                }
            })
            .collect();

        rows.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        Ok(rows)
    }

    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        Ok(self.data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn health_check(&self) -> DbResult<()> {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
