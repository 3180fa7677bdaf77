//! # Domain Types
//!
//! Records read by the dashboard, in two flavours:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                    │
//! │                                                                         │
//! │  STORED (rows, amounts in cents)      DISPLAY (what the UI renders)     │
//! │  ─────────────────────────────        ───────────────────────────────   │
//! │  Invoice                  ──────────► InvoiceForm      (dollars, f64)   │
//! │  InvoiceRow (joined)      ──────────► InvoiceDisplay   ("$1,000.00")    │
//! │  LatestInvoiceRow         ──────────► LatestInvoice    ("$10.00")       │
//! │  CustomerSummaryRow       ──────────► CustomerSummary  ("$25.00")       │
//! │  InvoiceStatusTotals + counts ──────► CardData                          │
//! │                                                                         │
//! │  Customer, CustomerField, Revenue, User are returned as stored          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Row types derive `sqlx::FromRow` when the `sqlx` feature is on, so the
//! database layer can decode straight into them.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{format_currency, Money};

// =============================================================================
// Invoice Status
// =============================================================================

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, not yet paid.
    Pending,
    /// Settled.
    Paid,
}

impl InvoiceStatus {
    /// The lowercase name used in storage and in the UI.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    /// Amount in cents.
    pub amount: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub status: InvoiceStatus,
}

impl Invoice {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount)
    }
}

/// Invoice shaped for the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    /// Amount in dollars (cents / 100).
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl From<Invoice> for InvoiceForm {
    fn from(invoice: Invoice) -> Self {
        InvoiceForm {
            amount: invoice.amount().as_dollars(),
            id: invoice.id,
            customer_id: invoice.customer_id,
            status: invoice.status,
        }
    }
}

/// Invoice joined with its customer, as listed in the invoices table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InvoiceRow {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: String,
    /// Amount in cents.
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// A row of the invoices table with its amount formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceDisplay {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: String,
    pub amount: String,
    pub status: InvoiceStatus,
}

impl From<InvoiceRow> for InvoiceDisplay {
    fn from(row: InvoiceRow) -> Self {
        InvoiceDisplay {
            amount: format_currency(row.amount),
            id: row.id,
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            date: row.date,
            status: row.status,
        }
    }
}

/// Most recent invoices, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct LatestInvoiceRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Amount in cents.
    pub amount: i64,
}

/// A latest-invoices card entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        LatestInvoice {
            amount: format_currency(row.amount),
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
        }
    }
}

// =============================================================================
// Customers
// =============================================================================

/// A customer as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Id and name only, for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

impl From<&Customer> for CustomerField {
    fn from(customer: &Customer) -> Self {
        CustomerField {
            id: customer.id.clone(),
            name: customer.name.clone(),
        }
    }
}

/// Customer with invoice aggregates, in cents.
///
/// Customers without invoices carry zero counts and zero totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CustomerSummaryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// A row of the customers table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CustomerSummaryRow> for CustomerSummary {
    fn from(row: CustomerSummaryRow) -> Self {
        CustomerSummary {
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
        }
    }
}

// =============================================================================
// Revenue
// =============================================================================

/// Revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Revenue {
    /// Month label, e.g. "January".
    pub month: String,
    pub revenue: i64,
}

// =============================================================================
// Users
// =============================================================================

/// A dashboard user.
///
/// `password` holds the stored credential hash. It is skipped when
/// serializing so a `User` can be handed to the UI safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Cards
// =============================================================================

/// Sums of invoice amounts by status, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InvoiceStatusTotals {
    pub paid: i64,
    pub pending: i64,
}

/// Summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardData {
    /// Assembles the cards from raw counts and totals.
    pub fn new(invoices: i64, customers: i64, totals: InvoiceStatusTotals) -> Self {
        CardData {
            number_of_invoices: invoices,
            number_of_customers: customers,
            total_paid_invoices: format_currency(totals.paid),
            total_pending_invoices: format_currency(totals.pending),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
