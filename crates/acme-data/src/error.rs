//! # Data Access Errors
//!
//! What callers of the data access layer see when something goes wrong.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  fetch_card_data()                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  DataAccess::guard(Operation::CardData, ...)                     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  DbError::ConnectionFailed("Pool is closed")                     │  │
//! │  │         │                                                        │  │
//! │  │         ├──► tracing::error!(operation, error)   full detail     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  DataAccessError { operation: CardData,                          │  │
//! │  │                    message: "Failed to fetch card data." }       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The UI only ever shows the message; the cause stays in the logs.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use acme_db::DbError;

// =============================================================================
// Operation
// =============================================================================

/// The data access operations, one per dashboard read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicePages,
    InvoiceById,
    Customers,
    FilteredCustomers,
    User,
}

impl Operation {
    /// Every operation, in dashboard order.
    pub const ALL: [Operation; 9] = [
        Operation::Revenue,
        Operation::LatestInvoices,
        Operation::CardData,
        Operation::FilteredInvoices,
        Operation::InvoicePages,
        Operation::InvoiceById,
        Operation::Customers,
        Operation::FilteredCustomers,
        Operation::User,
    ];

    /// The user-facing failure message.
    pub const fn message(&self) -> &'static str {
        match self {
            Operation::Revenue => "Failed to fetch revenue data.",
            Operation::LatestInvoices => "Failed to fetch the latest invoices.",
            Operation::CardData => "Failed to fetch card data.",
            Operation::FilteredInvoices => "Failed to fetch invoices.",
            Operation::InvoicePages => "Failed to fetch total number of invoices.",
            Operation::InvoiceById => "Failed to fetch invoice.",
            Operation::Customers => "Failed to fetch all customers.",
            Operation::FilteredCustomers => "Failed to fetch customer table.",
            Operation::User => "Failed to fetch user.",
        }
    }

    /// Name of the `DataAccess` method, used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Revenue => "fetch_revenue",
            Operation::LatestInvoices => "fetch_latest_invoices",
            Operation::CardData => "fetch_card_data",
            Operation::FilteredInvoices => "fetch_filtered_invoices",
            Operation::InvoicePages => "fetch_invoices_pages",
            Operation::InvoiceById => "fetch_invoice_by_id",
            Operation::Customers => "fetch_customers",
            Operation::FilteredCustomers => "fetch_filtered_customers",
            Operation::User => "get_user",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Data Access Error
// =============================================================================

/// A failed dashboard read.
///
/// Carries only the operation and its generic message. The underlying cause
/// has already been logged by the time this is returned.
///
/// ## Serialization
/// ```json
/// {
///   "operation": "cardData",
///   "message": "Failed to fetch card data."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct DataAccessError {
    pub operation: Operation,
    pub message: String,
}

impl DataAccessError {
    /// The error for a failed `operation`.
    pub fn new(operation: Operation) -> Self {
        DataAccessError {
            operation,
            message: operation.message().to_string(),
        }
    }
}

impl From<Operation> for DataAccessError {
    fn from(operation: Operation) -> Self {
        DataAccessError::new(operation)
    }
}

/// Result type for data access operations.
pub type DataResult<T> = Result<T, DataAccessError>;

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors while loading configuration or opening the configured store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// Config values are inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The configured store could not be opened.
    #[error("Failed to open store: {0}")]
    Store(#[from] DbError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

/// Result type for configuration and setup.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
