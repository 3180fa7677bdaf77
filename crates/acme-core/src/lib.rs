//! # acme-core: Pure Types for the Acme Dashboard
//!
//! Records, money formatting, pagination math and record validation shared by
//! the store client and the data access layer. Nothing in here does I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Acme Dashboard Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard pages / UI                         │   │
//! │  │    Overview cards ──► Revenue chart ──► Invoices ──► Customers  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 acme-data (data access layer)                   │   │
//! │  │    fetch_revenue, fetch_card_data, fetch_filtered_invoices ...  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ pagination │  │ validation│  │   │
//! │  │   │  Invoice  │  │   Money   │  │ PageRequest│  │  dates    │  │   │
//! │  │   │  Customer │  │  format_  │  │ page_count │  │   email   │  │   │
//! │  │   │  CardData │  │  currency │  │            │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 acme-db (store client)                          │   │
//! │  │        DashboardStore trait, SQLite + in-memory fixtures        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Dashboard records (Invoice, Customer, Revenue, User, CardData)
//! - [`money`] - Integer cents and the `$1,234.56` formatter
//! - [`pagination`] - Page offsets and page counts
//! - [`error`] - Domain error types
//! - [`validation`] - Record checks used when seeding
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::money::format_currency;
//! use acme_core::pagination::PageRequest;
//!
//! assert_eq!(format_currency(131500), "$1,315.00");
//! assert_eq!(PageRequest::new(2).offset(), 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_currency, Money};
pub use pagination::{page_count, PageRequest, PageRounding};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows shown per page of the invoices table.
pub const ITEMS_PER_PAGE: u32 = 6;

/// Entries on the latest-invoices card.
pub const LATEST_INVOICES_LIMIT: u32 = 3;

/// Highest page number a request is clamped to.
///
/// Keeps `(page - 1) * ITEMS_PER_PAGE` far away from overflow no matter what
/// the URL says.
pub const MAX_PAGE: u32 = 1_000_000;
