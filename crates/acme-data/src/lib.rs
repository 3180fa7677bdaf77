//! # acme-data: Dashboard Data Access Layer
//!
//! The functions the dashboard pages call. Each one reads from a
//! [`DashboardStore`](acme_db::DashboardStore), shapes the rows for display
//! and, on failure, logs the cause and returns a generic per-operation error.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Dashboard Data Flow                         │
//! │                                                                         │
//! │  Dashboard pages (overview, invoices, customers, login)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    acme-data (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   DashboardConfig ──► DataAccess::connect                      │   │
//! │  │   (config.rs)          (dal.rs)                                 │   │
//! │  │                          │                                      │   │
//! │  │                          ├─ fetch_revenue / latest / cards      │   │
//! │  │                          ├─ invoices page / page count / by id  │   │
//! │  │                          ├─ customers / customer table          │   │
//! │  │                          └─ get_user                            │   │
//! │  │                                                                 │   │
//! │  │   DataAccessError (error.rs): operation + user-safe message     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acme-db: Database (SQLite) or FixtureStore (sample data)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use acme_data::{DashboardConfig, DataAccess};
//!
//! let config = DashboardConfig::load(None)?;
//! let dal = DataAccess::connect(&config).await?;
//!
//! let cards = dal.fetch_card_data().await?;
//! println!("{} invoices, {} paid", cards.number_of_invoices, cards.total_paid_invoices);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod dal;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{DashboardConfig, DataSettings, StoreBackend, StoreSettings};
pub use dal::{DataAccess, DataOptions};
pub use error::{ConfigError, ConfigResult, DataAccessError, DataResult, Operation};
