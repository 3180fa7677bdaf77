//! # acme-db: Store Client for the Acme Dashboard
//!
//! Everything that knows where dashboard rows live. The data access layer
//! only sees the [`DashboardStore`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Dashboard Data Flow                         │
//! │                                                                         │
//! │  DataAccess::fetch_filtered_invoices                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     acme-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │              DashboardStore (store.rs)                          │   │
//! │  │                 │                    │                          │   │
//! │  │   ┌─────────────▼─────┐    ┌─────────▼──────┐   ┌────────────┐  │   │
//! │  │   │   Database        │    │  FixtureStore  │   │ Migrations │  │   │
//! │  │   │   (pool.rs)       │    │  (fixture.rs)  │   │ (embedded) │  │   │
//! │  │   │ SqlitePool        │    │  Arc<Dataset>  │   │ 001_init   │  │   │
//! │  │   │ + repositories    │    │                │   │            │  │   │
//! │  │   └───────────────────┘    └────────────────┘   └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `DashboardStore` trait and its SQLite implementation
//! - [`fixture`] - In-memory store and the sample dataset
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Per-table SQL
//! - [`seed`] - Loading a dataset into SQLite
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use acme_db::{Database, DbConfig, DashboardStore};
//!
//! let db = Database::new(DbConfig::new("path/to/dashboard.db")).await?;
//! let latest = db.latest_invoices(3).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixture;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use fixture::{Dataset, FixtureStore};
pub use pool::{Database, DbConfig};
pub use store::DashboardStore;

pub use repository::customer::CustomerRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::revenue::RevenueRepository;
pub use repository::user::UserRepository;
