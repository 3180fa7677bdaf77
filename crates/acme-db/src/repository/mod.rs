//! # Repository Module
//!
//! SQLite repositories for the dashboard tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  DashboardStore for Database (store.rs)                                │
//! │       │                                                                 │
//! │       │  db.invoices().page(filter, page)                              │
//! │       ▼                                                                 │
//! │  InvoiceRepository                                                     │
//! │  ├── latest(limit)                                                     │
//! │  ├── page(filter, page) / matching_count(filter)                       │
//! │  ├── find_by_id(id)                                                    │
//! │  └── insert(invoice)                                                   │
//! │       │                                                                 │
//! │       │  SQL Query (bound ?N parameters)                               │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`InvoiceRepository`](invoice::InvoiceRepository) - listings, counts, totals
//! - [`CustomerRepository`](customer::CustomerRepository) - select list and customers table
//! - [`RevenueRepository`](revenue::RevenueRepository) - monthly revenue
//! - [`UserRepository`](user::UserRepository) - lookup by email

pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;

/// Case folding used for every text search, in SQLite and in the fixture
/// store alike.
///
/// Full Unicode lowercasing: SQLite's own `LIKE` and `lower()` only fold
/// ASCII, so folded copies of searchable columns are written from here.
///
/// ```rust
/// use acme_db::repository::fold_case;
///
/// assert_eq!(fold_case("Élodie ÜNAL"), "élodie ünal");
/// ```
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// `LIKE` pattern for a user's search query: folded with [`fold_case`] and
/// matched as a literal substring (see [`like_pattern`]).
pub fn search_pattern(query: &str) -> String {
    like_pattern(&fold_case(query))
}

/// Builds a `LIKE` pattern that matches `query` as a literal substring.
///
/// `%`, `_` and `\` in the query are escaped, so `"%"` finds only values
/// containing a percent sign rather than everything. Queries using it must
/// say `ESCAPE '\'`.
///
/// ```rust
/// use acme_db::repository::like_pattern;
///
/// assert_eq!(like_pattern("Lee"), "%Lee%");
/// assert_eq!(like_pattern("50%"), "%50\\%%");
/// ```
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
