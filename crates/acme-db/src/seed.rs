//! # Seeding
//!
//! Loads a [`Dataset`] into SQLite. Used by the `seed` binary and by tests
//! that need the SQLite store and the fixture store to hold the same rows.
//!
//! ```text
//! Dataset::validate ──► BEGIN
//!                         customers ──► invoices (FK on customer_id) ──► revenue ──► users
//!                       COMMIT (any failure rolls the whole load back)
//! ```

use tracing::info;

use crate::error::{DbError, DbResult};
use crate::fixture::Dataset;
use crate::pool::Database;
use crate::repository::{
    customer::CustomerRepository, invoice::InvoiceRepository, revenue::RevenueRepository,
    user::UserRepository,
};

/// Row counts written by [`seed_dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
    pub users: usize,
}

/// Inserts every row of `dataset` in one transaction.
///
/// The dataset is validated first. Customers go first so invoice foreign
/// keys resolve. Either every row lands or none does. User passwords are
/// written as given; hash them first (see [`hash_password`]).
pub async fn seed_dataset(db: &Database, dataset: &Dataset) -> DbResult<SeedSummary> {
    dataset.validate()?;

    let mut tx = db.pool().begin().await?;

    for customer in &dataset.customers {
        CustomerRepository::insert(&mut *tx, customer).await?;
    }

    for invoice in &dataset.invoices {
        InvoiceRepository::insert(&mut *tx, invoice).await?;
    }

    for month in &dataset.revenue {
        RevenueRepository::insert(&mut *tx, month).await?;
    }

    for user in &dataset.users {
        UserRepository::insert(&mut *tx, user).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        customers: dataset.customers.len(),
        invoices: dataset.invoices.len(),
        revenue: dataset.revenue.len(),
        users: dataset.users.len(),
    };

    info!(
        customers = summary.customers,
        invoices = summary.invoices,
        revenue = summary.revenue,
        users = summary.users,
        "Seeded dataset"
    );
    Ok(summary)
}

/// Whether any dashboard table already holds rows.
pub async fn is_seeded(db: &Database) -> DbResult<bool> {
    let rows = db.customers().count().await?
        + db.invoices().count().await?
        + db.revenues().count().await?
        + db.users().count().await?;

    Ok(rows > 0)
}

/// Hashes a password with Argon2id and a random salt, returning the PHC
/// string stored in `users.password`.
pub fn hash_password(password: &str) -> DbResult<String> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    #[tokio::test]
    async fn test_seed_sample_dataset() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(!is_seeded(&db).await.unwrap());

        let summary = seed_dataset(&db, &Dataset::sample()).await.unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                customers: 12,
                invoices: 12,
                revenue: 6,
                users: 1,
            }
        );
        assert!(is_seeded(&db).await.unwrap());
    }

    #[tokio::test]
    async fn test_seeding_twice_fails_on_duplicates() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_dataset(&db, &Dataset::sample()).await.unwrap();

        assert!(matches!(
            seed_dataset(&db, &Dataset::sample()).await,
            Err(DbError::UniqueViolation { .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_seed_writes_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Valid on its own, but the second user collides on email after
        // customers, invoices and revenue are already inserted.
        let mut dataset = Dataset::sample();
        let mut twin = dataset.users[0].clone();
        twin.id = "second-user".to_string();
        dataset.users.push(twin);

        assert!(matches!(
            seed_dataset(&db, &dataset).await,
            Err(DbError::UniqueViolation { .. })
        ));
        assert!(!is_seeded(&db).await.unwrap());
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_dataset_is_rejected_before_writing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut dataset = Dataset::sample();
        dataset.invoices[0].customer_id = "missing".to_string();

        assert!(matches!(
            seed_dataset(&db, &dataset).await,
            Err(DbError::InvalidData(_))
        ));
        assert!(!is_seeded(&db).await.unwrap());
    }

    #[test]
    fn test_hash_password_verifies() {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let hash = hash_password("123456").unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"123456", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"654321", &parsed)
            .is_err());
    }
}
