//! # User Repository
//!
//! Login lookup. Emails are unique and matched exactly.

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use acme_core::User;

/// Repository for dashboard users.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Finds the user with exactly this email.
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - User found, `password` holds the stored hash
    /// * `Ok(None)` - No such user
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = user.is_some(), "Looked up user by email");
        Ok(user)
    }

    /// Number of users.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserts a user. `user.password` must already be hashed.
    pub async fn insert<'e, E>(executor: E, user: &User) -> DbResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(executor)
        .await?;

        debug!(id = %user.id, "Inserted user");
        Ok(())
    }
}
