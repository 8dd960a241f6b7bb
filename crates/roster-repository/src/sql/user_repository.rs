//! SQL user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// User repository over the shared [`DatabasePool`].
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqlUserRepository {
    /// Creates a new SQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn list_all(&self) -> RosterResult<Vec<User>> {
        debug!("Listing all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email FROM users ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: &NewUser) -> RosterResult<User> {
        debug!("Inserting user: {}", user.username);

        let mut tx = self.pool.inner().begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(id, username = %user.username, "User inserted");
        Ok(user.clone().with_id(UserId::new(id)))
    }

    async fn delete_by_id(&self, id: UserId) -> RosterResult<bool> {
        debug!("Deleting user: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RosterResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn health_check(&self) -> RosterResult<()> {
        self.pool.health_check().await
    }
}

impl std::fmt::Debug for SqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlUserRepository")
            .field("backend", &self.pool.backend())
            .finish_non_exhaustive()
    }
}
