//! Database connection pool management.

use crate::schema;
use roster_config::DatabaseConfig;
use roster_core::{RosterError, RosterResult};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::fmt::{self, Display};
use std::sync::Arc;
use tracing::{info, warn};

/// Relational backend selected by the connection string scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    /// Detects the backend from the configured connection URL.
    pub fn from_config(config: &DatabaseConfig) -> RosterResult<Self> {
        match config.scheme().as_deref() {
            Some("postgres" | "postgresql") => Ok(Self::Postgres),
            Some("sqlite") => Ok(Self::Sqlite),
            Some(other) => Err(RosterError::Configuration(format!(
                "Unsupported database scheme: '{}'",
                other
            ))),
            None => Err(RosterError::Configuration(format!(
                "Invalid database URL: '{}'",
                config.redacted_url()
            ))),
        }
    }
}

impl Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: AnyPool,
    backend: DatabaseBackend,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> RosterResult<Self> {
        let backend = DatabaseBackend::from_config(config)?;
        sqlx::any::install_default_drivers();

        info!(
            backend = %backend,
            url = %config.redacted_url(),
            "Connecting to database..."
        );

        let pool = AnyPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                RosterError::Database(format!("Failed to connect: {}", e))
            })?;

        info!(backend = %backend, "Database connection pool established");
        Ok(Self { pool, backend })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &AnyPool {
        &self.pool
    }

    /// Returns the backend this pool talks to.
    #[must_use]
    pub const fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> RosterResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Creates the `users` table if it does not exist yet.
    ///
    /// Safe to run on every start; existing data is left untouched.
    pub async fn bootstrap_schema(&self) -> RosterResult<()> {
        info!("Bootstrapping database schema...");
        sqlx::query(schema::create_users_table(self.backend))
            .execute(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("Schema bootstrap failed: {}", e)))?;
        info!("Database schema ready");
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend)
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> RosterResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_of(url: &str) -> RosterResult<DatabaseBackend> {
        DatabaseBackend::from_config(&DatabaseConfig::with_url(url))
    }

    #[test]
    fn test_backend_from_config() {
        assert_eq!(
            backend_of("postgresql://u:p@localhost/db").unwrap(),
            DatabaseBackend::Postgres
        );
        assert_eq!(
            backend_of("postgres://localhost/db").unwrap(),
            DatabaseBackend::Postgres
        );
        assert_eq!(
            backend_of("SQLite://roster.db?mode=rwc").unwrap(),
            DatabaseBackend::Sqlite
        );
        assert_eq!(backend_of("sqlite::memory:").unwrap(), DatabaseBackend::Sqlite);
    }

    #[test]
    fn test_backend_rejects_unknown_scheme() {
        match backend_of("mysql://localhost/db") {
            Err(RosterError::Configuration(msg)) => assert!(msg.contains("mysql")),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_rejects_unparseable_url() {
        match backend_of("not a url") {
            Err(RosterError::Configuration(msg)) => assert!(msg.contains("Invalid database URL")),
            other => panic!("Expected configuration error, got {:?}", other),
        }
        assert!(backend_of("").is_err());
    }

    #[tokio::test]
    async fn test_connect_failure_is_database_error() {
        let config = DatabaseConfig {
            connect_timeout_secs: 1,
            ..DatabaseConfig::with_url("sqlite:///nonexistent-dir/roster/never.db")
        };
        let result = DatabasePool::new(&config).await;
        assert!(matches!(result, Err(RosterError::Database(_))));
    }
}
