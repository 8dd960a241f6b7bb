//! Common test infrastructure for database integration tests.

use roster_config::DatabaseConfig;
use roster_repository::DatabasePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper.
///
/// Owns a temporary SQLite file that lives as long as this value.
pub struct TestDatabase {
    _dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database with the schema already bootstrapped.
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("roster.db").display());

        let config = DatabaseConfig {
            max_connections: 4,
            ..DatabaseConfig::with_url(url)
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open test database");

        pool.bootstrap_schema()
            .await
            .expect("Failed to bootstrap schema");

        Self {
            _dir: dir,
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}
