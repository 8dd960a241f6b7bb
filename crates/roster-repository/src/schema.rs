//! DDL for the `users` table.

use crate::DatabaseBackend;

/// Returns the idempotent `CREATE TABLE` statement for `backend`.
///
/// Ids come from a sequence (`BIGSERIAL`) or `AUTOINCREMENT`, so a deleted
/// id is never handed out again.
#[must_use]
pub const fn create_users_table(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                username VARCHAR(80) NOT NULL UNIQUE,
                email VARCHAR(120) NOT NULL UNIQUE
            )
            "#
        }
        DatabaseBackend::Sqlite => {
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username VARCHAR(80) NOT NULL UNIQUE,
                email VARCHAR(120) NOT NULL UNIQUE
            )
            "#
        }
    }
}
