//! # Roster Repository
//!
//! Data access for the user directory:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! SqlUserRepository             (SQLx, Any driver)
//!   ↓  Arc<DatabasePool>
//! PostgreSQL | SQLite
//! ```
//!
//! The backend is picked from the connection string scheme. The `users`
//! table is created by [`DatabasePool::bootstrap_schema`], which runs once
//! at startup.

pub mod pool;
pub mod schema;
pub mod sql;
pub mod traits;

pub use pool::*;
pub use sql::*;
pub use traits::*;
