//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserId};

/// User repository trait.
///
/// Every write is a single statement in its own transaction. Uniqueness of
/// `username` and `email` is enforced by the datastore, not checked here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns all users in insertion order.
    async fn list_all(&self) -> RosterResult<Vec<User>>;

    /// Inserts a user and returns it with its assigned id.
    ///
    /// Fails with `RosterError::Integrity` on a duplicate username or email.
    async fn insert(&self, user: &NewUser) -> RosterResult<User>;

    /// Deletes a user by ID. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: UserId) -> RosterResult<bool>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;

    /// Checks that the datastore is reachable.
    async fn health_check(&self) -> RosterResult<()>;
}
