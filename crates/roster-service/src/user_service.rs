//! User service trait definition.

use crate::dto::{AddUserForm, UserListResponse, UserResponse};
use async_trait::async_trait;
use roster_core::{RosterResult, UserId};

/// User directory service.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists every stored user.
    async fn list_users(&self) -> RosterResult<UserListResponse>;

    /// Adds a user from submitted form fields.
    async fn add_user(&self, form: AddUserForm) -> RosterResult<UserResponse>;

    /// Deletes a user, failing with not-found if the id is unknown.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;

    /// Checks that the backing datastore is reachable.
    async fn check_datastore(&self) -> RosterResult<()>;
}
