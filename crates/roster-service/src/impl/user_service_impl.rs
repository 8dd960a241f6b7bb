//! User service implementation.

use crate::dto::{AddUserForm, UserListResponse, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service over any [`UserRepository`].
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self) -> RosterResult<UserListResponse> {
        debug!("Listing users");

        let users = self.user_repository.list_all().await?;
        Ok(UserListResponse::from(users))
    }

    async fn add_user(&self, form: AddUserForm) -> RosterResult<UserResponse> {
        let new_user = form.into_new_user()?;
        debug!("Adding user: {}", new_user.username);

        // No duplicate pre-check: the unique constraints decide.
        let saved_user = self.user_repository.insert(&new_user).await?;

        info!("User added: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_repository.delete_by_id(id).await?;

        if !deleted {
            return Err(RosterError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn check_datastore(&self) -> RosterResult<()> {
        self.user_repository.health_check().await
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
