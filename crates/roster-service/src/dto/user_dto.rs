//! User-related DTOs.

use roster_core::{NewUser, RosterError, RosterResult, User, UserId};
use serde::{Deserialize, Serialize};

/// Fields submitted by the add-user form.
///
/// Both fields are optional at the wire level so a missing field can be
/// reported as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddUserForm {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl AddUserForm {
    /// Creates a form with both fields present.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
        }
    }

    /// Converts the form into an insert payload.
    ///
    /// Only presence is checked; uniqueness is left to the datastore.
    pub fn into_new_user(self) -> RosterResult<NewUser> {
        let username = self
            .username
            .ok_or_else(|| RosterError::validation("Missing form field: username"))?;
        let email = self
            .email
            .ok_or_else(|| RosterError::validation("Missing form field: email"))?;
        Ok(NewUser { username, email })
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// All stored users, in datastore order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

impl UserListResponse {
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}
