//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Users are never updated in place: they are created with a fresh id,
/// listed, and eventually deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Datastore-assigned identifier.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// Unique email address.
    pub email: String,
}

impl User {
    /// Creates a user from its stored parts.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User {}>", self.username)
    }
}

/// Insert payload for a user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Attaches the id the datastore assigned on insert.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}
